use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VesselId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CompanyId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FleetId(pub i64);

/// Vessel category selecting the CII baseline constants and rating
/// boundaries. Chemical and oil tankers share one constant set.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    AsRefStr,
    EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum VesselClass {
    TankerLike,
    BulkCarrier,
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vessel {
    pub id: VesselId,
    pub company_id: CompanyId,
    pub fleet_id: Option<FleetId>,
    pub name: String,
    pub imo: String,
    pub class: VesselClass,
    pub dwt: f64,
    pub build_year: i32,
    pub eedi: Option<f64>,
    pub gross_tonnage: Option<f64>,
    pub net_tonnage: Option<f64>,
}

impl Vessel {
    pub fn age(&self, reference_year: i32) -> i32 {
        reference_year - self.build_year
    }
}

impl Display for VesselId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for FleetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
