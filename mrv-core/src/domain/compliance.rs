use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

use crate::VesselId;

/// Stored attained/required GHG compliance-unit values for one vessel-year,
/// produced by an external assessment process and only read here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplianceRecord {
    pub vessel_id: VesselId,
    pub year: i32,
    pub attained: f64,
    pub required: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GhgMetrics {
    pub attained: f64,
    pub required: f64,
    pub excess: f64,
    pub missing: f64,
    pub net_compliance_units: f64,
    pub has_penalty: bool,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    AsRefStr,
    EnumString,
)]
pub enum CiiCategory {
    A,
    B,
    C,
    D,
    E,
}

/// The four lower category boundaries, either as rate multipliers (in the
/// schedule) or as absolute CII values (scaled by the required CII, for chart
/// overlays).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CiiBoundaries {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl CiiBoundaries {
    pub fn scale(&self, required: f64) -> CiiBoundaries {
        CiiBoundaries {
            a: self.a * required,
            b: self.b * required,
            c: self.c * required,
            d: self.d * required,
        }
    }
}

/// Per-bucket CII output. Fields are `None` when the metric is not
/// computable (zero transport work, undefined baseline or schedule year);
/// callers must not coerce that to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CiiMetrics {
    pub emissions: f64,
    pub distance: f64,
    pub required: Option<f64>,
    pub cii: Option<f64>,
    pub cii_rate: Option<f64>,
    pub category: Option<CiiCategory>,
    pub boundaries: Option<CiiBoundaries>,
}

/// Per-bucket EU ETS output. CO2 figures are tonnes, `eua_cost` is in the
/// configured carbon-price currency, percents are ratios of the cost against
/// freight profit / bunker cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EtsMetrics {
    pub co2_inbound_eu: f64,
    pub co2_outbound_eu: f64,
    pub co2_within_eu: f64,
    pub co2_eu_port: f64,
    pub fuel_consumption: f64,
    pub total_co2: f64,
    pub regulated_co2: f64,
    pub eua_cost: f64,
    pub fp_percent: Option<f64>,
    pub bc_percent: Option<f64>,
}
