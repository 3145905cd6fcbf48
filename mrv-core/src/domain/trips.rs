use std::fmt::{self, Display};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use snafu::{Location, Snafu};
use strum::{AsRefStr, EnumString};

use self::voyage_id_error::LengthSnafu;
use crate::{DateRange, FuelQuantities, FuelType, VesselId};

pub const MAX_VOYAGE_ID_LENGTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TripId(pub i64);

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum VoyageIdError {
    #[snafu(display(
        "Voyage id '{value}' exceeds the maximum length of {MAX_VOYAGE_ID_LENGTH}"
    ))]
    Length {
        #[snafu(implicit)]
        location: Location,
        value: String,
    },
}

/// Identifier grouping the trip rows of a single voyage. A voyage split at a
/// calendar-year boundary is stored as multiple trips sharing one voyage id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VoyageId(String);

impl VoyageId {
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for VoyageId {
    type Err = VoyageIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() > MAX_VOYAGE_ID_LENGTH {
            LengthSnafu { value: s }.fail()
        } else {
            Ok(Self(s.into()))
        }
    }
}

impl TryFrom<String> for VoyageId {
    type Error = VoyageIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl AsRef<str> for VoyageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

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
pub enum JourneyType {
    Cii,
    Ets,
}

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
pub enum VoyageStatus {
    Actual,
    Predicted,
    Archived,
}

impl VoyageStatus {
    pub const ALL: [VoyageStatus; 3] = [
        VoyageStatus::Actual,
        VoyageStatus::Predicted,
        VoyageStatus::Archived,
    ];
    /// The subset chart-style outputs are computed over.
    pub const UNARCHIVED: [VoyageStatus; 2] = [VoyageStatus::Actual, VoyageStatus::Predicted];
}

/// Fuel accounting payload of a trip. CII trips record plain per-fuel masses,
/// ETS trips record per-fuel EU leg allocations. The two accounting paths are
/// mutually exclusive.
#[derive(Debug, Clone, PartialEq)]
pub enum FuelData {
    Cii(FuelQuantities),
    Ets(Vec<EuLegAllocation>),
}

impl FuelData {
    pub fn journey_type(&self) -> JourneyType {
        match self {
            FuelData::Cii(_) => JourneyType::Cii,
            FuelData::Ets(_) => JourneyType::Ets,
        }
    }
}

/// Fuel masses of one fuel type split over the EU legs of an ETS journey,
/// owned by the trip and deleted with it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EuLegAllocation {
    pub fuel_type: FuelType,
    pub inbound_eu: f64,
    pub outbound_eu: f64,
    pub within_eu: f64,
    pub eu_port: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: TripId,
    pub vessel_id: VesselId,
    pub voyage_id: VoyageId,
    pub period: DateRange,
    pub status: VoyageStatus,
    pub distance: Option<f64>,
    pub freight_profit: f64,
    pub bunker_cost: f64,
    pub is_aggregate: bool,
    pub fuel: FuelData,
}

impl Trip {
    pub fn journey_type(&self) -> JourneyType {
        self.fuel.journey_type()
    }
}

/// Creation payload for a trip. Trips always start out as `Actual`, the
/// lifecycle reconciler corrects the status afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrip {
    pub vessel_id: VesselId,
    pub voyage_id: VoyageId,
    pub period: DateRange,
    pub distance: Option<f64>,
    pub freight_profit: f64,
    pub bunker_cost: f64,
    pub is_aggregate: bool,
    pub fuel: FuelData,
}

impl NewTrip {
    pub fn journey_type(&self) -> JourneyType {
        self.fuel.journey_type()
    }
}

/// One bulk status-transition class of the lifecycle reconciler. Each tick
/// applies every transition as a single conditional update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum StatusTransition {
    ActualToPredicted,
    PredictedToArchived,
}

impl StatusTransition {
    pub fn target(&self) -> VoyageStatus {
        match self {
            StatusTransition::ActualToPredicted => VoyageStatus::Predicted,
            StatusTransition::PredictedToArchived => VoyageStatus::Archived,
        }
    }

    /// Whether the transition applies to the given trip at time `now`.
    pub fn applies(&self, trip: &Trip, now: DateTime<Utc>) -> bool {
        match self {
            StatusTransition::ActualToPredicted => {
                trip.status == VoyageStatus::Actual && trip.period.start() > now
            }
            StatusTransition::PredictedToArchived => {
                trip.status == VoyageStatus::Predicted && trip.period.end() < now
            }
        }
    }
}

impl Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for VoyageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TripId> for i64 {
    fn from(value: TripId) -> Self {
        value.0
    }
}
