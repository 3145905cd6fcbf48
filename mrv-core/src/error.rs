use snafu::{Location, Snafu};

use crate::{DateRangeError, JourneyType, VesselId, VoyageIdError};

pub type CoreResult<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display(
        "Vessel '{vessel_id}' already has a '{journey_type}' voyage overlapping these dates"
    ))]
    TripOverlap {
        #[snafu(implicit)]
        location: Location,
        vessel_id: VesselId,
        journey_type: JourneyType,
    },
    #[snafu(display(
        "Vessel '{vessel_id}' already has a '{journey_type}' voyage overlapping these dates, check row {row}"
    ))]
    BatchTripOverlap {
        #[snafu(implicit)]
        location: Location,
        vessel_id: VesselId,
        journey_type: JourneyType,
        row: usize,
    },
    #[snafu(display(
        "Voyages split between 2 years can only be entered as one trip per year, check row {row}"
    ))]
    YearBoundary {
        #[snafu(implicit)]
        location: Location,
        row: usize,
    },
    #[snafu(display("Invalid voyage id"))]
    InvalidVoyageId {
        #[snafu(implicit)]
        location: Location,
        source: VoyageIdError,
    },
    #[snafu(display("Invalid date range"))]
    InvalidDateRange {
        #[snafu(implicit)]
        location: Location,
        source: DateRangeError,
    },
    #[snafu(display("Failed a storage operation: {description}"))]
    Storage {
        #[snafu(implicit)]
        location: Location,
        description: String,
    },
}

impl Error {
    /// Whether the error is a user-actionable validation conflict that should
    /// be surfaced verbatim, as opposed to an internal failure.
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::TripOverlap { .. }
            | Error::BatchTripOverlap { .. }
            | Error::YearBoundary { .. }
            | Error::InvalidVoyageId { .. }
            | Error::InvalidDateRange { .. } => true,
            Error::Storage { .. } => false,
        }
    }
}
