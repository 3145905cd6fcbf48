use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{CoreResult, NewTrip, StatusTransition, Trip, VesselId};

/// Write side of the trip store used by the ingest service. Validation
/// happens in the service; the adapter only has to make `add_trips`
/// all-or-nothing.
#[async_trait]
pub trait TripIngestInbound: Send + Sync {
    async fn trips_of_vessel(&self, vessel_id: VesselId) -> CoreResult<Vec<Trip>>;
    async fn add_trips(&self, trips: Vec<NewTrip>) -> CoreResult<Vec<Trip>>;
}

/// Write side used by the voyage lifecycle reconciler. One call applies one
/// transition class as a single bulk conditional update and reports the
/// number of affected trips.
#[async_trait]
pub trait VoyageLifecycleInbound: Send + Sync {
    async fn apply_status_transition(
        &self,
        transition: StatusTransition,
        now: DateTime<Utc>,
    ) -> CoreResult<u64>;
}
