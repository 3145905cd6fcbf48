use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use mrv_core::error::error::{
    BatchTripOverlapSnafu, StorageSnafu, TripOverlapSnafu, YearBoundarySnafu,
};
use mrv_core::{NewTrip, Trip, TripIngestInbound, VesselId};
use snafu::ensure;
use tokio::sync::Mutex as AsyncMutex;
use tracing::instrument;

use crate::Result;

/// Validated trip creation. The overlap invariant is check-then-insert, so
/// creations for the same vessel are serialized through a per-vessel lock;
/// batches lock every involved vessel in id order and commit all rows or
/// none.
pub struct TripIngest {
    adapter: Arc<dyn TripIngestInbound>,
    vessel_locks: Mutex<HashMap<VesselId, Arc<AsyncMutex<()>>>>,
}

impl TripIngest {
    pub fn new(adapter: Arc<dyn TripIngestInbound>) -> Self {
        Self {
            adapter,
            vessel_locks: Mutex::new(HashMap::new()),
        }
    }

    #[instrument(skip_all, fields(vessel_id = %trip.vessel_id))]
    pub async fn create(&self, trip: NewTrip) -> Result<Trip> {
        let lock = self.vessel_lock(trip.vessel_id);
        let _guard = lock.lock().await;

        self.validate_against_store(&trip, None).await?;

        let mut created = self.adapter.add_trips(vec![trip]).await?;
        created.pop().ok_or_else(|| {
            StorageSnafu {
                description: "store returned no trip for a committed insert",
            }
            .build()
            .into()
        })
    }

    /// Bulk upload. Rows are rejected with their 1-based row number; any
    /// rejection fails the whole batch before anything is written.
    #[instrument(skip_all, fields(rows = trips.len()))]
    pub async fn create_batch(&self, trips: Vec<NewTrip>) -> Result<Vec<Trip>> {
        for (idx, trip) in trips.iter().enumerate() {
            ensure!(
                !trip.period.spans_year_boundary(),
                YearBoundarySnafu { row: idx + 1 }
            );
        }

        for (idx, trip) in trips.iter().enumerate() {
            let conflict = !trip.is_aggregate
                && trips[..idx].iter().any(|other| {
                    other.vessel_id == trip.vessel_id
                        && !other.is_aggregate
                        && other.journey_type() == trip.journey_type()
                        && other.period.overlaps(&trip.period)
                });
            ensure!(
                !conflict,
                BatchTripOverlapSnafu {
                    vessel_id: trip.vessel_id,
                    journey_type: trip.journey_type(),
                    row: idx + 1,
                }
            );
        }

        // Locks are acquired in vessel-id order so concurrent batches over
        // the same vessels cannot deadlock.
        let mut vessel_ids: Vec<VesselId> = trips.iter().map(|t| t.vessel_id).collect();
        vessel_ids.sort();
        vessel_ids.dedup();
        let locks: Vec<Arc<AsyncMutex<()>>> = vessel_ids
            .into_iter()
            .map(|id| self.vessel_lock(id))
            .collect();
        let mut guards = Vec::with_capacity(locks.len());
        for lock in &locks {
            guards.push(lock.lock().await);
        }

        for (idx, trip) in trips.iter().enumerate() {
            self.validate_against_store(trip, Some(idx + 1)).await?;
        }

        Ok(self.adapter.add_trips(trips).await?)
    }

    async fn validate_against_store(&self, trip: &NewTrip, row: Option<usize>) -> Result<()> {
        // Aggregate trips summarize a range that itemized trips may already
        // occupy; they are exempt from the overlap invariant.
        if trip.is_aggregate {
            return Ok(());
        }

        let existing = self.adapter.trips_of_vessel(trip.vessel_id).await?;
        let conflict = existing.iter().any(|other| {
            !other.is_aggregate
                && other.journey_type() == trip.journey_type()
                && other.period.overlaps(&trip.period)
        });

        if let Some(row) = row {
            ensure!(
                !conflict,
                BatchTripOverlapSnafu {
                    vessel_id: trip.vessel_id,
                    journey_type: trip.journey_type(),
                    row,
                }
            );
        } else {
            ensure!(
                !conflict,
                TripOverlapSnafu {
                    vessel_id: trip.vessel_id,
                    journey_type: trip.journey_type(),
                }
            );
        }

        Ok(())
    }

    fn vessel_lock(&self, vessel_id: VesselId) -> Arc<AsyncMutex<()>> {
        self.vessel_locks
            .lock()
            .unwrap()
            .entry(vessel_id)
            .or_default()
            .clone()
    }
}
