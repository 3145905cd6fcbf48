use std::sync::Arc;

use chrono::Duration;
use mrv_core::{Clock, StatusTransition, VoyageLifecycleInbound};
use tracing::{info, instrument};

use crate::Result;

static RUN_INTERVAL: Duration = Duration::seconds(30);

/// Walks voyage statuses forward as wall-clock time passes. Trips recorded
/// as `ACTUAL` but starting in the future become `PREDICTED`; predicted
/// trips whose end has passed become `ARCHIVED`, which is terminal.
///
/// Each transition class is applied as one bulk conditional update, so a
/// crash between the two updates leaves valid (if partially advanced)
/// statuses. Ticks run sequentially in a single task and never overlap.
#[derive(Clone)]
pub struct VoyageLifecycle {
    adapter: Arc<dyn VoyageLifecycleInbound>,
    clock: Arc<dyn Clock>,
}

impl VoyageLifecycle {
    pub fn new(adapter: Arc<dyn VoyageLifecycleInbound>, clock: Arc<dyn Clock>) -> Self {
        Self { adapter, clock }
    }

    pub async fn run_continuous(self) -> Result<()> {
        let mut interval = tokio::time::interval(RUN_INTERVAL.to_std().unwrap());
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            self.run_single().await?;
        }
    }

    /// One reconciliation tick. Idempotent, repeated runs against the same
    /// data and clock produce no further change.
    #[instrument(skip_all)]
    pub async fn run_single(&self) -> Result<()> {
        let now = self.clock.now();

        let predicted = self
            .adapter
            .apply_status_transition(StatusTransition::ActualToPredicted, now)
            .await?;
        let archived = self
            .adapter
            .apply_status_transition(StatusTransition::PredictedToArchived, now)
            .await?;

        if predicted > 0 || archived > 0 {
            info!("voyage lifecycle updated {predicted} trips to PREDICTED, {archived} to ARCHIVED");
        }

        Ok(())
    }
}
