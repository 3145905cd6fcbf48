use std::sync::Arc;

use mrv_core::{Clock, TripIngestInbound, VoyageLifecycleInbound};

use crate::{Environment, Result, Settings, TripIngest, VoyageLifecycle};

/// Wires the write-side services over the host's storage adapter. The host
/// exposes `ingest` to its transport layer and drives the lifecycle
/// reconciler through `run`.
pub struct App {
    pub ingest: Arc<TripIngest>,
    lifecycle: VoyageLifecycle,
    environment: Environment,
}

impl App {
    pub fn build<A>(settings: &Settings, adapter: Arc<A>, clock: Arc<dyn Clock>) -> App
    where
        A: TripIngestInbound + VoyageLifecycleInbound + 'static,
    {
        App {
            ingest: Arc::new(TripIngest::new(adapter.clone())),
            lifecycle: VoyageLifecycle::new(adapter, clock),
            environment: settings.environment,
        }
    }

    pub async fn run(self) -> Result<()> {
        match self.environment {
            Environment::Production => self.lifecycle.run_continuous().await,
            Environment::Test => self.lifecycle.run_single().await,
        }
    }
}
