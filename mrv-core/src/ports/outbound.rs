use async_trait::async_trait;

use crate::{CompanyId, ComplianceRecord, CoreResult, Trip, TripsQuery, Vessel, VesselId};

/// Read side of the trip store consumed by the bucketing engine and the
/// comparison rollup. A `trips_for` call must return one consistent snapshot;
/// each bucket computation issues exactly one.
#[async_trait]
pub trait ReportingOutbound: Send + Sync {
    async fn vessels(&self) -> CoreResult<Vec<Vessel>>;
    async fn trips_for(&self, query: &TripsQuery) -> CoreResult<Vec<Trip>>;
    /// All aggregate trips of a company, used by the double-counting
    /// suppression rule.
    async fn aggregate_trips(&self, company_id: CompanyId) -> CoreResult<Vec<Trip>>;
    async fn compliance_record(
        &self,
        vessel_id: VesselId,
        year: i32,
    ) -> CoreResult<Option<ComplianceRecord>>;
}
