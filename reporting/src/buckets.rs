use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Datelike;
use compliance_benchmark::{CiiCalculator, EtsCalculator, evaluate_compliance};
use mrv_core::{
    BucketLevel, CiiMetrics, DateRange, EtsMetrics, FuelData, FuelQuantities, GhgMetrics,
    JourneyType, RegulatorySchedules, ReportingOutbound, Trip, TripId, TripsQuery, Vessel,
    VesselId, VoyageId, VoyageStatus,
};

use crate::Result;

/// Grouping key of one output bucket. Month and year keys are taken from the
/// trip's end date; a voyage split at a year boundary still lands in a single
/// voyage bucket.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum BucketKey {
    Year(i32),
    Month { year: i32, month: u32 },
    Voyage(VoyageId),
    Trip(TripId),
}

pub fn bucket_key(trip: &Trip, level: BucketLevel) -> BucketKey {
    match level {
        BucketLevel::Year => BucketKey::Year(trip.period.end().year()),
        BucketLevel::Month => BucketKey::Month {
            year: trip.period.end().year(),
            month: trip.period.end().month(),
        },
        BucketLevel::Voyage => BucketKey::Voyage(trip.voyage_id.clone()),
        BucketLevel::Trip => BucketKey::Trip(trip.id),
    }
}

/// The double-counting rule between summarized and itemized records: an
/// itemized trip is dropped when some other aggregate trip of the company
/// covers its dates, aggregate trips always count themselves.
pub fn counts_toward_buckets(trip: &Trip, company_aggregates: &[Trip]) -> bool {
    trip.is_aggregate
        || !company_aggregates
            .iter()
            .any(|a| a.id != trip.id && a.period.covers(&trip.period))
}

#[derive(Debug, Clone, PartialEq)]
pub struct CiiBucket {
    pub key: BucketKey,
    pub year: i32,
    pub metrics: CiiMetrics,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EtsBucket {
    pub key: BucketKey,
    pub year: i32,
    pub metrics: EtsMetrics,
}

/// Read-side engine turning stored trips into per-bucket compliance metrics.
/// Stateless apart from the configured schedules; clones share the adapter.
#[derive(Clone)]
pub struct ReportingEngine {
    pub(crate) adapter: Arc<dyn ReportingOutbound>,
    pub(crate) schedules: Arc<RegulatorySchedules>,
}

impl ReportingEngine {
    pub fn new(adapter: Arc<dyn ReportingOutbound>, schedules: RegulatorySchedules) -> Self {
        Self {
            adapter,
            schedules: Arc::new(schedules),
        }
    }

    pub fn schedules(&self) -> &RegulatorySchedules {
        &self.schedules
    }

    pub async fn cii_buckets(
        &self,
        vessel: &Vessel,
        level: BucketLevel,
        statuses: &[VoyageStatus],
        range: Option<DateRange>,
    ) -> Result<Vec<CiiBucket>> {
        let trips = self
            .bucket_trips(vessel, JourneyType::Cii, statuses, range)
            .await?;

        let calculator = CiiCalculator::new(&self.schedules);
        let buckets = group_by_key(trips, level)
            .into_iter()
            .map(|(key, trips)| {
                let mut fuel = FuelQuantities::default();
                let mut distance = 0.0;
                for trip in &trips {
                    if let FuelData::Cii(quantities) = &trip.fuel {
                        fuel += *quantities;
                    }
                    distance += trip.distance.unwrap_or(0.0);
                }
                let year = bucket_year(&trips);
                CiiBucket {
                    key,
                    year,
                    metrics: calculator.compute(vessel.class, vessel.dwt, &fuel, distance, year),
                }
            })
            .collect();

        Ok(buckets)
    }

    pub async fn ets_buckets(
        &self,
        vessel: &Vessel,
        level: BucketLevel,
        statuses: &[VoyageStatus],
        range: Option<DateRange>,
    ) -> Result<Vec<EtsBucket>> {
        let trips = self
            .bucket_trips(vessel, JourneyType::Ets, statuses, range)
            .await?;

        let calculator = EtsCalculator::new(&self.schedules);
        let buckets = group_by_key(trips, level)
            .into_iter()
            .map(|(key, trips)| {
                let mut legs = Vec::new();
                let mut freight_profit = 0.0;
                let mut bunker_cost = 0.0;
                for trip in &trips {
                    if let FuelData::Ets(allocations) = &trip.fuel {
                        legs.extend_from_slice(allocations);
                    }
                    freight_profit += trip.freight_profit;
                    bunker_cost += trip.bunker_cost;
                }
                let year = bucket_year(&trips);
                EtsBucket {
                    key,
                    year,
                    metrics: calculator.compute(&legs, freight_profit, bunker_cost, year),
                }
            })
            .collect();

        Ok(buckets)
    }

    pub async fn ghg_metrics(&self, vessel_id: VesselId, year: i32) -> Result<Option<GhgMetrics>> {
        let record = self.adapter.compliance_record(vessel_id, year).await?;
        Ok(record.as_ref().map(evaluate_compliance))
    }

    /// One consistent snapshot of the trips feeding a bucket computation,
    /// with the status filter and aggregate suppression already applied.
    async fn bucket_trips(
        &self,
        vessel: &Vessel,
        journey_type: JourneyType,
        statuses: &[VoyageStatus],
        range: Option<DateRange>,
    ) -> Result<Vec<Trip>> {
        let mut query = TripsQuery::for_vessel(vessel.id, journey_type).with_statuses(statuses);
        if let Some(range) = range {
            query = query.with_range(range);
        }

        let trips = self.adapter.trips_for(&query).await?;
        let aggregates = self.adapter.aggregate_trips(vessel.company_id).await?;

        Ok(trips
            .into_iter()
            .filter(|t| counts_toward_buckets(t, &aggregates))
            .collect())
    }
}

fn group_by_key(trips: Vec<Trip>, level: BucketLevel) -> BTreeMap<BucketKey, Vec<Trip>> {
    let mut groups: BTreeMap<BucketKey, Vec<Trip>> = BTreeMap::new();
    for trip in trips {
        groups.entry(bucket_key(&trip, level)).or_default().push(trip);
    }
    groups
}

/// The year the bucket's regulatory schedule entries are looked up for. For
/// year-split voyages this is the year the voyage ended in.
fn bucket_year(trips: &[Trip]) -> i32 {
    trips
        .iter()
        .map(|t| t.period.end().year())
        .max()
        .unwrap_or(0)
}
