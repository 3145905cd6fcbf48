//! In-memory store and data builders for tests. The store implements every
//! port the engine consumes so tests exercise the same code paths a real
//! storage adapter would.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::{
    Clock, CompanyId, ComplianceRecord, CoreResult, DateRange, EuLegAllocation, FleetId, FuelData,
    FuelQuantities, NewTrip, ReportingOutbound, StatusTransition, Trip, TripId, TripIngestInbound,
    TripsQuery, Vessel, VesselClass, VesselId, VoyageId, VoyageLifecycleInbound, VoyageStatus,
};

#[derive(Default)]
struct State {
    vessels: Vec<Vessel>,
    trips: Vec<Trip>,
    compliance: Vec<ComplianceRecord>,
    next_trip_id: i64,
}

#[derive(Default)]
pub struct TestStore {
    state: Mutex<State>,
}

impl TestStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vessel(&self, vessel: Vessel) {
        self.state.lock().unwrap().vessels.push(vessel);
    }

    pub fn add_compliance_record(&self, record: ComplianceRecord) {
        self.state.lock().unwrap().compliance.push(record);
    }

    /// Inserts a trip directly, bypassing ingest validation. Intended for
    /// read-side tests that need a fixed starting state.
    pub fn push_trip(&self, trip: NewTrip) -> Trip {
        let mut state = self.state.lock().unwrap();
        let trip = materialize(&mut state, trip);
        state.trips.push(trip.clone());
        trip
    }

    pub fn set_status(&self, id: TripId, status: VoyageStatus) {
        let mut state = self.state.lock().unwrap();
        if let Some(trip) = state.trips.iter_mut().find(|t| t.id == id) {
            trip.status = status;
        }
    }

    pub fn trip(&self, id: TripId) -> Option<Trip> {
        self.state
            .lock()
            .unwrap()
            .trips
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }

    fn company_of(state: &State, vessel_id: VesselId) -> Option<CompanyId> {
        state
            .vessels
            .iter()
            .find(|v| v.id == vessel_id)
            .map(|v| v.company_id)
    }
}

fn materialize(state: &mut State, trip: NewTrip) -> Trip {
    state.next_trip_id += 1;
    Trip {
        id: TripId(state.next_trip_id),
        vessel_id: trip.vessel_id,
        voyage_id: trip.voyage_id,
        period: trip.period,
        status: VoyageStatus::Actual,
        distance: trip.distance,
        freight_profit: trip.freight_profit,
        bunker_cost: trip.bunker_cost,
        is_aggregate: trip.is_aggregate,
        fuel: trip.fuel,
    }
}

#[async_trait]
impl ReportingOutbound for TestStore {
    async fn vessels(&self) -> CoreResult<Vec<Vessel>> {
        Ok(self.state.lock().unwrap().vessels.clone())
    }

    async fn trips_for(&self, query: &TripsQuery) -> CoreResult<Vec<Trip>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .trips
            .iter()
            .filter(|t| query.vessel_id.is_none_or(|id| t.vessel_id == id))
            .filter(|t| {
                query.company_id.is_none_or(|id| {
                    TestStore::company_of(&state, t.vessel_id).is_some_and(|c| c == id)
                })
            })
            .filter(|t| query.journey_type.is_none_or(|j| t.journey_type() == j))
            .filter(|t| query.range.is_none_or(|r| r.contains(t.period.end())))
            .filter(|t| query.statuses.is_empty() || query.statuses.contains(&t.status))
            .cloned()
            .collect())
    }

    async fn aggregate_trips(&self, company_id: CompanyId) -> CoreResult<Vec<Trip>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .trips
            .iter()
            .filter(|t| t.is_aggregate)
            .filter(|t| {
                TestStore::company_of(&state, t.vessel_id).is_some_and(|c| c == company_id)
            })
            .cloned()
            .collect())
    }

    async fn compliance_record(
        &self,
        vessel_id: VesselId,
        year: i32,
    ) -> CoreResult<Option<ComplianceRecord>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .compliance
            .iter()
            .find(|r| r.vessel_id == vessel_id && r.year == year)
            .copied())
    }
}

#[async_trait]
impl TripIngestInbound for TestStore {
    async fn trips_of_vessel(&self, vessel_id: VesselId) -> CoreResult<Vec<Trip>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .trips
            .iter()
            .filter(|t| t.vessel_id == vessel_id)
            .cloned()
            .collect())
    }

    async fn add_trips(&self, trips: Vec<NewTrip>) -> CoreResult<Vec<Trip>> {
        let mut state = self.state.lock().unwrap();
        let trips: Vec<Trip> = trips
            .into_iter()
            .map(|t| materialize(&mut state, t))
            .collect();
        state.trips.extend(trips.iter().cloned());
        Ok(trips)
    }
}

#[async_trait]
impl VoyageLifecycleInbound for TestStore {
    async fn apply_status_transition(
        &self,
        transition: StatusTransition,
        now: DateTime<Utc>,
    ) -> CoreResult<u64> {
        let mut state = self.state.lock().unwrap();
        let mut affected = 0;
        for trip in &mut state.trips {
            if transition.applies(trip, now) {
                trip.status = transition.target();
                affected += 1;
            }
        }
        Ok(affected)
    }
}

pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }

    pub fn advance(&self, duration: Duration) {
        *self.now.lock().unwrap() += duration;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

pub struct TestVesselBuilder {
    vessel: Vessel,
}

impl TestVesselBuilder {
    pub fn new(id: i64, company_id: i64) -> Self {
        let imo = rand::rng().random_range(1_000_000..10_000_000);
        Self {
            vessel: Vessel {
                id: VesselId(id),
                company_id: CompanyId(company_id),
                fleet_id: None,
                name: format!("Test Vessel {id}"),
                imo: imo.to_string(),
                class: VesselClass::TankerLike,
                dwt: 50_000.0,
                build_year: 2015,
                eedi: None,
                gross_tonnage: None,
                net_tonnage: None,
            },
        }
    }

    pub fn class(mut self, class: VesselClass) -> Self {
        self.vessel.class = class;
        self
    }

    pub fn dwt(mut self, dwt: f64) -> Self {
        self.vessel.dwt = dwt;
        self
    }

    pub fn fleet(mut self, fleet_id: i64) -> Self {
        self.vessel.fleet_id = Some(FleetId(fleet_id));
        self
    }

    pub fn build_year(mut self, year: i32) -> Self {
        self.vessel.build_year = year;
        self
    }

    pub fn eedi(mut self, eedi: f64) -> Self {
        self.vessel.eedi = Some(eedi);
        self
    }

    pub fn gross_tonnage(mut self, gross_tonnage: f64) -> Self {
        self.vessel.gross_tonnage = Some(gross_tonnage);
        self
    }

    pub fn build(self) -> Vessel {
        self.vessel
    }
}

pub struct TestTripBuilder {
    trip: NewTrip,
}

impl TestTripBuilder {
    pub fn new(vessel_id: VesselId, period: DateRange) -> Self {
        let voyage = rand::rng().random_range(100_000..1_000_000);
        Self {
            trip: NewTrip {
                vessel_id,
                voyage_id: VoyageId::new_unchecked(format!("V{voyage}")),
                period,
                distance: None,
                freight_profit: 0.0,
                bunker_cost: 0.0,
                is_aggregate: false,
                fuel: FuelData::Cii(FuelQuantities::default()),
            },
        }
    }

    pub fn voyage(mut self, voyage_id: &str) -> Self {
        self.trip.voyage_id = VoyageId::new_unchecked(voyage_id);
        self
    }

    pub fn distance(mut self, distance: f64) -> Self {
        self.trip.distance = Some(distance);
        self
    }

    pub fn freight_profit(mut self, freight_profit: f64) -> Self {
        self.trip.freight_profit = freight_profit;
        self
    }

    pub fn bunker_cost(mut self, bunker_cost: f64) -> Self {
        self.trip.bunker_cost = bunker_cost;
        self
    }

    pub fn aggregate(mut self) -> Self {
        self.trip.is_aggregate = true;
        self
    }

    pub fn fuel(mut self, fuel: FuelQuantities) -> Self {
        self.trip.fuel = FuelData::Cii(fuel);
        self
    }

    pub fn legs(mut self, legs: Vec<EuLegAllocation>) -> Self {
        self.trip.fuel = FuelData::Ets(legs);
        self
    }

    pub fn build(self) -> NewTrip {
        self.trip
    }
}
