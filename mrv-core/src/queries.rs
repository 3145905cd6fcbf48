use serde::Deserialize;

use crate::{CompanyId, DateRange, FleetId, JourneyType, Vessel, VesselClass, VesselId, VoyageStatus};

/// Granularity of the bucketing engine's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum BucketLevel {
    Year,
    Month,
    Voyage,
    Trip,
}

#[derive(Debug, Clone)]
pub struct TripsQuery {
    pub vessel_id: Option<VesselId>,
    pub company_id: Option<CompanyId>,
    pub journey_type: Option<JourneyType>,
    pub range: Option<DateRange>,
    /// Allowed voyage statuses; an empty set means no status filtering.
    pub statuses: Vec<VoyageStatus>,
}

impl TripsQuery {
    pub fn for_vessel(vessel_id: VesselId, journey_type: JourneyType) -> Self {
        Self {
            vessel_id: Some(vessel_id),
            company_id: None,
            journey_type: Some(journey_type),
            range: None,
            statuses: Vec::new(),
        }
    }

    pub fn for_company(company_id: CompanyId, journey_type: JourneyType) -> Self {
        Self {
            vessel_id: None,
            company_id: Some(company_id),
            journey_type: Some(journey_type),
            range: None,
            statuses: Vec::new(),
        }
    }

    pub fn with_statuses(mut self, statuses: &[VoyageStatus]) -> Self {
        self.statuses = statuses.to_vec();
        self
    }

    pub fn with_range(mut self, range: DateRange) -> Self {
        self.range = Some(range);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMax<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd> MinMax<T> {
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Typed vessel selection for comparison reports, replacing free-form query
/// construction; empty id/class lists do not constrain the result.
#[derive(Debug, Clone, Default)]
pub struct VesselFilter {
    pub company_ids: Vec<CompanyId>,
    pub fleet_ids: Vec<FleetId>,
    pub vessel_ids: Vec<VesselId>,
    pub classes: Vec<VesselClass>,
    pub age: Option<MinMax<i32>>,
    pub dwt: Option<MinMax<f64>>,
    pub eedi: Option<MinMax<f64>>,
    pub gross_tonnage: Option<MinMax<f64>>,
}

impl VesselFilter {
    pub fn matches(&self, vessel: &Vessel, reference_year: i32) -> bool {
        if !self.company_ids.is_empty() && !self.company_ids.contains(&vessel.company_id) {
            return false;
        }
        if !self.fleet_ids.is_empty()
            && !vessel.fleet_id.is_some_and(|id| self.fleet_ids.contains(&id))
        {
            return false;
        }
        if !self.vessel_ids.is_empty() && !self.vessel_ids.contains(&vessel.id) {
            return false;
        }
        if !self.classes.is_empty() && !self.classes.contains(&vessel.class) {
            return false;
        }
        if let Some(age) = &self.age {
            if !age.contains(vessel.age(reference_year)) {
                return false;
            }
        }
        if let Some(dwt) = &self.dwt {
            if !dwt.contains(vessel.dwt) {
                return false;
            }
        }
        if let Some(eedi) = &self.eedi {
            if !vessel.eedi.is_some_and(|v| eedi.contains(v)) {
                return false;
            }
        }
        if let Some(gross_tonnage) = &self.gross_tonnage {
            if !vessel
                .gross_tonnage
                .is_some_and(|v| gross_tonnage.contains(v))
            {
                return false;
            }
        }
        true
    }
}
