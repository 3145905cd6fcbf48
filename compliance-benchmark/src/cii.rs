use mrv_core::{
    CiiBoundaries, CiiCategory, CiiMetrics, CiiSchedule, EmissionFactors, FuelQuantities,
    RegulatorySchedules, VesselClass,
};

/// Computes the Carbon Intensity Indicator in `grams CO2 / (dwt * nautical
/// mile)` together with the year's required value and the letter rating.
pub struct CiiCalculator<'a> {
    schedule: &'a CiiSchedule,
    factors: &'a EmissionFactors,
}

impl<'a> CiiCalculator<'a> {
    pub fn new(schedules: &'a RegulatorySchedules) -> Self {
        Self {
            schedule: &schedules.cii,
            factors: &schedules.emission_factors,
        }
    }

    /// The required CII for a vessel in a given year, `None` when the class
    /// has no baseline constants or the year predates the reduction
    /// schedule.
    pub fn required(&self, class: VesselClass, dwt: f64, year: i32) -> Option<f64> {
        let constants = self.schedule.class_constants(class)?;
        let reduction = self.schedule.reduction_factor(year)?;
        let dwt_capped = apply_cap(dwt, constants.dwt_cap);
        Some(dwt_capped.powf(constants.exponent) * constants.factor * reduction)
    }

    pub fn compute(
        &self,
        class: VesselClass,
        dwt: f64,
        fuel: &FuelQuantities,
        distance: f64,
        year: i32,
    ) -> CiiMetrics {
        let emissions = fuel.emissions(self.factors);
        let constants = self.schedule.class_constants(class);
        let dwt_capped = apply_cap(dwt, constants.and_then(|c| c.dwt_cap));

        let required = self.required(class, dwt, year);
        let cii = (dwt_capped * distance != 0.0).then(|| emissions / (dwt_capped * distance) * 1e6);
        let cii_rate = match (cii, required) {
            (Some(cii), Some(required)) if required != 0.0 => Some(cii / required),
            _ => None,
        };
        let category = match (cii_rate, constants) {
            (Some(rate), Some(constants)) => Some(categorize(rate, &constants.boundaries)),
            _ => None,
        };
        let boundaries = match (required, constants) {
            (Some(required), Some(constants)) => Some(constants.boundaries.scale(required)),
            _ => None,
        };

        CiiMetrics {
            emissions,
            distance,
            required,
            cii,
            cii_rate,
            category,
            boundaries,
        }
    }
}

fn apply_cap(dwt: f64, cap: Option<f64>) -> f64 {
    cap.map_or(dwt, |cap| dwt.min(cap))
}

/// Boundaries are closed on the lower category; the rate is rounded to three
/// decimals before the comparison.
fn categorize(cii_rate: f64, boundaries: &CiiBoundaries) -> CiiCategory {
    let rate = (cii_rate * 1000.0).round() / 1000.0;
    if rate <= boundaries.a {
        CiiCategory::A
    } else if rate <= boundaries.b {
        CiiCategory::B
    } else if rate <= boundaries.c {
        CiiCategory::C
    } else if rate <= boundaries.d {
        CiiCategory::D
    } else {
        CiiCategory::E
    }
}
