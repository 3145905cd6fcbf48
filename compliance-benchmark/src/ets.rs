use mrv_core::{EmissionFactors, EtsMetrics, EtsSchedule, EuLegAllocation, RegulatorySchedules};

/// Computes EU-regulated CO2 and allowance cost from the per-leg fuel
/// allocations of ETS journeys. Only half of the extra-EU (inbound/outbound)
/// emissions fall under the trading system; intra-EU and at-berth emissions
/// count in full.
pub struct EtsCalculator<'a> {
    schedule: &'a EtsSchedule,
    factors: &'a EmissionFactors,
}

impl<'a> EtsCalculator<'a> {
    pub fn new(schedules: &'a RegulatorySchedules) -> Self {
        Self {
            schedule: &schedules.ets,
            factors: &schedules.emission_factors,
        }
    }

    pub fn compute(
        &self,
        legs: &[EuLegAllocation],
        freight_profit: f64,
        bunker_cost: f64,
        year: i32,
    ) -> EtsMetrics {
        let mut co2_inbound_eu = 0.0;
        let mut co2_outbound_eu = 0.0;
        let mut co2_within_eu = 0.0;
        let mut co2_eu_port = 0.0;
        let mut fuel_consumption = 0.0;

        for leg in legs {
            let factor = self.factors.factor(leg.fuel_type);
            co2_inbound_eu += leg.inbound_eu * factor;
            co2_outbound_eu += leg.outbound_eu * factor;
            co2_within_eu += leg.within_eu * factor;
            co2_eu_port += leg.eu_port * factor;
            fuel_consumption += leg.inbound_eu + leg.outbound_eu + leg.within_eu + leg.eu_port;
        }

        let total_co2 = co2_inbound_eu + co2_outbound_eu + co2_within_eu + co2_eu_port;
        let regulated_co2 = 0.5 * (co2_inbound_eu + co2_outbound_eu) + co2_within_eu + co2_eu_port;
        let eua_cost =
            self.schedule.phase_in_fraction(year) * self.schedule.carbon_price * regulated_co2;

        EtsMetrics {
            co2_inbound_eu,
            co2_outbound_eu,
            co2_within_eu,
            co2_eu_port,
            fuel_consumption,
            total_co2,
            regulated_co2,
            eua_cost,
            fp_percent: (freight_profit != 0.0).then(|| eua_cost / freight_profit * 100.0),
            bc_percent: (bunker_cost != 0.0).then(|| eua_cost / bunker_cost * 100.0),
        }
    }
}
