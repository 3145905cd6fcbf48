use chrono::{TimeZone, Utc};
use mrv_core::{
    BucketLevel, CiiMetrics, DateRange, EtsMetrics, GhgMetrics, Vessel, VesselClass, VesselFilter,
    VesselId, VoyageStatus,
};
use serde::Serialize;
use tokio::task::JoinSet;
use tracing::error;

use crate::{BucketKey, ReportingEngine, Result};

/// One vessel's year-level entry in a comparison report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VesselReportRow {
    pub vessel_id: VesselId,
    pub name: String,
    pub class: VesselClass,
    pub cii: Option<CiiMetrics>,
    pub ets: Option<EtsMetrics>,
    pub ghg: Option<GhgMetrics>,
}

/// Cross-vessel rollup for fleet-vs-fleet and company-vs-company views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub year: i32,
    pub rows: Vec<VesselReportRow>,
    pub total_emissions: f64,
    pub total_eua_cost: f64,
    pub total_net_compliance_units: f64,
    pub excess_compliance_units: f64,
    pub excess_vessel_count: usize,
    pub penalty_vessel_count: usize,
}

impl ReportingEngine {
    /// Runs the three calculators for every vessel matching the filter and
    /// folds the set-wide totals. Vessels are computed in parallel; a vessel
    /// whose metrics fail is logged and left out rather than failing the
    /// whole report.
    pub async fn comparison_report(
        &self,
        filter: &VesselFilter,
        year: i32,
        statuses: &[VoyageStatus],
    ) -> Result<ComparisonReport> {
        let vessels: Vec<Vessel> = self
            .adapter
            .vessels()
            .await?
            .into_iter()
            .filter(|v| filter.matches(v, year))
            .collect();

        let mut set = JoinSet::new();
        for vessel in vessels {
            let engine = self.clone();
            let statuses = statuses.to_vec();
            set.spawn(async move { engine.vessel_year_row(vessel, year, &statuses).await });
        }

        let mut rows = Vec::new();
        while let Some(joined) = set.join_next().await {
            match joined? {
                Ok(row) => rows.push(row),
                Err(e) => {
                    error!("failed to compute comparison row: {e:?}");
                }
            }
        }
        rows.sort_by_key(|r| r.vessel_id);

        let mut report = ComparisonReport {
            year,
            rows: Vec::new(),
            total_emissions: 0.0,
            total_eua_cost: 0.0,
            total_net_compliance_units: 0.0,
            excess_compliance_units: 0.0,
            excess_vessel_count: 0,
            penalty_vessel_count: 0,
        };
        for row in &rows {
            if let Some(cii) = &row.cii {
                report.total_emissions += cii.emissions;
            }
            if let Some(ets) = &row.ets {
                report.total_eua_cost += ets.eua_cost;
            }
            if let Some(ghg) = &row.ghg {
                report.total_net_compliance_units += ghg.net_compliance_units;
                report.excess_compliance_units += ghg.excess;
                if ghg.excess > 0.0 {
                    report.excess_vessel_count += 1;
                }
                if ghg.has_penalty {
                    report.penalty_vessel_count += 1;
                }
            }
        }
        report.rows = rows;

        Ok(report)
    }

    async fn vessel_year_row(
        &self,
        vessel: Vessel,
        year: i32,
        statuses: &[VoyageStatus],
    ) -> Result<VesselReportRow> {
        let range = year_range(year);
        let key = BucketKey::Year(year);

        let cii = self
            .cii_buckets(&vessel, BucketLevel::Year, statuses, Some(range))
            .await?
            .into_iter()
            .find(|b| b.key == key)
            .map(|b| b.metrics);
        let ets = self
            .ets_buckets(&vessel, BucketLevel::Year, statuses, Some(range))
            .await?
            .into_iter()
            .find(|b| b.key == key)
            .map(|b| b.metrics);
        let ghg = self.ghg_metrics(vessel.id, year).await?;

        Ok(VesselReportRow {
            vessel_id: vessel.id,
            name: vessel.name,
            class: vessel.class,
            cii,
            ets,
            ghg,
        })
    }
}

fn year_range(year: i32) -> DateRange {
    let start = Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(year, 12, 31, 23, 59, 59).unwrap();
    // Both timestamps are valid for any year, the ordering check cannot fail.
    DateRange::new(start, end).unwrap()
}
