use mrv_core::test_helper::{TestTripBuilder, TestVesselBuilder};
use mrv_core::{
    ComplianceRecord, EuLegAllocation, FuelQuantities, FuelType, MinMax, VesselClass, VesselFilter,
    VesselId,
};

use crate::helper::{assert_close, helper, period};

#[tokio::test]
async fn test_comparison_report_folds_per_vessel_metrics_into_totals() {
    let helper = helper();
    let tanker = TestVesselBuilder::new(1, 1).build();
    let bulker = TestVesselBuilder::new(2, 1)
        .class(VesselClass::BulkCarrier)
        .build();
    helper.store.add_vessel(tanker.clone());
    helper.store.add_vessel(bulker.clone());

    helper.store.push_trip(
        TestTripBuilder::new(tanker.id, period((2025, 2, 1), (2025, 2, 20)))
            .fuel(FuelQuantities {
                mgo: 100.0,
                ..Default::default()
            })
            .distance(1000.0)
            .build(),
    );
    helper.store.push_trip(
        TestTripBuilder::new(bulker.id, period((2025, 4, 1), (2025, 4, 20)))
            .legs(vec![EuLegAllocation {
                fuel_type: FuelType::Hfo,
                inbound_eu: 0.0,
                outbound_eu: 0.0,
                within_eu: 10.0,
                eu_port: 0.0,
            }])
            .build(),
    );
    helper.store.add_compliance_record(ComplianceRecord {
        vessel_id: tanker.id,
        year: 2025,
        attained: 80.0,
        required: 100.0,
    });
    helper.store.add_compliance_record(ComplianceRecord {
        vessel_id: bulker.id,
        year: 2025,
        attained: 130.0,
        required: 100.0,
    });

    let report = helper
        .engine
        .comparison_report(&VesselFilter::default(), 2025, &[])
        .await
        .unwrap();

    assert_eq!(report.year, 2025);
    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].vessel_id, VesselId(1));
    assert_eq!(report.rows[1].vessel_id, VesselId(2));

    assert_close(report.total_emissions, 100.0 * 3.206);
    assert_close(report.total_eua_cost, 10.0 * 3.114 * 85.0);
    // 20 units of excess on the tanker, 30 missing on the bulker.
    assert_close(report.total_net_compliance_units, 20.0 - 30.0);
    assert_close(report.excess_compliance_units, 20.0);
    assert_eq!(report.excess_vessel_count, 1);
    assert_eq!(report.penalty_vessel_count, 1);
}

#[tokio::test]
async fn test_comparison_report_only_counts_trips_of_the_requested_year() {
    let helper = helper();
    let vessel = TestVesselBuilder::new(1, 1).build();
    helper.store.add_vessel(vessel.clone());

    helper.store.push_trip(
        TestTripBuilder::new(vessel.id, period((2024, 6, 1), (2024, 6, 20)))
            .fuel(FuelQuantities {
                mgo: 500.0,
                ..Default::default()
            })
            .build(),
    );
    helper.store.push_trip(
        TestTripBuilder::new(vessel.id, period((2025, 6, 1), (2025, 6, 20)))
            .fuel(FuelQuantities {
                mgo: 100.0,
                ..Default::default()
            })
            .build(),
    );

    let report = helper
        .engine
        .comparison_report(&VesselFilter::default(), 2025, &[])
        .await
        .unwrap();

    assert_close(report.total_emissions, 100.0 * 3.206);
}

#[tokio::test]
async fn test_comparison_report_filters_vessels() {
    let helper = helper();
    let tanker = TestVesselBuilder::new(1, 1).build_year(2010).build();
    let bulker = TestVesselBuilder::new(2, 1)
        .class(VesselClass::BulkCarrier)
        .build_year(2022)
        .build();
    let other_company = TestVesselBuilder::new(3, 2).build();
    helper.store.add_vessel(tanker);
    helper.store.add_vessel(bulker);
    helper.store.add_vessel(other_company);

    let by_class = VesselFilter {
        classes: vec![VesselClass::BulkCarrier],
        ..Default::default()
    };
    let report = helper.engine.comparison_report(&by_class, 2025, &[]).await.unwrap();
    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].vessel_id, VesselId(2));

    // Ages are relative to the report year: built 2010 -> 15, built 2022 -> 3.
    let by_age = VesselFilter {
        company_ids: vec![mrv_core::CompanyId(1)],
        age: Some(MinMax { min: 10, max: 20 }),
        ..Default::default()
    };
    let report = helper.engine.comparison_report(&by_age, 2025, &[]).await.unwrap();
    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].vessel_id, VesselId(1));
}

#[tokio::test]
async fn test_vessel_without_data_still_gets_a_row_with_empty_metrics() {
    let helper = helper();
    let vessel = TestVesselBuilder::new(1, 1).build();
    helper.store.add_vessel(vessel);

    let report = helper
        .engine
        .comparison_report(&VesselFilter::default(), 2025, &[])
        .await
        .unwrap();

    assert_eq!(report.rows.len(), 1);
    let row = &report.rows[0];
    assert!(row.cii.is_none());
    assert!(row.ets.is_none());
    assert!(row.ghg.is_none());
    assert_close(report.total_emissions, 0.0);
}
