use mrv_core::test_helper::{TestTripBuilder, TestVesselBuilder};
use mrv_core::{
    BucketLevel, EuLegAllocation, FuelQuantities, FuelType, VoyageStatus,
};
use reporting::BucketKey;

use crate::helper::{assert_close, helper, period};

fn mgo(tonnes: f64) -> FuelQuantities {
    FuelQuantities {
        mgo: tonnes,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_trip_buckets_sum_to_the_voyage_and_year_buckets() {
    let helper = helper();
    let vessel = TestVesselBuilder::new(1, 1).build();
    helper.store.add_vessel(vessel.clone());

    helper.store.push_trip(
        TestTripBuilder::new(vessel.id, period((2024, 1, 5), (2024, 1, 20)))
            .voyage("V1")
            .fuel(mgo(100.0))
            .distance(1000.0)
            .build(),
    );
    helper.store.push_trip(
        TestTripBuilder::new(vessel.id, period((2024, 2, 1), (2024, 2, 14)))
            .voyage("V1")
            .fuel(FuelQuantities {
                hfo: 50.0,
                ..Default::default()
            })
            .distance(500.0)
            .build(),
    );

    let trips = helper
        .engine
        .cii_buckets(&vessel, BucketLevel::Trip, &[], None)
        .await
        .unwrap();
    assert_eq!(trips.len(), 2);
    let trip_sum: f64 = trips.iter().map(|b| b.metrics.emissions).sum();
    assert_close(trip_sum, 100.0 * 3.206 + 50.0 * 3.114);

    let voyages = helper
        .engine
        .cii_buckets(&vessel, BucketLevel::Voyage, &[], None)
        .await
        .unwrap();
    assert_eq!(voyages.len(), 1);
    assert_close(voyages[0].metrics.emissions, trip_sum);
    assert_close(voyages[0].metrics.distance, 1500.0);

    let years = helper
        .engine
        .cii_buckets(&vessel, BucketLevel::Year, &[], None)
        .await
        .unwrap();
    assert_eq!(years.len(), 1);
    assert_eq!(years[0].key, BucketKey::Year(2024));
    assert_close(years[0].metrics.emissions, trip_sum);
}

#[tokio::test]
async fn test_aggregate_trip_replaces_the_itemized_trips_it_covers() {
    let helper = helper();
    let vessel = TestVesselBuilder::new(1, 1).build();
    helper.store.add_vessel(vessel.clone());

    helper.store.push_trip(
        TestTripBuilder::new(vessel.id, period((2024, 1, 1), (2024, 12, 31)))
            .aggregate()
            .fuel(mgo(200.0))
            .build(),
    );
    // Covered by the aggregate, must not count twice.
    helper.store.push_trip(
        TestTripBuilder::new(vessel.id, period((2024, 3, 1), (2024, 3, 10)))
            .fuel(mgo(100.0))
            .build(),
    );
    // Outside the aggregate's period, still counts.
    helper.store.push_trip(
        TestTripBuilder::new(vessel.id, period((2025, 2, 1), (2025, 2, 10)))
            .fuel(mgo(50.0))
            .build(),
    );

    let years = helper
        .engine
        .cii_buckets(&vessel, BucketLevel::Year, &[], None)
        .await
        .unwrap();
    assert_eq!(years.len(), 2);
    assert_eq!(years[0].key, BucketKey::Year(2024));
    assert_close(years[0].metrics.emissions, 200.0 * 3.206);
    assert_eq!(years[1].key, BucketKey::Year(2025));
    assert_close(years[1].metrics.emissions, 50.0 * 3.206);
}

#[tokio::test]
async fn test_aggregate_of_another_company_does_not_suppress() {
    let helper = helper();
    let vessel = TestVesselBuilder::new(1, 1).build();
    let other = TestVesselBuilder::new(2, 2).build();
    helper.store.add_vessel(vessel.clone());
    helper.store.add_vessel(other.clone());

    helper.store.push_trip(
        TestTripBuilder::new(other.id, period((2024, 1, 1), (2024, 12, 31)))
            .aggregate()
            .fuel(mgo(500.0))
            .build(),
    );
    helper.store.push_trip(
        TestTripBuilder::new(vessel.id, period((2024, 3, 1), (2024, 3, 10)))
            .fuel(mgo(100.0))
            .build(),
    );

    let years = helper
        .engine
        .cii_buckets(&vessel, BucketLevel::Year, &[], None)
        .await
        .unwrap();
    assert_eq!(years.len(), 1);
    assert_close(years[0].metrics.emissions, 100.0 * 3.206);
}

#[tokio::test]
async fn test_status_filter_limits_bucketed_trips() {
    let helper = helper();
    let vessel = TestVesselBuilder::new(1, 1).build();
    helper.store.add_vessel(vessel.clone());

    helper.store.push_trip(
        TestTripBuilder::new(vessel.id, period((2024, 1, 1), (2024, 1, 10)))
            .fuel(mgo(100.0))
            .build(),
    );
    let archived = helper.store.push_trip(
        TestTripBuilder::new(vessel.id, period((2024, 2, 1), (2024, 2, 10)))
            .fuel(mgo(40.0))
            .build(),
    );
    helper.store.set_status(archived.id, VoyageStatus::Archived);

    let all = helper
        .engine
        .cii_buckets(&vessel, BucketLevel::Year, &[], None)
        .await
        .unwrap();
    assert_close(all[0].metrics.emissions, 140.0 * 3.206);

    let actual_only = helper
        .engine
        .cii_buckets(&vessel, BucketLevel::Year, &[VoyageStatus::Actual], None)
        .await
        .unwrap();
    assert_close(actual_only[0].metrics.emissions, 100.0 * 3.206);
}

#[tokio::test]
async fn test_year_split_voyage_lands_in_one_bucket_under_the_final_year() {
    let helper = helper();
    let vessel = TestVesselBuilder::new(1, 1).build();
    helper.store.add_vessel(vessel.clone());

    helper.store.push_trip(
        TestTripBuilder::new(vessel.id, period((2024, 12, 1), (2024, 12, 31)))
            .voyage("V9")
            .fuel(mgo(60.0))
            .distance(600.0)
            .build(),
    );
    helper.store.push_trip(
        TestTripBuilder::new(vessel.id, period((2025, 1, 1), (2025, 1, 15)))
            .voyage("V9")
            .fuel(mgo(30.0))
            .distance(300.0)
            .build(),
    );

    let voyages = helper
        .engine
        .cii_buckets(&vessel, BucketLevel::Voyage, &[], None)
        .await
        .unwrap();
    assert_eq!(voyages.len(), 1);
    assert_eq!(voyages[0].year, 2025);
    assert_close(voyages[0].metrics.emissions, 90.0 * 3.206);

    // The required CII of the combined voyage uses the final year's
    // reduction factor.
    let expected_required = 5247.0 * 50_000.0_f64.powf(-0.61) * 0.91;
    assert_close(voyages[0].metrics.required.unwrap(), expected_required);
}

#[tokio::test]
async fn test_month_buckets_key_on_the_trip_end_date() {
    let helper = helper();
    let vessel = TestVesselBuilder::new(1, 1).build();
    helper.store.add_vessel(vessel.clone());

    helper.store.push_trip(
        TestTripBuilder::new(vessel.id, period((2024, 3, 28), (2024, 4, 2)))
            .fuel(mgo(10.0))
            .build(),
    );

    let months = helper
        .engine
        .cii_buckets(&vessel, BucketLevel::Month, &[], None)
        .await
        .unwrap();
    assert_eq!(months.len(), 1);
    assert_eq!(
        months[0].key,
        BucketKey::Month {
            year: 2024,
            month: 4
        }
    );
}

#[tokio::test]
async fn test_ets_year_bucket_sums_legs_and_prices_allowances() {
    let helper = helper();
    let vessel = TestVesselBuilder::new(1, 1).build();
    helper.store.add_vessel(vessel.clone());

    helper.store.push_trip(
        TestTripBuilder::new(vessel.id, period((2025, 3, 1), (2025, 3, 20)))
            .legs(vec![EuLegAllocation {
                fuel_type: FuelType::Mgo,
                inbound_eu: 10.0,
                outbound_eu: 6.0,
                within_eu: 4.0,
                eu_port: 2.0,
            }])
            .freight_profit(10_000.0)
            .build(),
    );
    helper.store.push_trip(
        TestTripBuilder::new(vessel.id, period((2025, 5, 1), (2025, 5, 20)))
            .legs(vec![EuLegAllocation {
                fuel_type: FuelType::Hfo,
                inbound_eu: 0.0,
                outbound_eu: 0.0,
                within_eu: 8.0,
                eu_port: 0.0,
            }])
            .build(),
    );

    let years = helper
        .engine
        .ets_buckets(&vessel, BucketLevel::Year, &[], None)
        .await
        .unwrap();
    assert_eq!(years.len(), 1);

    let metrics = &years[0].metrics;
    let regulated = 0.5 * (10.0 + 6.0) * 3.206 + (4.0 + 2.0) * 3.206 + 8.0 * 3.114;
    assert_close(metrics.regulated_co2, regulated);
    assert_close(metrics.eua_cost, 85.0 * regulated);
    assert_close(metrics.fuel_consumption, 30.0);
    // Freight profit aggregates across the bucket's trips.
    assert_close(
        metrics.fp_percent.unwrap(),
        metrics.eua_cost / 10_000.0 * 100.0,
    );
}

#[tokio::test]
async fn test_cii_trips_are_invisible_to_ets_buckets() {
    let helper = helper();
    let vessel = TestVesselBuilder::new(1, 1).build();
    helper.store.add_vessel(vessel.clone());

    helper.store.push_trip(
        TestTripBuilder::new(vessel.id, period((2025, 3, 1), (2025, 3, 20)))
            .fuel(mgo(100.0))
            .build(),
    );

    let buckets = helper
        .engine
        .ets_buckets(&vessel, BucketLevel::Year, &[], None)
        .await
        .unwrap();
    assert!(buckets.is_empty());
}
