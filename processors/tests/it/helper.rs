use std::sync::Arc;

use chrono::{TimeZone, Utc};
use mrv_core::test_helper::{ManualClock, TestStore};
use mrv_core::DateRange;
use processors::{TripIngest, VoyageLifecycle};

pub struct TestHelper {
    pub store: Arc<TestStore>,
    pub clock: Arc<ManualClock>,
    pub ingest: TripIngest,
    pub lifecycle: VoyageLifecycle,
}

pub fn helper() -> TestHelper {
    let store = Arc::new(TestStore::new());
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap(),
    ));
    TestHelper {
        ingest: TripIngest::new(store.clone()),
        lifecycle: VoyageLifecycle::new(store.clone(), clock.clone()),
        store,
        clock,
    }
}

pub fn period(start: (i32, u32, u32), end: (i32, u32, u32)) -> DateRange {
    let start = Utc
        .with_ymd_and_hms(start.0, start.1, start.2, 0, 0, 0)
        .unwrap();
    let end = Utc
        .with_ymd_and_hms(end.0, end.1, end.2, 23, 59, 59)
        .unwrap();
    DateRange::new(start, end).unwrap()
}
