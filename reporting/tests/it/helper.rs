use std::sync::Arc;

use chrono::{TimeZone, Utc};
use mrv_core::test_helper::TestStore;
use mrv_core::{DateRange, RegulatorySchedules};
use reporting::ReportingEngine;

pub struct TestHelper {
    pub store: Arc<TestStore>,
    pub engine: ReportingEngine,
}

pub fn helper() -> TestHelper {
    let store = Arc::new(TestStore::new());
    let engine = ReportingEngine::new(store.clone(), RegulatorySchedules::default());
    TestHelper { store, engine }
}

/// Inclusive day range, start at midnight and end at the last second of the
/// end day.
pub fn period(start: (i32, u32, u32), end: (i32, u32, u32)) -> DateRange {
    let start = Utc
        .with_ymd_and_hms(start.0, start.1, start.2, 0, 0, 0)
        .unwrap();
    let end = Utc
        .with_ymd_and_hms(end.0, end.1, end.2, 23, 59, 59)
        .unwrap();
    DateRange::new(start, end).unwrap()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
