use chrono::{DateTime, Utc};

/// Time source for components whose behavior depends on wall-clock time.
/// Injected so the voyage lifecycle transitions can be driven by a manual
/// clock in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
