use chrono::{DateTime, Utc};

/// Wall-clock port. Time-based behavior (cache TTL expiry) reads the clock
/// through this trait so tests can substitute a deterministic source.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
