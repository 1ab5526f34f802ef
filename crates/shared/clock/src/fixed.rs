use chrono::Duration;
use meridian_core::Timestamp;
use meridian_ports::Clock;
use std::sync::RwLock;

/// Clock frozen at a chosen instant
///
/// Time only moves through `set` and `advance`, so anything stamped with it
/// is reproducible across runs.
pub struct FixedClock {
    current_time: RwLock<Timestamp>,
}

impl FixedClock {
    pub fn new(time: Timestamp) -> Self {
        Self {
            current_time: RwLock::new(time),
        }
    }

    /// Jump to an absolute time
    pub fn set(&self, time: Timestamp) {
        let mut guard = self
            .current_time
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = time;
    }

    /// Move forward by `duration`
    pub fn advance(&self, duration: Duration) {
        let mut guard = self
            .current_time
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard += duration;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self
            .current_time
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn name(&self) -> &str {
        "FixedClock"
    }
}
