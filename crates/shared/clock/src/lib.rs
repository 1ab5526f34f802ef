//! Meridian Clock Infrastructure
//!
//! Time sources behind the `Clock` port:
//!
//! - `SystemClock` reads the wall clock (production)
//! - `FixedClock` only moves when told to (deterministic tests)
//!
//! ## Usage
//!
//! ```ignore
//! use meridian_clock::{FixedClock, SystemClock};
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
//! clock.advance(Duration::minutes(5));
//! ```

mod fixed;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use meridian_ports::Clock;
