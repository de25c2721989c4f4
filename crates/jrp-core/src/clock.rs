//! Wall-clock abstraction so stores can be driven with a pinned time.

use chrono::{DateTime, SubsecRound as _, Utc};

pub trait Clock {
  /// The current instant, truncated to whole seconds.
  fn now(&self) -> DateTime<Utc>;
}

/// The system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> DateTime<Utc> { Utc::now().trunc_subsecs(0) }
}

/// A clock that always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
  fn now(&self) -> DateTime<Utc> { self.0.trunc_subsecs(0) }
}

#[cfg(test)]
mod tests {
  use chrono::{TimeZone as _, Timelike as _};

  use super::*;

  #[test]
  fn system_clock_has_no_subseconds() {
    assert_eq!(SystemClock.now().nanosecond(), 0);
  }

  #[test]
  fn fixed_clock_is_fixed() {
    let at = Utc.with_ymd_and_hms(9999, 12, 31, 0, 0, 0).unwrap();
    let clock = FixedClock(at);
    assert_eq!(clock.now(), at);
    assert_eq!(clock.now(), clock.now());
  }
}
