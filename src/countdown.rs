//! Launch countdown

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CountdownParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl CountdownParts {
    pub fn from_seconds(total: u64) -> Self {
        Self {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
        }
    }

    pub fn is_finished(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    target: DateTime<Utc>,
}

impl Countdown {
    pub fn new(target: DateTime<Utc>) -> Self {
        Self { target }
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    /// Time left until the target, clamped at zero
    pub fn remaining(&self, now: DateTime<Utc>) -> CountdownParts {
        let seconds = (self.target - now).num_seconds().max(0);
        CountdownParts::from_seconds(seconds as u64)
    }

    pub fn is_finished(&self, now: DateTime<Utc>) -> bool {
        self.remaining(now).is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_remaining_breakdown() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let target = now + Duration::days(3) + Duration::hours(4) + Duration::minutes(5) + Duration::seconds(6);

        let parts = Countdown::new(target).remaining(now);
        assert_eq!(
            parts,
            CountdownParts {
                days: 3,
                hours: 4,
                minutes: 5,
                seconds: 6
            }
        );
        assert!(!parts.is_finished());
    }

    #[test]
    fn test_past_target_clamps_to_zero() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
        let countdown = Countdown::new(now - Duration::hours(1));

        assert_eq!(countdown.remaining(now), CountdownParts::default());
        assert!(countdown.is_finished(now));
    }

    #[test]
    fn test_sub_second_remainder_is_truncated() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
        let countdown = Countdown::new(now + Duration::milliseconds(900));
        assert!(countdown.is_finished(now));
    }
}
