use chrono::{DateTime, Duration, SubsecRound, Utc};
use rand::Rng;

/// Random look-back applied to the current time to date an alert.
///
/// Each component is drawn independently from an inclusive range:
/// days `0..=30`, hours `0..=24`, minutes `0..=60`, seconds `0..=60`.
/// The sub-day components are allowed to reach their full modulus, so the
/// largest offset is 31 days, 1 hour, 1 minute and 0 seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOffset {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeOffset {
    pub const MAX: TimeOffset = TimeOffset {
        days: 30,
        hours: 24,
        minutes: 60,
        seconds: 60,
    };

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            days: rng.gen_range(0..=Self::MAX.days),
            hours: rng.gen_range(0..=Self::MAX.hours),
            minutes: rng.gen_range(0..=Self::MAX.minutes),
            seconds: rng.gen_range(0..=Self::MAX.seconds),
        }
    }

    pub fn to_duration(self) -> Duration {
        Duration::days(self.days)
            + Duration::hours(self.hours)
            + Duration::minutes(self.minutes)
            + Duration::seconds(self.seconds)
    }

    /// `now` minus this offset, truncated to whole seconds.
    pub fn before(self, now: DateTime<Utc>) -> DateTime<Utc> {
        (now - self.to_duration()).trunc_subsecs(0)
    }
}
