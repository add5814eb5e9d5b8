use crate::value::Value;
use chrono::{DateTime as ChronoDateTime, SecondsFormat, Utc};
use paramcast_primitives::ScalarKind;
use std::fmt::{self, Display};

const MICROS_PER_MILLI: i64 = 1_000;

///
/// EpochTime
///
/// Shared surface of the temporal representations. Every kind converts
/// losslessly to and from epoch milliseconds within its own precision;
/// the bridge between two temporal values always goes through
/// milliseconds.
///

pub trait EpochTime: Copy + Display + Into<Value> {
    const KIND: ScalarKind;

    /// Build from epoch milliseconds, `None` if out of range.
    fn from_epoch_millis(ms: i64) -> Option<Self>;

    /// Build from epoch microseconds, flooring to the kind's precision.
    fn from_epoch_micros(us: i64) -> Option<Self>;

    /// Epoch milliseconds, floored.
    fn epoch_millis(self) -> i64;
}

///
/// Timestamp
/// (epoch microseconds)
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const EPOCH: Self = Self(0);

    #[must_use]
    pub const fn from_micros(us: i64) -> Self {
        Self(us)
    }

    #[must_use]
    pub const fn as_micros(self) -> i64 {
        self.0
    }
}

impl EpochTime for Timestamp {
    const KIND: ScalarKind = ScalarKind::Timestamp;

    fn from_epoch_millis(ms: i64) -> Option<Self> {
        ms.checked_mul(MICROS_PER_MILLI).map(Self)
    }

    fn from_epoch_micros(us: i64) -> Option<Self> {
        Some(Self(us))
    }

    fn epoch_millis(self) -> i64 {
        self.0.div_euclid(MICROS_PER_MILLI)
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match ChronoDateTime::<Utc>::from_timestamp_micros(self.0) {
            Some(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S%.6f")),
            None => write!(f, "{}us", self.0),
        }
    }
}

///
/// DateTime
/// (epoch milliseconds, rendered as a calendar date-time)
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct DateTime(i64);

impl DateTime {
    #[must_use]
    pub const fn from_millis(ms: i64) -> Self {
        Self(ms)
    }

    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.0
    }
}

impl EpochTime for DateTime {
    const KIND: ScalarKind = ScalarKind::DateTime;

    fn from_epoch_millis(ms: i64) -> Option<Self> {
        Some(Self(ms))
    }

    fn from_epoch_micros(us: i64) -> Option<Self> {
        Some(Self(us.div_euclid(MICROS_PER_MILLI)))
    }

    fn epoch_millis(self) -> i64 {
        self.0
    }
}

impl Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match ChronoDateTime::<Utc>::from_timestamp_millis(self.0) {
            Some(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S%.3f")),
            None => write!(f, "{}ms", self.0),
        }
    }
}

///
/// Instant
/// (epoch milliseconds, a bare point in time)
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Instant(i64);

impl Instant {
    #[must_use]
    pub const fn from_millis(ms: i64) -> Self {
        Self(ms)
    }

    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.0
    }
}

impl EpochTime for Instant {
    const KIND: ScalarKind = ScalarKind::Instant;

    fn from_epoch_millis(ms: i64) -> Option<Self> {
        Some(Self(ms))
    }

    fn from_epoch_micros(us: i64) -> Option<Self> {
        Some(Self(us.div_euclid(MICROS_PER_MILLI)))
    }

    fn epoch_millis(self) -> i64 {
        self.0
    }
}

impl Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match ChronoDateTime::<Utc>::from_timestamp_millis(self.0) {
            Some(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => write!(f, "{}ms", self.0),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_bridge_is_lossless_for_millis() {
        for ms in [0, 1, -1, 1_420_000_000_000, -86_400_001] {
            let ts = Timestamp::from_epoch_millis(ms).expect("in range");
            assert_eq!(ts.epoch_millis(), ms, "bridge mismatch for {ms}");
        }
    }

    #[test]
    fn timestamp_millis_overflow_is_none() {
        assert_eq!(Timestamp::from_epoch_millis(i64::MAX / 999), None);
    }

    #[test]
    fn micros_floor_toward_negative_infinity() {
        let dt = DateTime::from_epoch_micros(-1).expect("in range");
        assert_eq!(dt.as_millis(), -1);

        let instant = Instant::from_epoch_micros(1_999).expect("in range");
        assert_eq!(instant.as_millis(), 1);
    }

    #[test]
    fn display_renders_calendar_text() {
        assert_eq!(
            Timestamp::from_micros(1_420_000_000_000_123).to_string(),
            "2014-12-31 04:26:40.000123"
        );
        assert_eq!(
            DateTime::from_millis(1_420_000_000_000).to_string(),
            "2014-12-31 04:26:40.000"
        );
        assert_eq!(
            Instant::from_millis(0).to_string(),
            "1970-01-01T00:00:00.000Z"
        );
    }
}
