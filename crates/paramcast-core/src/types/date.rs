use crate::types::EpochTime;
use chrono::{Days, NaiveDate};
use paramcast_primitives::ScalarKind;
use std::fmt::{self, Display};

const MILLIS_PER_DAY: i64 = 86_400_000;
const MICROS_PER_DAY: i64 = 86_400_000_000;

///
/// Date
/// (days since the epoch, UTC)
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Date(i32);

impl Date {
    pub const EPOCH: Self = Self(0);

    #[must_use]
    pub const fn from_days(days: i32) -> Self {
        Self(days)
    }

    #[must_use]
    pub const fn as_days(self) -> i32 {
        self.0
    }

    /// Calendar date, `None` outside chrono's supported range.
    #[must_use]
    pub fn to_naive(self) -> Option<NaiveDate> {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)?;
        let offset = Days::new(u64::from(self.0.unsigned_abs()));
        if self.0 >= 0 {
            epoch.checked_add_days(offset)
        } else {
            epoch.checked_sub_days(offset)
        }
    }
}

impl EpochTime for Date {
    const KIND: ScalarKind = ScalarKind::Date;

    fn from_epoch_millis(ms: i64) -> Option<Self> {
        i32::try_from(ms.div_euclid(MILLIS_PER_DAY)).ok().map(Self)
    }

    fn from_epoch_micros(us: i64) -> Option<Self> {
        i32::try_from(us.div_euclid(MICROS_PER_DAY)).ok().map(Self)
    }

    fn epoch_millis(self) -> i64 {
        i64::from(self.0) * MILLIS_PER_DAY
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_naive() {
            Some(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            None => write!(f, "{}d", self.0),
        }
    }
}

///
/// TESTS
///
