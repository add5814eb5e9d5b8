//! The fallback chain shared by the four temporal destinations.
//!
//! Temporal input crosses over through epoch milliseconds. Integers and
//! integer text are epoch milliseconds. Anything else must be calendar
//! text, read as UTC and kept at microsecond precision until the
//! destination floors it.

use crate::{
    coerce::null::is_csv_null,
    error::CoercionReason,
    types::{Date, DateTime, EpochTime, Instant, Timestamp},
    value::Value,
};
use chrono::{DateTime as ChronoDateTime, NaiveDate, NaiveDateTime};
use paramcast_primitives::ScalarKind;

pub(super) fn bridge(input: &Value, target: ScalarKind) -> Result<Value, CoercionReason> {
    let millis = match input {
        Value::Timestamp(v) => v.epoch_millis(),
        Value::DateTime(v) => v.epoch_millis(),
        Value::Date(v) => v.epoch_millis(),
        Value::Instant(v) => v.epoch_millis(),
        _ => return Err(CoercionReason::UnsupportedPair),
    };

    from_millis(target, millis)
}

pub(super) fn epoch_integer(input: &Value, target: ScalarKind) -> Result<Value, CoercionReason> {
    let millis = input.as_i64().ok_or(CoercionReason::UnsupportedPair)?;

    from_millis(target, millis)
}

/// Bare epoch-millisecond text first; calendar text only if that fails.
pub(super) fn parse<'a>(
    input: &Value,
    target: ScalarKind,
    calendar_formats: impl Iterator<Item = &'a str>,
) -> Result<Value, CoercionReason> {
    let text = input.as_text().ok_or(CoercionReason::UnsupportedPair)?;
    if is_csv_null(text) {
        return Ok(Value::Null);
    }

    let text = text.trim();
    if let Ok(millis) = text.parse::<i64>() {
        return from_millis(target, millis);
    }

    let micros = calendar_micros(text, calendar_formats).ok_or(CoercionReason::FormatParse)?;

    from_micros(target, micros)
}

fn calendar_micros<'a>(text: &str, mut formats: impl Iterator<Item = &'a str>) -> Option<i64> {
    if let Ok(dt) = ChronoDateTime::parse_from_rfc3339(text) {
        return Some(dt.timestamp_micros());
    }

    formats.find_map(|format| {
        NaiveDateTime::parse_from_str(text, format)
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(text, format)
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
            .map(|naive| naive.and_utc().timestamp_micros())
    })
}

fn from_millis(target: ScalarKind, millis: i64) -> Result<Value, CoercionReason> {
    match target {
        ScalarKind::Timestamp => build(Timestamp::from_epoch_millis(millis)),
        ScalarKind::DateTime => build(DateTime::from_epoch_millis(millis)),
        ScalarKind::Date => build(Date::from_epoch_millis(millis)),
        ScalarKind::Instant => build(Instant::from_epoch_millis(millis)),
        _ => Err(CoercionReason::UnsupportedPair),
    }
}

fn from_micros(target: ScalarKind, micros: i64) -> Result<Value, CoercionReason> {
    match target {
        ScalarKind::Timestamp => build(Timestamp::from_epoch_micros(micros)),
        ScalarKind::DateTime => build(DateTime::from_epoch_micros(micros)),
        ScalarKind::Date => build(Date::from_epoch_micros(micros)),
        ScalarKind::Instant => build(Instant::from_epoch_micros(micros)),
        _ => Err(CoercionReason::UnsupportedPair),
    }
}

fn build<T: EpochTime>(value: Option<T>) -> Result<Value, CoercionReason> {
    value.map(Into::into).ok_or(CoercionReason::RangeOverflow)
}
