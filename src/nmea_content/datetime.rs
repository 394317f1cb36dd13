//! Conversion between timestamps and the NMEA `hhmmss[.sss]` time and `ddmmyy` date fields.
//!
//! All fields are UTC. Two-digit years always map to 2000–2099.

use nom::Parser;
use time::{Date, Month, OffsetDateTime, Time, UtcOffset};

use crate::{Clock, IResult, NmeaParse, parse::with_take};

/// Encodes the UTC time of day as `hhmmss`, or `hhmmss.sss` with `include_ms`.
pub fn encode_time(timestamp: OffsetDateTime, include_ms: bool) -> String {
    let (hour, minute, second, millisecond) = timestamp.to_offset(UtcOffset::UTC).to_hms_milli();

    if include_ms {
        format!("{hour:02}{minute:02}{second:02}.{millisecond:03}")
    } else {
        format!("{hour:02}{minute:02}{second:02}")
    }
}

/// Encodes the UTC date as `ddmmyy`.
pub fn encode_date(timestamp: OffsetDateTime) -> String {
    let utc = timestamp.to_offset(UtcOffset::UTC);

    format!(
        "{:02}{:02}{:02}",
        utc.day(),
        u8::from(utc.month()),
        utc.year().rem_euclid(100)
    )
}

/// Decodes an `hhmmss[.sss]` field.
///
/// The fraction of a second is kept to the millisecond. Returns `None` when the field is
/// empty, malformed, or not a valid time of day.
///
/// ```rust
/// use nmea0183_codec::nmea_content::datetime::decode_time;
/// use time::Time;
///
/// assert_eq!(decode_time("123519"), Time::from_hms(12, 35, 19).ok());
/// assert_eq!(decode_time("001043.25"), Time::from_hms_milli(0, 10, 43, 250).ok());
/// assert_eq!(decode_time(""), None);
/// assert_eq!(decode_time("256000"), None);
/// ```
pub fn decode_time(raw: &str) -> Option<Time> {
    let result: IResult<_, (u8, u8, f64)> =
        (with_take(2u8), with_take(2u8), f64::parse).parse(raw);
    let (_, (hour, minute, seconds)) = result.ok()?;

    if !(0.0..60.0).contains(&seconds) {
        return None;
    }

    let whole = seconds.trunc();
    let millisecond = (((seconds - whole) * 1000.0).round() as u16).min(999);

    Time::from_hms_milli(hour, minute, whole as u8, millisecond).ok()
}

/// Decodes a GGA time field onto the clock's current UTC date.
///
/// GGA sentences carry no date, so the date part of the result is only as good as the
/// assumption that the sentence was produced today. Decoding the same sentence on both
/// sides of UTC midnight yields two different dates.
pub fn decode_time_today<C>(raw: &str, clock: &C) -> Option<OffsetDateTime>
where
    C: Clock + ?Sized,
{
    let time = decode_time(raw)?;

    Some(clock.now().to_offset(UtcOffset::UTC).replace_time(time))
}

/// Decodes a `ddmmyy` field, reading the year as `2000 + yy`.
///
/// ```rust
/// use nmea0183_codec::nmea_content::datetime::decode_date;
/// use time::{Date, Month};
///
/// assert_eq!(decode_date("230394"), Date::from_calendar_date(2094, Month::March, 23).ok());
/// assert_eq!(decode_date("311299"), Date::from_calendar_date(2099, Month::December, 31).ok());
/// assert_eq!(decode_date("310294"), None);
/// ```
pub fn decode_date(raw: &str) -> Option<Date> {
    let result: IResult<_, (u8, u8, u16)> =
        (with_take(2u8), with_take(2u8), u16::parse).parse(raw);
    let (_, (day, month, year)) = result.ok()?;

    let month = Month::try_from(month).ok()?;

    Date::from_calendar_date(2000 + i32::from(year), month, day).ok()
}

/// Decodes the RMC date and time fields into a single UTC timestamp.
///
/// Returns `None` unless both fields decode.
pub fn decode_datetime(date_raw: &str, time_raw: &str) -> Option<OffsetDateTime> {
    let date = decode_date(date_raw)?;
    let time = decode_time(time_raw)?;

    Some(date.with_time(time).assume_utc())
}
