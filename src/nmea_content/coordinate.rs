//! Conversion between signed decimal degrees and the NMEA degrees + decimal minutes form.
//!
//! ```text
//!  latitude    ddmm.mmmm,a    a = N | S
//!  longitude  dddmm.mmmm,a    a = E | W
//! ```

use nom::Parser;

use crate::{IResult, NmeaParse, nmea_content::Hemisphere, parse::with_take};

/// Encodes a latitude as `ddmm.mmmm,N` or `ddmm.mmmm,S`.
///
/// Non-negative values are north. The value is not range checked.
///
/// ```rust
/// use nmea0183_codec::nmea_content::coordinate::encode_latitude;
///
/// assert_eq!(encode_latitude(48.1173), "4807.0380,N");
/// assert_eq!(encode_latitude(-33.8688), "3352.1280,S");
/// ```
pub fn encode_latitude(latitude: f64) -> String {
    let hemisphere = if latitude >= 0.0 {
        Hemisphere::North
    } else {
        Hemisphere::South
    };

    encode(latitude, 2, hemisphere)
}

/// Encodes a longitude as `dddmm.mmmm,E` or `dddmm.mmmm,W`.
///
/// Non-negative values are east. The value is not range checked.
///
/// ```rust
/// use nmea0183_codec::nmea_content::coordinate::encode_longitude;
///
/// assert_eq!(encode_longitude(11.516667), "01131.0000,E");
/// assert_eq!(encode_longitude(-73.9712), "07358.2720,W");
/// ```
pub fn encode_longitude(longitude: f64) -> String {
    let hemisphere = if longitude >= 0.0 {
        Hemisphere::East
    } else {
        Hemisphere::West
    };

    encode(longitude, 3, hemisphere)
}

fn encode(value: f64, degree_digits: usize, hemisphere: Hemisphere) -> String {
    let magnitude = value.abs();

    // NaN and infinities pass through as text, which decodes back to NaN
    if !magnitude.is_finite() {
        return format!("{magnitude},{hemisphere}");
    }

    let degrees = magnitude.floor();
    let minutes = (magnitude - degrees) * 60.0;

    // minutes within 0.00005 of 60 render as `60.0000` without carrying into the degrees,
    // which still decodes to the right value

    format!("{degrees:0degree_digits$.0}{minutes:07.4},{hemisphere}")
}

/// Decodes a latitude from its `ddmm.mmmm` field and its hemisphere field.
///
/// Returns `NaN` when the numeric field is empty or malformed.
///
/// ```rust
/// use nmea0183_codec::nmea_content::coordinate::decode_latitude;
///
/// assert!((decode_latitude("4807.038", "N") - 48.1173).abs() < 1e-4);
/// assert!((decode_latitude("4807.038", "S") + 48.1173).abs() < 1e-4);
/// assert!(decode_latitude("", "N").is_nan());
/// ```
pub fn decode_latitude(raw: &str, hemisphere: &str) -> f64 {
    decode(raw, 2u8, hemisphere)
}

/// Decodes a longitude from its `dddmm.mmmm` field and its hemisphere field.
///
/// Returns `NaN` when the numeric field is empty or malformed.
pub fn decode_longitude(raw: &str, hemisphere: &str) -> f64 {
    decode(raw, 3u8, hemisphere)
}

fn decode(raw: &str, degree_digits: u8, hemisphere: &str) -> f64 {
    let result: IResult<_, (u16, f64)> = (with_take(degree_digits), f64::parse).parse(raw);

    let Ok((_, (degrees, minutes))) = result else {
        return f64::NAN;
    };

    let value = f64::from(degrees) + minutes / 60.0;

    match hemisphere {
        "S" | "W" => -value,
        _ => value,
    }
}
