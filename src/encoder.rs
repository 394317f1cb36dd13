//! # Sentence Encoder
//!
//! Renders a [`TrackPosition`] as a complete, checksummed GGA or RMC sentence.
//!
//! Encoding has no error path. Coordinates are not range checked and non-finite values are
//! written as text. A non-finite coordinate decodes back as `NaN`, while the plain numeric
//! fields (altitude, speed, heading) decode `inf` back as infinity.

use time::OffsetDateTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Clock, SystemClock, frame_sentence,
    nmea_content::{format_gga, format_rmc},
};

/// Conversion factor from meters per second to knots.
pub const KNOTS_PER_METER_PER_SECOND: f64 = 1.94384;

/// A position to encode.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TrackPosition {
    /// Latitude in decimal degrees, north positive
    pub latitude: f64,
    /// Longitude in decimal degrees, east positive
    pub longitude: f64,
    /// Altitude in meters
    pub altitude: f64,
    /// Speed over ground in meters per second
    pub speed: f64,
    /// Heading in degrees true
    pub heading: f64,
    /// Time of the position
    pub timestamp: Option<OffsetDateTime>,
}

/// Per-call encoding options.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct EncodeOptions {
    /// Overrides the position's timestamp
    pub timestamp: Option<OffsetDateTime>,
    /// Appends milliseconds to the time field: `hhmmss.sss`
    pub include_ms: bool,
}

/// A GGA/RMC sentence encoder.
///
/// The sentence time is taken from [`EncodeOptions::timestamp`], then from
/// [`TrackPosition::timestamp`], and finally from the encoder's clock.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::{EncodeOptions, Encoder, FixedClock, TrackPosition};
/// use time::{Date, Month, Time};
///
/// let now = Date::from_calendar_date(2094, Month::March, 23)?
///     .with_time(Time::from_hms(12, 35, 19)?)
///     .assume_utc();
/// let encoder = Encoder::with_clock(FixedClock(now));
/// let position = TrackPosition {
///     latitude: 48.1173,
///     longitude: 11.516667,
///     altitude: 545.4,
///     ..Default::default()
/// };
///
/// assert_eq!(
///     encoder.encode_gga(&position, &EncodeOptions::default()),
///     "$GPGGA,123519,4807.0380,N,01131.0000,E,1,08,0.9,545.4,M,0.0,M,,*7C"
/// );
/// # Ok::<(), time::error::ComponentRange>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct Encoder<C = SystemClock> {
    clock: C,
}

impl Encoder {
    /// Creates an encoder that falls back to the system clock.
    pub fn new() -> Self {
        Encoder { clock: SystemClock }
    }
}

impl<C> Encoder<C>
where
    C: Clock,
{
    /// Creates an encoder that falls back to the given clock.
    pub fn with_clock(clock: C) -> Self {
        Encoder { clock }
    }

    /// Encodes a GGA sentence.
    ///
    /// Fix quality (`1`), satellite count (`08`), HDOP (`0.9`) and geoidal separation
    /// (`0.0`) are fixed values.
    pub fn encode_gga(&self, position: &TrackPosition, options: &EncodeOptions) -> String {
        let timestamp = self.timestamp(position, options);
        let sentence = frame_sentence(&format_gga(position, timestamp, options.include_ms));
        log::trace!("encoded {sentence}");

        sentence
    }

    /// Encodes an RMC sentence.
    ///
    /// The speed is converted from meters per second to knots. Status and mode are always
    /// `A`, the encoder has no representation of a void fix.
    pub fn encode_rmc(&self, position: &TrackPosition, options: &EncodeOptions) -> String {
        let timestamp = self.timestamp(position, options);
        let sentence = frame_sentence(&format_rmc(position, timestamp, options.include_ms));
        log::trace!("encoded {sentence}");

        sentence
    }

    fn timestamp(&self, position: &TrackPosition, options: &EncodeOptions) -> OffsetDateTime {
        match options.timestamp.or(position.timestamp) {
            Some(timestamp) => timestamp,
            None => {
                log::debug!("no timestamp supplied, using the current time");
                self.clock.now()
            }
        }
    }
}

/// Encodes a GGA sentence, falling back to the system clock for its time.
///
/// ```rust
/// use nmea0183_codec::{EncodeOptions, TrackPosition, encode_gga};
///
/// let sentence = encode_gga(&TrackPosition::default(), &EncodeOptions::default());
/// assert!(sentence.starts_with("$GPGGA,"));
/// ```
pub fn encode_gga(position: &TrackPosition, options: &EncodeOptions) -> String {
    Encoder::new().encode_gga(position, options)
}

/// Encodes an RMC sentence, falling back to the system clock for its time and date.
pub fn encode_rmc(position: &TrackPosition, options: &EncodeOptions) -> String {
    Encoder::new().encode_rmc(position, options)
}
