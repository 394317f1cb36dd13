use time::OffsetDateTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Clock,
    encoder::TrackPosition,
    fields::Fields,
    nmea_content::{
        Quality, TalkerId,
        coordinate::{decode_latitude, decode_longitude, encode_latitude, encode_longitude},
        datetime::{decode_time_today, encode_time},
    },
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
///
/// Numeric fields that are empty or malformed read as `NaN`. Integer fields read as `None`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GgaPacket {
    /// Talker ID, e.g. `GP`
    pub talker_id: TalkerId,
    /// Fix time in UTC, dated with the decoder clock's current date
    pub fix_time: Option<OffsetDateTime>,
    /// Latitude in decimal degrees, north positive
    pub latitude: f64,
    /// Longitude in decimal degrees, east positive
    pub longitude: f64,
    /// Raw GPS quality code, see [`GgaPacket::fix_quality`]
    pub fix_type: Option<u8>,
    /// Number of satellites in use
    pub satellites_in_view: Option<u8>,
    /// Horizontal Dilution of Precision
    pub horizontal_dilution: f64,
    /// Altitude above/below mean sea level (geoid) in meters
    pub altitude_meters: f64,
    /// Geoidal separation in meters, the difference between the WGS-84 earth ellipsoid and mean sea level (geoid),
    /// negative values indicate that the geoid is below the ellipsoid
    pub geoidal_separation: f64,
    /// Age of Differential GPS data in seconds, `None` when DGPS is not used
    pub differential_age: Option<f64>,
    /// Differential reference station ID
    pub differential_ref_stn: Option<String>,
}

impl GgaPacket {
    /// The typed GPS quality indicator, if the raw code is a known one.
    pub fn fix_quality(&self) -> Option<Quality> {
        self.fix_type.and_then(Quality::from_code)
    }

    pub(crate) fn from_fields<C>(talker_id: TalkerId, fields: &Fields<'_>, clock: &C) -> Self
    where
        C: Clock + ?Sized,
    {
        GgaPacket {
            talker_id,
            fix_time: decode_time_today(fields.raw(1), clock),
            latitude: decode_latitude(fields.raw(2), fields.raw(3)),
            longitude: decode_longitude(fields.raw(4), fields.raw(5)),
            fix_type: fields.value(6),
            satellites_in_view: fields.value(7),
            horizontal_dilution: fields.float(8),
            altitude_meters: fields.float(9),
            geoidal_separation: fields.float(11),
            differential_age: fields.optional_float(13),
            differential_ref_stn: fields.optional_str(14).map(String::from),
        }
    }
}

/// Builds GGA sentence content for an encoded position.
///
/// Fix quality, satellite count, HDOP and geoidal separation are fixed, the differential
/// fields are left empty.
pub(crate) fn format_gga(
    position: &TrackPosition,
    timestamp: OffsetDateTime,
    include_ms: bool,
) -> String {
    format!(
        "GPGGA,{},{},{},{},08,0.9,{:.1},M,0.0,M,,",
        encode_time(timestamp, include_ms),
        encode_latitude(position.latitude),
        encode_longitude(position.longitude),
        Quality::GpsFix,
        position.altitude,
    )
}
