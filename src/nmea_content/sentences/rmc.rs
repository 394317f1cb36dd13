use time::OffsetDateTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    encoder::{KNOTS_PER_METER_PER_SECOND, TrackPosition},
    fields::Fields,
    nmea_content::{
        FaaMode, Hemisphere, Status, TalkerId,
        coordinate::{decode_latitude, decode_longitude, encode_latitude, encode_longitude},
        datetime::{decode_datetime, encode_date, encode_time},
    },
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10 1112
///         |         | |       | |        |  |   |   |    |  | |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m*hh<CR><LF>
/// ```
///
/// The status does not gate the other fields: a void fix still decodes, with its empty
/// numeric fields read as `NaN`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct RmcPacket {
    /// Talker ID, e.g. `GP`
    pub talker_id: TalkerId,
    /// Fix date and time in UTC, `None` unless both fields are valid
    pub datetime: Option<OffsetDateTime>,
    /// Status Mode Indicator as transmitted, see [`RmcPacket::status`]
    pub status: Option<char>,
    /// Latitude in decimal degrees, north positive
    pub latitude: f64,
    /// Longitude in decimal degrees, east positive
    pub longitude: f64,
    /// Speed over ground in knots
    pub speed_knots: f64,
    /// Course over ground in degrees true
    pub track_true: f64,
    /// Magnetic variation in degrees, `NaN` when not reported
    pub variation: f64,
    /// Direction of the magnetic variation, east or west
    pub variation_pole: Option<Hemisphere>,
    /// FAA Mode Indicator as transmitted, NMEA 2.3 and later, see [`RmcPacket::faa_mode`]
    pub faa_mode: Option<char>,
}

impl RmcPacket {
    /// The typed status, `None` when the field is empty or holds an unknown indicator.
    pub fn status(&self) -> Option<Status> {
        self.status.and_then(Status::from_char)
    }

    /// The typed FAA mode, `None` when the field is empty or holds an unknown indicator.
    pub fn faa_mode(&self) -> Option<FaaMode> {
        self.faa_mode.and_then(FaaMode::from_char)
    }

    pub(crate) fn from_fields(talker_id: TalkerId, fields: &Fields<'_>) -> Self {
        RmcPacket {
            talker_id,
            datetime: decode_datetime(fields.raw(9), fields.raw(1)),
            status: fields.value(2),
            latitude: decode_latitude(fields.raw(3), fields.raw(4)),
            longitude: decode_longitude(fields.raw(5), fields.raw(6)),
            speed_knots: fields.float(7),
            track_true: fields.float(8),
            variation: fields.float(10),
            variation_pole: fields
                .value(11)
                .filter(|pole| matches!(pole, Hemisphere::East | Hemisphere::West)),
            faa_mode: fields.value(12),
        }
    }
}

/// Builds RMC sentence content for an encoded position.
///
/// The status is always valid and the mode always autonomous, the magnetic variation is
/// left empty.
pub(crate) fn format_rmc(
    position: &TrackPosition,
    timestamp: OffsetDateTime,
    include_ms: bool,
) -> String {
    format!(
        "GPRMC,{},{},{},{},{:.1},{:.1},{},,,{}",
        encode_time(timestamp, include_ms),
        Status::Valid,
        encode_latitude(position.latitude),
        encode_longitude(position.longitude),
        position.speed * KNOTS_PER_METER_PER_SECOND,
        position.heading,
        encode_date(timestamp),
        FaaMode::Autonomous,
    )
}
