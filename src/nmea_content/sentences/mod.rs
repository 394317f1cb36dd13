mod gga;
mod rmc;

pub use gga::GgaPacket;
pub use rmc::RmcPacket;

pub(crate) use gga::format_gga;
pub(crate) use rmc::format_rmc;

use std::fmt;

use nom::{
    AsChar, Input, Parser, character::complete::anychar, combinator::map_opt, error::ParseError,
};

use crate::{Clock, Error, IResult, NmeaParse, fields::Fields};

/// Two-letter talker ID, e.g. `GP` for GPS or `GN` for multi-constellation receivers.
pub type TalkerId = heapless::String<2>;

/// The sentence types this codec understands.
///
/// This is a closed set: any other identifier fails to decode with
/// [`Error::UnsupportedSentenceType`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentenceType {
    /// Global Positioning System Fix Data
    #[cfg_attr(feature = "serde", serde(rename = "GGA"))]
    Gga,
    /// Recommended Minimum Navigation Information
    #[cfg_attr(feature = "serde", serde(rename = "RMC"))]
    Rmc,
}

impl SentenceType {
    /// Looks up the sentence type for a three-letter identifier.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        match identifier {
            "GGA" => Some(Self::Gga),
            "RMC" => Some(Self::Rmc),
            _ => None,
        }
    }

    /// Returns the three-letter identifier, `"GGA"` or `"RMC"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gga => "GGA",
            Self::Rmc => "RMC",
        }
    }
}

impl fmt::Display for SentenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded sentence.
///
/// Each variant wraps the record of one sentence type. The variant is the sentence type:
/// there is no separate type field that could disagree with the payload.
///
/// ```rust
/// use nmea0183_codec::{Packet, SentenceType, decode};
///
/// let packet = decode("$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A", false).unwrap();
/// assert_eq!(packet.sentence_type(), SentenceType::Rmc);
/// assert_eq!(packet.talker_id(), "GP");
///
/// match packet {
///     Packet::Gga(gga) => println!("altitude: {} m", gga.altitude_meters),
///     Packet::Rmc(rmc) => println!("speed: {} kn", rmc.speed_knots),
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
#[derive(Debug, Clone, PartialEq)]
pub enum Packet {
    /// Global Positioning System Fix Data
    #[cfg_attr(feature = "serde", serde(rename = "GGA"))]
    Gga(GgaPacket),
    /// Recommended Minimum Navigation Information
    #[cfg_attr(feature = "serde", serde(rename = "RMC"))]
    Rmc(RmcPacket),
}

impl Packet {
    pub fn sentence_type(&self) -> SentenceType {
        match self {
            Self::Gga(_) => SentenceType::Gga,
            Self::Rmc(_) => SentenceType::Rmc,
        }
    }

    pub fn talker_id(&self) -> &str {
        match self {
            Self::Gga(gga) => &gga.talker_id,
            Self::Rmc(rmc) => &rmc.talker_id,
        }
    }

    /// Latitude in decimal degrees, `NaN` when the sentence carried none.
    pub fn latitude(&self) -> f64 {
        match self {
            Self::Gga(gga) => gga.latitude,
            Self::Rmc(rmc) => rmc.latitude,
        }
    }

    /// Longitude in decimal degrees, `NaN` when the sentence carried none.
    pub fn longitude(&self) -> f64 {
        match self {
            Self::Gga(gga) => gga.longitude,
            Self::Rmc(rmc) => rmc.longitude,
        }
    }

    pub fn as_gga(&self) -> Option<&GgaPacket> {
        match self {
            Self::Gga(gga) => Some(gga),
            Self::Rmc(_) => None,
        }
    }

    pub fn as_rmc(&self) -> Option<&RmcPacket> {
        match self {
            Self::Rmc(rmc) => Some(rmc),
            Self::Gga(_) => None,
        }
    }

    /// Parses sentence content, the part between `$` and `*`.
    ///
    /// The head field holds the talker ID in its first two characters and the sentence
    /// identifier in the rest.
    pub(crate) fn parse<'a, C>(i: &'a str, clock: &C) -> IResult<&'a str, Self>
    where
        C: Clock + ?Sized,
    {
        let (i, fields) = Fields::parse(i)?;

        let head = fields.raw(0);
        let (talker_id, identifier) = head.split_at_checked(2).unwrap_or((head, ""));
        let talker_id = TalkerId::try_from(talker_id).unwrap_or_default();

        let packet = match SentenceType::from_identifier(identifier) {
            Some(SentenceType::Gga) => Self::Gga(GgaPacket::from_fields(talker_id, &fields, clock)),
            Some(SentenceType::Rmc) => Self::Rmc(RmcPacket::from_fields(talker_id, &fields)),
            None => {
                log::debug!("unsupported sentence type {identifier:?}");
                return Err(nom::Err::Error(Error::UnsupportedSentenceType(identifier)));
            }
        };

        Ok((i, packet))
    }
}

macro_rules! parsable_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $char:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Returns the indicator for a wire character, if it is one.
            pub fn from_char(c: char) -> Option<Self> {
                match c {
                    $($char => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Returns the wire character of the indicator.
            pub fn as_char(&self) -> char {
                match self {
                    $(Self::$variant => $char,)*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_char())
            }
        }

        impl<I, E> NmeaParse<I, E> for $name
        where
            I: Input,
            <I as Input>::Item: AsChar,
            E: ParseError<I>,
        {
            fn parse(i: I) -> IResult<I, Self, E> {
                map_opt(anychar, Self::from_char).parse(i)
            }
        }
    };
}

parsable_enum! {
    /// Status Mode Indicator
    pub enum Status {
        /// A - Valid
        'A' => Valid,
        /// V - Invalid (void)
        'V' => Invalid,
    }
}

parsable_enum! {
    /// Hemisphere of a coordinate or of the magnetic variation
    pub enum Hemisphere {
        /// N - North
        'N' => North,
        /// S - South
        'S' => South,
        /// E - East
        'E' => East,
        /// W - West
        'W' => West,
    }
}

parsable_enum! {
    /// FAA Mode Indicator
    ///
    /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_sentence_mixes_and_nmea_variations>
    pub enum FaaMode {
        /// A - Autonomous mode
        'A' => Autonomous,
        /// C - Quectel Querk, "Caution"
        'C' => Caution,
        /// D - Differential Mode
        'D' => Differential,
        /// E - Estimated (dead-reckoning) mode
        'E' => Estimated,
        /// F - RTK Float mode
        'F' => FloatRtk,
        /// M - Manual Input Mode
        'M' => Manual,
        /// N - Data Not Valid
        'N' => DataNotValid,
        /// P - Precise
        'P' => Precise,
        /// R - RTK Integer mode
        'R' => FixedRtk,
        /// S - Simulated Mode
        'S' => Simulator,
        /// U - Quectel Querk, "Unsafe"
        'U' => Unsafe,
    }
}

parsable_enum! {
    /// Quality of the GPS fix
    pub enum Quality {
        /// 0 - Fix not available
        '0' => NoFix,
        /// 1 - GPS fix
        '1' => GpsFix,
        /// 2 - Differential GPS fix
        '2' => DgpsFix,
        /// 3 - PPS fix
        '3' => PpsFix,
        /// 4 - Real Time Kinematic
        '4' => Rtk,
        /// 5 - Float RTK
        '5' => FloatRtk,
        /// 6 - estimated (dead reckoning)
        '6' => Estimated,
        /// 7 - Manual input mode
        '7' => Manual,
        /// 8 - Simulation mode
        '8' => Simulation,
    }
}

impl Quality {
    /// Returns the quality indicator for a numeric GGA fix quality code.
    pub fn from_code(code: u8) -> Option<Self> {
        char::from_digit(u32::from(code), 10).and_then(Self::from_char)
    }
}
