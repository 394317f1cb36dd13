//! # NMEA 0183 Codec
//!
//! This library decodes and encodes the two most common NMEA 0183 positioning sentences,
//! GGA (fix data) and RMC (recommended minimum navigation data), with the format:
//! `$TTSSS,D1,D2,...,Dn*CC`
//!
//! - Decoding strips the frame, optionally validates the checksum, and extracts a typed
//!   [`GgaPacket`] or [`RmcPacket`]. Missing or malformed values inside a well-formed
//!   sentence degrade to `NaN` or `None` instead of failing the decode.
//! - Encoding renders a [`TrackPosition`] as a complete GGA or RMC sentence, checksum
//!   included.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_codec::{EncodeOptions, Packet, TrackPosition, decode, encode_rmc};
//!
//! let packet = decode("$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A", true).unwrap();
//! if let Packet::Rmc(rmc) = &packet {
//!     assert_eq!(rmc.speed_knots, 22.4);
//! }
//!
//! let position = TrackPosition {
//!     latitude: 40.7831,
//!     longitude: -73.9712,
//!     altitude: 10.0,
//!     speed: 72.0,
//!     heading: 90.0,
//!     timestamp: None,
//! };
//! let sentence = encode_rmc(&position, &EncodeOptions::default());
//!
//! let packet = decode(&sentence, true).unwrap();
//! assert!((packet.latitude() - 40.7831).abs() < 1e-4);
//! ```

pub mod clock;
pub mod encoder;
pub mod error;
mod fields;
mod nmea0183;
pub mod nmea_content;
pub mod parse;

pub use clock::{Clock, FixedClock, SystemClock};
pub use encoder::{EncodeOptions, Encoder, TrackPosition, encode_gga, encode_rmc};
pub use error::{Error, IResult};
pub use nmea_content::{
    FaaMode, GgaPacket, Hemisphere, Packet, Quality, RmcPacket, SentenceType, Status, TalkerId,
};
pub use nmea0183::*;
pub use parse::NmeaParse;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
