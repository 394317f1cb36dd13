//! # NMEA Content
//!
//! Typed content of GGA and RMC sentences, and the unit conversions between the wire
//! representation and the typed records:
//!
//! - [`coordinate`]: decimal degrees ⇄ `ddmm.mmmm,H` / `dddmm.mmmm,H`
//! - [`datetime`]: timestamps ⇄ `hhmmss[.sss]` and `ddmmyy`
//! - [`Packet`], [`GgaPacket`], [`RmcPacket`]: the decoded records

pub mod coordinate;
pub mod datetime;
mod sentences;

pub use sentences::*;
