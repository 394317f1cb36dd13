//! # Error Types
//!
//! This module defines the error type returned when a sentence cannot be decoded.
//!
//! Only problems with the frame itself are errors. Missing or malformed values inside an
//! otherwise well-formed GGA/RMC sentence are not: they decode to `NaN` or `None`.

use nom::error::{ErrorKind, FromExternalError, ParseError};
use std::fmt::{self, Debug, Display};

/// Holds the result of parsing functions.
///
/// It depends on the input type `I`, the output type `O`, and the error type `E`
/// (by default `nom::error::Error<I>`).
///
/// The `Ok` side is a pair containing the remainder of the input (the part of the data that
/// was not parsed) and the produced value. The `Err` side contains an instance of `nom::Err`.
///
/// Outside of the parsing code, you can use the [nom::Finish::finish] method to convert
/// it to a more common result type.
pub type IResult<I, O, E = nom::error::Error<I>> = nom::IResult<I, O, Error<I, E>>;

/// Represents all possible errors that can occur while decoding an NMEA sentence.
///
/// Every variant is terminal for the call that produced it: the decoder never returns a
/// partially filled record alongside an error.
#[derive(Debug, PartialEq)]
pub enum Error<I, E = nom::error::Error<I>> {
    /// The provided input contains non-ASCII characters.
    ///
    /// NMEA sentences are ASCII-only; the checksum and the fixed-width
    /// coordinate fields are defined over single-byte characters.
    NonAscii,

    /// The input is not an NMEA frame.
    ///
    /// Either the leading `$` or the `*` checksum delimiter is missing.
    InvalidFrame,

    /// The checksum of the sentence was incorrect.
    ///
    /// Only reported when checksum validation was requested.
    ChecksumMismatch {
        /// The checksum calculated from the sentence content
        expected: u8,
        /// The checksum transmitted in the sentence, `None` when the field after `*` is
        /// not exactly two hex digits
        found: Option<u8>,
    },

    /// The sentence identifier is neither `GGA` nor `RMC`.
    ///
    /// Contains the identifier found after the two-letter talker ID.
    UnsupportedSentenceType(I),

    /// A low-level [`NmeaParse`](crate::NmeaParse) parser failed.
    ParsingError(E),
}

impl<I, E> ParseError<I> for Error<I, E>
where
    E: ParseError<I>,
{
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        Error::ParsingError(E::from_error_kind(input, kind))
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I, E, EX> FromExternalError<I, EX> for Error<I, E>
where
    E: FromExternalError<I, EX>,
{
    fn from_external_error(input: I, kind: ErrorKind, e: EX) -> Self {
        Error::ParsingError(E::from_external_error(input, kind, e))
    }
}

impl<I, E> Display for Error<I, E>
where
    I: Display,
    E: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NonAscii => write!(f, "sentence contains non-ASCII characters"),
            Error::InvalidFrame => write!(f, "invalid frame: expected `$...*hh`"),
            Error::ChecksumMismatch {
                expected,
                found: Some(found),
            } => write!(
                f,
                "checksum mismatch: calculated {expected:02X}, transmitted {found:02X}"
            ),
            Error::ChecksumMismatch {
                expected,
                found: None,
            } => write!(
                f,
                "checksum mismatch: calculated {expected:02X}, transmitted field is not two hex digits"
            ),
            Error::UnsupportedSentenceType(id) => write!(f, "unsupported sentence type: \"{id}\""),
            Error::ParsingError(e) => write!(f, "parsing error: {e:?}"),
        }
    }
}

impl<I, E> std::error::Error for Error<I, E>
where
    I: Debug + Display,
    E: Debug,
{
}
