//! # NMEA 0183 Framing
//!
//! This module handles the frame around every sentence: `$<content>*hh`.
//!
//! - [`checksum`], [`format_checksum`] and [`frame_sentence`] are shared by the decoder
//!   and the encoder.
//! - [`Decoder`] strips and optionally validates the frame, then hands the content to the
//!   GGA/RMC field extraction in [`nmea_content`](crate::nmea_content).

use nom::{
    AsBytes, Err, Finish, Input, Parser,
    bytes::complete::take,
    character::complete::{char, hex_digit0},
    combinator::{rest_len, verify},
    error::{ErrorKind, ParseError},
    number::complete::hex_u32,
    sequence::terminated,
};

use crate::{Clock, Error, IResult, SystemClock, nmea_content::Packet};

/// Defines whether the decoder checks the transmitted checksum.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum ChecksumMode {
    #[default]
    /// The `*hh` field is required as a delimiter but its value is never inspected.
    Ignore,

    /// The `*hh` field must hold exactly two hex digits equal to the checksum of the content.
    ///
    /// A mismatch is reported as [`Error::ChecksumMismatch`], and so is a field that is
    /// empty, a single digit, or not hex.
    Validate,
}

impl From<bool> for ChecksumMode {
    fn from(validate: bool) -> Self {
        if validate {
            ChecksumMode::Validate
        } else {
            ChecksumMode::Ignore
        }
    }
}

/// A configurable GGA/RMC sentence decoder.
///
/// It uses the builder pattern: start from [`Decoder::new`] and adjust the checksum mode or
/// the clock before decoding.
///
/// The clock only matters for GGA sentences: they carry a time of day but no date, so the
/// decoded fix time is placed on the clock's current UTC date.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::{ChecksumMode, Decoder, Error, Packet};
///
/// let decoder = Decoder::new().checksum_mode(ChecksumMode::Validate);
///
/// let packet = decoder
///     .decode("$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A")
///     .unwrap();
/// assert!(matches!(packet, Packet::Rmc(_)));
///
/// let result = decoder.decode("$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6B");
/// assert_eq!(result, Err(Error::ChecksumMismatch { expected: 0x6A, found: Some(0x6B) }));
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct Decoder<C = SystemClock> {
    /// Checksum mode for the decoder.
    checksum_mode: ChecksumMode,

    /// Source of the current date for GGA fix times.
    clock: C,
}

impl Decoder {
    /// Creates a new decoder with default settings.
    ///
    /// The default settings are:
    /// - Checksum mode: [`ChecksumMode::Ignore`]
    /// - Clock: [`SystemClock`]
    pub fn new() -> Self {
        Decoder {
            checksum_mode: ChecksumMode::Ignore,
            clock: SystemClock,
        }
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Decoder::new()
    }
}

impl<C> Decoder<C>
where
    C: Clock,
{
    /// Sets the checksum mode for the decoder.
    pub fn checksum_mode(mut self, mode: ChecksumMode) -> Self {
        self.checksum_mode = mode;
        self
    }

    /// Replaces the clock used to date GGA fix times.
    pub fn clock<D: Clock>(self, clock: D) -> Decoder<D> {
        Decoder {
            checksum_mode: self.checksum_mode,
            clock,
        }
    }

    /// Decodes a single sentence.
    ///
    /// The sentence must not carry a trailing `\r\n`.
    pub fn decode<'a>(&self, sentence: &'a str) -> Result<Packet, Error<&'a str>> {
        self.parse(sentence).finish().map(|(_, packet)| packet)
    }

    /// Decodes a single sentence, nom style.
    ///
    /// The remaining input of a successful parse is always empty.
    pub fn parse<'a>(&self, i: &'a str) -> IResult<&'a str, Packet> {
        if !i.is_ascii() {
            log::debug!("rejecting non-ASCII sentence");
            return Err(nom::Err::Error(Error::NonAscii));
        }

        let (cc, data) = frame(i)?;

        if self.checksum_mode == ChecksumMode::Validate {
            let expected = checksum(data);
            let found = transmitted_checksum::<_, nom::error::Error<&str>>(cc)
                .ok()
                .map(|(_, found)| found);

            if found != Some(expected) {
                log::debug!("checksum mismatch in {i:?}: calculated {expected:02X}, transmitted {cc:?}");
                return Err(nom::Err::Error(Error::ChecksumMismatch { expected, found }));
            }
        }

        let (_, packet) = Packet::parse(data, &self.clock)?;
        log::trace!(
            "decoded {} sentence from talker {:?}",
            packet.sentence_type(),
            packet.talker_id()
        );

        Ok(("", packet))
    }
}

/// Decodes a single GGA or RMC sentence.
///
/// When `validate_checksum` is set, the transmitted checksum must match the content.
/// Otherwise the `*hh` field only delimits the content. Empty or malformed values inside a
/// well-formed sentence do not fail the decode: floats read as `NaN`, everything else as
/// `None`.
///
/// # Errors
///
/// - [`Error::InvalidFrame`]: no leading `$` or no `*` delimiter.
/// - [`Error::ChecksumMismatch`]: validation requested and the `*hh` field is not the
///   checksum of the content.
/// - [`Error::UnsupportedSentenceType`]: the identifier is neither `GGA` nor `RMC`.
/// - [`Error::NonAscii`]: the sentence holds a non-ASCII character. NMEA 0183 is an ASCII
///   format, so this is checked before anything else.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::{Error, Packet, decode};
///
/// let packet = decode("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47", true).unwrap();
/// let Packet::Gga(gga) = packet else { unreachable!() };
/// assert_eq!(gga.talker_id, "GP");
/// assert_eq!(gga.altitude_meters, 545.4);
/// assert_eq!(gga.satellites_in_view, Some(8));
///
/// assert_eq!(decode("GPGGA,123519*47", false), Err(Error::InvalidFrame));
/// assert_eq!(decode("$GPGSV,3,1,11*48", false), Err(Error::UnsupportedSentenceType("GSV")));
/// ```
pub fn decode(sentence: &str, validate_checksum: bool) -> Result<Packet, Error<&str>> {
    Decoder::new()
        .checksum_mode(validate_checksum.into())
        .decode(sentence)
}

/// Splits a frame into its content and its checksum field.
///
/// The content is everything between the leading `$` and the last `*`, the checksum field
/// everything after it. Returned nom style: `(checksum_field, content)`.
fn frame(i: &str) -> IResult<&str, &str> {
    let Ok((i, _)) = char::<_, Error<&str>>('$').parse(i) else {
        log::debug!("rejecting frame without leading `$`");
        return Err(Err::Error(Error::InvalidFrame));
    };

    match i.rsplit_once('*') {
        Some((data, cc)) => Ok((cc, data)),
        None => {
            log::debug!("rejecting frame without `*` delimiter");
            Err(Err::Error(Error::InvalidFrame))
        }
    }
}

/// Parses the transmitted checksum field: exactly two hex digits, either case.
fn transmitted_checksum<I, E>(cc: I) -> nom::IResult<I, u8, E>
where
    I: Input + AsBytes,
    <I as Input>::Item: nom::AsChar,
    E: ParseError<I>,
{
    let (_, cc) = consumed(take(2u8), ErrorKind::Count).parse(cc)?;
    let (_, cc) = consumed(hex_digit0, ErrorKind::IsA).parse(cc)?;

    hex_u32.map(|cc| cc as u8).parse(cc)
}

/// Calculates the NMEA 0183 checksum of the given content.
///
/// The checksum is the XOR of every byte of the content, i.e. everything between the `$`
/// prefix and the `*` delimiter, both excluded.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::checksum;
///
/// assert_eq!(checksum("GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,"), 0x47);
/// assert_eq!(checksum(""), 0);
/// ```
pub fn checksum<I>(input: I) -> u8
where
    I: AsBytes,
{
    input
        .as_bytes()
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::format_checksum;
///
/// assert_eq!(format_checksum(0x6A), "6A");
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}

/// Wraps sentence content into a complete frame: `$`, the content, `*` and its checksum.
///
/// ```rust
/// use nmea0183_codec::frame_sentence;
///
/// assert_eq!(
///     frame_sentence("GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,"),
///     "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47"
/// );
/// ```
pub fn frame_sentence(content: &str) -> String {
    format!("${content}*{}", format_checksum(checksum(content)))
}

/// Ensures that the parser consumes all input, failing with `e` otherwise.
fn consumed<I, E: ParseError<I>, F>(
    f: F,
    e: ErrorKind,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    F: Parser<I, Error = E>,
{
    terminated(
        f,
        verify(rest_len, |len| len == &0)
            .or(move |i| Err(Err::Error(nom::error::make_error(i, e)))),
    )
}
