use nom::{
    AsBytes, AsChar, Compare, Input, Offset, ParseTo, Parser, ToUsize, bytes::complete::take,
    character::complete::anychar, combinator::opt, error::ParseError,
};

use crate::{Error, IResult};

/// Trait for parsing values out of a single NMEA 0183 field.
///
/// Implementations are provided for unsigned integers, floats, `char`, `Option<T>` and the
/// indicator enums of [`nmea_content`](crate::nmea_content). Like the lenient number parsing
/// NMEA consumers usually rely on, a parser only looks at the leading value: `"08"` parses
/// as `8u8`, and `"12.5x"` parses as `12.5` with `"x"` left over.
///
/// # Examples
///
/// ```rust
/// use nmea0183_codec::{IResult, NmeaParse};
///
/// let result: IResult<_, _> = u8::parse("08");
/// assert_eq!(result, Ok(("", 8)));
///
/// let result: IResult<_, _> = f64::parse("545.4");
/// assert_eq!(result, Ok(("", 545.4)));
///
/// // An empty field yields None
/// let result: IResult<_, _> = Option::<u8>::parse("");
/// assert_eq!(result, Ok(("", None)));
/// ```
pub trait NmeaParse<I, E = nom::error::Error<I>>
where
    I: Input,
    E: ParseError<I>,
    Self: Sized,
{
    /// Parses the leading value of the input.
    ///
    /// Returns the remaining input together with the parsed value, or an [`Error`] when the
    /// input does not start with a value of this type.
    fn parse(i: I) -> IResult<I, Self, E>;
}

macro_rules! impl_uints_type {
    ($($t:tt),*) => ($(
        impl<I, E> NmeaParse<I, E> for $t
        where
            I: Input,
            <I as Input>::Item: AsChar,
            E: ParseError<I>,
        {
            fn parse(i: I) -> IResult<I, Self, E> {
                nom::character::complete::$t.parse(i)
            }
        }
    )*)
}

impl_uints_type!(u8, u16, u32);

macro_rules! impl_float_type {
    ($($t:ty, $p:ident),*) => ($(
        impl<I, E> NmeaParse<I, E> for $t
        where
            I: Input + Offset + ParseTo<$t> + AsBytes,
            I: Compare<&'static str> + for<'a> Compare<&'a [u8]>,
            <I as Input>::Item: AsChar,
            <I as Input>::Iter: Clone,
            E: ParseError<I>,
        {
            fn parse(i: I) -> IResult<I, Self, E> {
                nom::number::complete::$p.parse(i)
            }
        }
    )*)
}

impl_float_type!(f32, float, f64, double);

impl<I, E> NmeaParse<I, E> for char
where
    I: Input,
    <I as Input>::Item: AsChar,
    E: ParseError<I>,
{
    fn parse(i: I) -> IResult<I, Self, E> {
        anychar.parse(i)
    }
}

impl<T, I, E> NmeaParse<I, E> for Option<T>
where
    T: NmeaParse<I, E>,
    I: Input,
    E: ParseError<I>,
{
    fn parse(i: I) -> IResult<I, Self, E> {
        opt(T::parse).parse(i)
    }
}

/// Takes exactly `count` characters and parses a `T` from them.
///
/// Used for the fixed-width parts of NMEA fields, such as the degree digits of a
/// coordinate or the hour digits of a time.
///
/// ```rust
/// use nmea0183_codec::{IResult, parse::with_take};
/// use nom::Parser;
///
/// let result: IResult<_, u8> = with_take(2u8).parse("4807.038");
/// assert_eq!(result, Ok(("07.038", 48)));
/// ```
pub fn with_take<I, E, T, C>(count: C) -> impl Parser<I, Output = T, Error = Error<I, E>>
where
    T: NmeaParse<I, E>,
    I: Input,
    <I as Input>::Item: AsChar,
    E: ParseError<I>,
    C: ToUsize,
{
    take(count).and_then(T::parse)
}
