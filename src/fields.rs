//! # Field Tokenizer
//!
//! Splits the content of a sentence (everything between `$` and `*`) into its
//! comma-delimited fields and reads typed values out of them by position.
//!
//! Field access never fails: a position past the end of the sentence reads as an empty
//! field, an empty or malformed float reads as `NaN`, and anything else reads as `None`.

use nom::{
    Parser, bytes::complete::take_till, character::complete::char, multi::separated_list1,
};

use crate::{IResult, NmeaParse};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Fields<'a> {
    fields: Vec<&'a str>,
}

impl<'a> Fields<'a> {
    pub(crate) fn parse(i: &'a str) -> IResult<&'a str, Self> {
        separated_list1(char(','), take_till(|c: char| c == ','))
            .map(|fields| Self { fields })
            .parse(i)
    }

    /// The raw field at `index`, or `""` past the end of the sentence.
    pub(crate) fn raw(&self, index: usize) -> &'a str {
        self.fields.get(index).copied().unwrap_or_default()
    }

    /// A required numeric field, `NaN` when empty or malformed.
    pub(crate) fn float(&self, index: usize) -> f64 {
        self.value(index).unwrap_or(f64::NAN)
    }

    /// A float that is only present when its raw field is non-empty.
    ///
    /// A non-empty field that is not a number still counts as present and reads as `NaN`.
    pub(crate) fn optional_float(&self, index: usize) -> Option<f64> {
        self.optional_str(index).map(|_| self.float(index))
    }

    pub(crate) fn optional_str(&self, index: usize) -> Option<&'a str> {
        Some(self.raw(index)).filter(|raw| !raw.is_empty())
    }

    pub(crate) fn value<T>(&self, index: usize) -> Option<T>
    where
        T: NmeaParse<&'a str>,
    {
        T::parse(self.raw(index)).ok().map(|(_, value)| value)
    }
}
