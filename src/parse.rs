//! # Scalar Field Values
//!
//! Strict decoding of the simple scalar fields of a sentence: integers, floats, single
//! characters and single-character enumerations. Unlike C's `atoi`/`atof`, a field whose
//! text is not entirely a value of the target type is an error.

use nom::{
    Err, Input, Mode, OutputMode, PResult, Parser,
    character::complete::anychar,
    error::{ErrorKind, ParseError},
};

use crate::{FieldError, IResult};

/// Trait for types that can be decoded from a single comma-delimited field.
///
/// Implementations are provided for the primitive integer and float types and for
/// `char`. Single-character enumerations such as [`Quality`] implement it through
/// the `field_enum!` macro.
///
/// # Examples
///
/// ```rust
/// use nmea_dispatch::{FieldError, FieldValue};
///
/// assert_eq!(u8::from_field("08"), Ok(8));
/// assert_eq!(f32::from_field("545.4"), Ok(545.4));
/// assert_eq!(char::from_field("M"), Ok('M'));
///
/// assert_eq!(u8::from_field(""), Err(FieldError::Empty));
/// assert!(f32::from_field("54X.4").is_err());
/// ```
///
/// [`Quality`]: crate::sentences::Quality
pub trait FieldValue: Sized {
    /// Parses a value from the start of the input.
    fn parse(i: &str) -> IResult<&str, Self>;

    /// Decodes a complete field; trailing text after the value is an error.
    fn from_field(field: &str) -> Result<Self, FieldError> {
        if field.is_empty() {
            return Err(FieldError::Empty);
        }

        let (_, value) = consumed(Self::parse, ErrorKind::Eof).parse(field)?;
        Ok(value)
    }
}

macro_rules! impl_integer_value {
    ($($t:tt),*) => ($(
        impl FieldValue for $t {
            fn parse(i: &str) -> IResult<&str, Self> {
                nom::character::complete::$t(i)
            }
        }
    )*)
}

impl_integer_value!(u8, u16, u32, u64, i8, i16, i32, i64);

macro_rules! impl_float_value {
    ($($t:ty, $p:ident),*) => ($(
        impl FieldValue for $t {
            fn parse(i: &str) -> IResult<&str, Self> {
                nom::number::complete::$p(i)
            }
        }
    )*)
}

impl_float_value!(f32, float, f64, double);

impl FieldValue for char {
    fn parse(i: &str) -> IResult<&str, Self> {
        anychar(i)
    }
}

/// Declares an enumeration decoded from a single-character field.
macro_rules! field_enum {
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

        impl $crate::FieldValue for $name {
            fn parse(i: &str) -> $crate::IResult<&str, Self> {
                let (rest, c) = nom::character::complete::anychar(i)?;
                match c {
                    $($char => Ok((rest, Self::$variant)),)*
                    _ => Err(nom::Err::Error(nom::error::ParseError::from_error_kind(
                        i,
                        nom::error::ErrorKind::OneOf,
                    ))),
                }
            }
        }
    };
}

pub(crate) use field_enum;

/// Ensures that the parser consumes all input.
///
/// Runs `f` and fails with `e` if any input remains afterwards.
pub fn consumed<I, E: ParseError<I>, F>(
    f: F,
    e: ErrorKind,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    F: Parser<I, Error = E>,
{
    Consumed { f, e }
}

struct Consumed<F> {
    f: F,
    e: ErrorKind,
}

impl<I, F> Parser<I> for Consumed<F>
where
    I: Input,
    F: Parser<I>,
{
    type Output = <F as Parser<I>>::Output;
    type Error = <F as Parser<I>>::Error;

    fn process<OM: OutputMode>(&mut self, i: I) -> PResult<OM, I, Self::Output, Self::Error> {
        let (i, o) = self.f.process::<OM>(i)?;

        if i.input_len() != 0 {
            return Err(Err::Error(OM::Error::bind(|| {
                <F as Parser<I>>::Error::from_error_kind(i, self.e)
            })));
        }

        Ok((i, o))
    }
}
