//! # Error Types
//!
//! This module defines the error types used throughout the library: the nom-facing
//! error produced inside field decoders, the owned per-field error recorded by the
//! parse engine, and the hard failures that reject a whole sentence.

use nom::error::{ErrorKind, FromExternalError, ParseError as NomParseError};
use std::fmt;

use crate::registry::SentenceType;

/// Holds the result of the nom parsers used by the field decoders.
///
/// It depends on the input type `I`, the output type `O`, and the error type `E`
/// (by default `nom::error::Error<I>`).
///
/// The `Ok` side is a pair containing the remainder of the input and the produced
/// value. The `Err` side contains an instance of `nom::Err` wrapping [`Error`].
pub type IResult<I, O, E = nom::error::Error<I>> = nom::IResult<I, O, Error<I, E>>;

/// Errors raised by the nom parsers that decode individual fields.
#[derive(Debug, PartialEq)]
pub enum Error<I, E> {
    /// The field could not be parsed because its format was invalid.
    ///
    /// This wraps nom's standard parsing errors.
    ParsingError(E),

    /// The field was syntactically well formed but held an impossible value,
    /// such as minute 75 or month 13.
    OutOfRange(I),

    /// The field was empty where a value is required.
    InvalidField(I),
}

impl<I, E> NomParseError<I> for Error<I, E>
where
    E: NomParseError<I>,
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

/// A single field failed to decode.
///
/// Field errors are soft: the parse engine counts them in [`Record::errors`] and
/// keeps decoding the remaining fields.
///
/// [`Record::errors`]: crate::Record::errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// The decoder was handed an empty field.
    Empty,
    /// The field text did not match the expected format.
    Malformed(ErrorKind),
    /// The field decoded to a value outside its legal range.
    OutOfRange,
}

impl<I> From<nom::Err<Error<I, nom::error::Error<I>>>> for FieldError {
    fn from(err: nom::Err<Error<I, nom::error::Error<I>>>) -> Self {
        match err {
            nom::Err::Error(e) | nom::Err::Failure(e) => match e {
                Error::ParsingError(e) => FieldError::Malformed(e.code),
                Error::OutOfRange(_) => FieldError::OutOfRange,
                Error::InvalidField(_) => FieldError::Empty,
            },
            nom::Err::Incomplete(_) => FieldError::Malformed(ErrorKind::Eof),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Empty => write!(f, "empty field"),
            FieldError::Malformed(kind) => write!(f, "malformed field ({kind:?})"),
            FieldError::OutOfRange => write!(f, "field value out of range"),
        }
    }
}

impl std::error::Error for FieldError {}

/// A framing rule violated by a raw sentence.
///
/// Rules are checked in declaration order and the first violation is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Fewer than 9 bytes.
    TooShort,
    /// More than 83 bytes.
    TooLong,
    /// The first byte is not `$`.
    BadStart,
    /// The sentence does not end with `\r\n`.
    BadTermination,
    /// The 5-character talker and type header is not all upper-case letters.
    BadHeader,
    /// The header is not followed by `,`.
    MissingHeaderComma,
    /// A byte of the data region is outside `' '..='z'` or is a `$`.
    InvalidCharacter {
        /// Offset of the offending byte within the sentence
        offset: usize,
    },
    /// The embedded checksum does not match the calculated one, or is not
    /// two hexadecimal digits.
    BadChecksum {
        /// The checksum calculated from the sentence content
        expected: u8,
        /// The checksum found in the sentence, if it could be read
        found: Option<u8>,
    },
    /// [`ChecksumMode::Required`] was requested and the sentence carries no checksum.
    ///
    /// [`ChecksumMode::Required`]: crate::ChecksumMode::Required
    MissingChecksum,
}

impl ValidationError {
    /// The distinct negative code of the violated rule.
    ///
    /// ```rust
    /// use nmea_dispatch::{ChecksumMode, ValidationError, validate};
    ///
    /// let err = validate(b"$GPGGA,", ChecksumMode::Optional).unwrap_err();
    /// assert_eq!(err, ValidationError::TooShort);
    /// assert_eq!(err.code(), -1);
    /// ```
    pub fn code(&self) -> i32 {
        match self {
            ValidationError::TooShort => -1,
            ValidationError::TooLong => -2,
            ValidationError::BadStart => -3,
            ValidationError::BadTermination => -4,
            ValidationError::BadHeader => -5,
            ValidationError::MissingHeaderComma => -6,
            ValidationError::InvalidCharacter { .. } => -7,
            ValidationError::BadChecksum { .. } => -8,
            ValidationError::MissingChecksum => -9,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::TooShort => write!(f, "sentence shorter than 9 bytes"),
            ValidationError::TooLong => write!(f, "sentence longer than 83 bytes"),
            ValidationError::BadStart => write!(f, "sentence does not start with '$'"),
            ValidationError::BadTermination => write!(f, "sentence does not end with CRLF"),
            ValidationError::BadHeader => write!(f, "header is not five upper-case letters"),
            ValidationError::MissingHeaderComma => write!(f, "missing ',' after header"),
            ValidationError::InvalidCharacter { offset } => {
                write!(f, "invalid character at offset {offset}")
            }
            ValidationError::BadChecksum {
                expected,
                found: Some(found),
            } => write!(f, "checksum mismatch: expected {expected:02X}, found {found:02X}"),
            ValidationError::BadChecksum {
                expected,
                found: None,
            } => write!(f, "unreadable checksum, expected {expected:02X}"),
            ValidationError::MissingChecksum => write!(f, "sentence carries no checksum"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A sentence was rejected as a whole; no record was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The sentence failed framing validation.
    Invalid(ValidationError),
    /// The talker ID or type word matches no registered descriptor.
    UnknownType,
    /// The sentence type resolved but has no descriptor in the registry used.
    Unregistered(SentenceType),
}

impl From<ValidationError> for ParseError {
    fn from(err: ValidationError) -> Self {
        ParseError::Invalid(err)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Invalid(err) => write!(f, "invalid sentence: {err}"),
            ParseError::UnknownType => write!(f, "unknown sentence type"),
            ParseError::Unregistered(kind) => write!(f, "no descriptor registered for {kind}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

/// A descriptor could not be added to a [`Registry`](crate::Registry).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// The registry already holds its maximum number of descriptors.
    Full,
    /// A descriptor for this sentence type is already registered.
    Duplicate(SentenceType),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Full => write!(f, "registry is full"),
            RegistryError::Duplicate(kind) => write!(f, "{kind} is already registered"),
        }
    }
}

impl std::error::Error for RegistryError {}
