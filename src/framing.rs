//! # NMEA 0183 Framing
//!
//! Structural and checksum validation of raw sentences, plus the cropping and
//! comma-splitting that turn a validated sentence into its data fields.
//!
//! A sentence has the form `$TTWWW,D1,D2,...,Dn*CC\r\n`: a `$`, a 2-letter talker ID, a
//! 3-letter type word, comma-separated data fields, an optional `*` followed by two hex
//! digits of checksum, and a mandatory CRLF. The whole sentence is at most 83 bytes.
//!
//! Nothing here mutates the caller's buffer: fields are returned as slices borrowing
//! from the input.

use nom::{Parser, error::ErrorKind, number::complete::hex_u32};

use crate::{ValidationError, parse::consumed};

/// Minimum length of a framed sentence (`$TTWWW,\r\n`).
pub const MIN_LENGTH: usize = 9;

/// Maximum length of a framed sentence, CRLF included.
pub const MAX_LENGTH: usize = 83;

/// Length of the talker ID prefix (`GP`, `GN`, ...).
pub const TALKER_LENGTH: usize = 2;

/// Length of the sentence type word (`GGA`, `RMC`, ...).
pub const TYPE_WORD_LENGTH: usize = 3;

/// Upper bound on the number of fields a sentence is split into.
///
/// A sentence capped at 83 bytes can never reach this; fields beyond it are dropped.
pub const MAX_FIELDS: usize = 255;

/// Offset of the first data byte: `$`, talker, type word and the header comma.
pub(crate) const DATA_OFFSET: usize = TALKER_LENGTH + TYPE_WORD_LENGTH + 2;

/// Defines how sentence checksums are handled.
///
/// A checksum is the two-digit hexadecimal `*CC` suffix holding the XOR of every byte
/// between the `$` prefix and the `*` delimiter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumMode {
    /// Checksums are not verified.
    Ignore,

    #[default]
    /// The checksum is verified when one is present.
    ///
    /// Sentences without a `*CC` suffix are accepted.
    Optional,

    /// The checksum must be present and correct.
    Required,
}

/// Calculates the NMEA 0183 checksum of the given content.
///
/// The checksum is the XOR of every byte of `input`, which must already exclude the
/// `$` prefix and the `*` delimiter.
///
/// # Examples
///
/// ```rust
/// use nmea_dispatch::checksum;
///
/// assert_eq!(checksum(b"GPGGA,123456,data"), 0x41);
/// ```
pub fn checksum(input: impl AsRef<[u8]>) -> u8 {
    input
        .as_ref()
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// Calculates the checksum of a raw sentence.
///
/// Covers every byte after a leading `$` up to, but excluding, the first `*` or `\r`
/// (or the end of the input).
///
/// # Examples
///
/// ```rust
/// use nmea_dispatch::get_checksum;
///
/// let sentence = b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n";
/// assert_eq!(get_checksum(sentence), 0x47);
/// ```
pub fn get_checksum(sentence: &[u8]) -> u8 {
    let body = sentence.strip_prefix(b"$").unwrap_or(sentence);
    let end = body
        .iter()
        .position(|&byte| byte == b'*' || byte == b'\r')
        .unwrap_or(body.len());

    checksum(&body[..end])
}

/// Returns `true` when the sentence carries a `*CC` checksum before its CRLF.
///
/// ```rust
/// use nmea_dispatch::has_checksum;
///
/// assert!(has_checksum(b"$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48\r\n"));
/// assert!(!has_checksum(b"$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K\r\n"));
/// ```
pub fn has_checksum(sentence: &[u8]) -> bool {
    sentence
        .len()
        .checked_sub(5)
        .is_some_and(|star| sentence[star] == b'*')
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// ```rust
/// use nmea_dispatch::format_checksum;
///
/// assert_eq!(format_checksum(0x41), "41");
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}

/// Reads the two hex digits following `*`, in either case.
fn embedded_checksum(digits: &[u8]) -> Option<u8> {
    let result: nom::IResult<&[u8], u32> = consumed(hex_u32, ErrorKind::HexDigit).parse(digits);

    match result {
        Ok((_, value)) if digits.len() == 2 => u8::try_from(value).ok(),
        _ => None,
    }
}

/// Validates the framing of a raw sentence.
///
/// Rules are checked in order and the first violation is returned:
///
/// 1. at least [`MIN_LENGTH`] bytes,
/// 2. at most [`MAX_LENGTH`] bytes,
/// 3. starts with `$`,
/// 4. ends with `\r\n`,
/// 5. the 5-byte talker and type header is upper-case ASCII letters,
/// 6. the header is followed by `,`,
/// 7. every data byte is in `' '..='z'` and is not `$`,
/// 8. the checksum, according to `mode`.
///
/// The calculated checksum is always [`get_checksum`], so it covers the content up to
/// the first `*`; a `*` inside the data ends the checksummed region.
///
/// # Examples
///
/// ```rust
/// use nmea_dispatch::{ChecksumMode, ValidationError, validate};
///
/// let good = b"$GPGLL,4916.45,N,12311.12,W,225444,A*31\r\n";
/// assert_eq!(validate(good, ChecksumMode::Required), Ok(()));
///
/// let corrupt = b"$GPGLL,4916.45,N,12311.12,W,225444,A*32\r\n";
/// assert!(matches!(
///     validate(corrupt, ChecksumMode::Optional),
///     Err(ValidationError::BadChecksum { .. })
/// ));
/// assert_eq!(validate(corrupt, ChecksumMode::Ignore), Ok(()));
/// ```
pub fn validate(sentence: &[u8], mode: ChecksumMode) -> Result<(), ValidationError> {
    let length = sentence.len();

    if length < MIN_LENGTH {
        return Err(ValidationError::TooShort);
    }
    if length > MAX_LENGTH {
        return Err(ValidationError::TooLong);
    }
    if sentence[0] != b'$' {
        return Err(ValidationError::BadStart);
    }
    if !sentence.ends_with(b"\r\n") {
        return Err(ValidationError::BadTermination);
    }
    if !sentence[1..DATA_OFFSET - 1]
        .iter()
        .all(u8::is_ascii_uppercase)
    {
        return Err(ValidationError::BadHeader);
    }
    if sentence[DATA_OFFSET - 1] != b',' {
        return Err(ValidationError::MissingHeaderComma);
    }
    if let Some(offset) = sentence[DATA_OFFSET..length - 2]
        .iter()
        .position(|&byte| !(b' '..=b'z').contains(&byte) || byte == b'$')
    {
        return Err(ValidationError::InvalidCharacter {
            offset: DATA_OFFSET + offset,
        });
    }

    match mode {
        ChecksumMode::Ignore => Ok(()),
        _ if has_checksum(sentence) => {
            let expected = get_checksum(sentence);
            let found = embedded_checksum(&sentence[length - 4..length - 2]);

            if found == Some(expected) {
                Ok(())
            } else {
                Err(ValidationError::BadChecksum { expected, found })
            }
        }
        ChecksumMode::Optional => Ok(()),
        ChecksumMode::Required => Err(ValidationError::MissingChecksum),
    }
}

/// Crops a validated sentence down to its data fields.
///
/// Drops the `$TTWWW,` header, the CRLF, and the `*CC` checksum when present.
pub fn crop(sentence: &[u8]) -> &[u8] {
    let end = if has_checksum(sentence) {
        sentence.len() - 5
    } else {
        sentence.len().saturating_sub(2)
    };

    sentence.get(DATA_OFFSET..end).unwrap_or_default()
}

/// Splits cropped sentence data on commas.
///
/// A sentence with `n` commas yields `n + 1` fields, empty ones included. At most
/// [`MAX_FIELDS`] fields are returned; any beyond are dropped.
///
/// ```rust
/// use nmea_dispatch::split_fields;
///
/// let fields = split_fields("054.7,T,,M");
/// assert_eq!(fields.as_slice(), &["054.7", "T", "", "M"]);
/// ```
pub fn split_fields(data: &str) -> heapless::Vec<&str, MAX_FIELDS> {
    data.split(',').take(MAX_FIELDS).collect()
}
