//! # Parse Engine
//!
//! Drives a raw sentence through validation, classification and field dispatch to
//! produce a [`Record`].

use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    ChecksumMode, ParseError, Registry, SentenceType, ValidationError,
    framing::{DATA_OFFSET, crop, split_fields, validate},
    initialize,
    sentences::Sentence,
};

/// The result of parsing one sentence.
///
/// A record is produced as soon as the sentence passes validation and resolves to a
/// registered type. Fields that failed to decode are left at their defaults and
/// counted in `errors`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Sentence type resolved from the talker ID and type word
    pub kind: SentenceType,
    /// Number of non-empty fields that failed to decode
    pub errors: u32,
    /// The decoded record, a variant matching `kind`
    pub sentence: Sentence,
}

impl Registry {
    /// Parses a raw sentence, `\r\n` included, into a record.
    ///
    /// # Errors
    ///
    /// - [`ParseError::Invalid`] when framing validation fails,
    /// - [`ParseError::UnknownType`] when no descriptor matches the header,
    /// - [`ParseError::Unregistered`] when the matched type has no descriptor
    ///   reachable by type.
    ///
    /// Field decoding failures are not errors; see [`Record::errors`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea_dispatch::{ChecksumMode, Registry, SentenceType};
    ///
    /// let registry = Registry::builtin();
    /// let record = registry
    ///     .parse(b"$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48\r\n", ChecksumMode::Required)
    ///     .unwrap();
    ///
    /// assert_eq!(record.kind, SentenceType::VTG);
    /// assert_eq!(record.errors, 0);
    /// ```
    pub fn parse(&self, sentence: &[u8], mode: ChecksumMode) -> Result<Record, ParseError> {
        if let Err(err) = validate(sentence, mode) {
            debug!("Rejected sentence: {err}");
            return Err(err.into());
        }

        let kind = self.get_type(sentence);
        if kind == SentenceType::Unknown {
            debug!(
                "Rejected sentence: unknown header {:?}",
                String::from_utf8_lossy(&sentence[1..6])
            );
            return Err(ParseError::UnknownType);
        }

        let data = core::str::from_utf8(crop(sentence)).map_err(|err| {
            ValidationError::InvalidCharacter {
                offset: DATA_OFFSET + err.valid_up_to(),
            }
        })?;
        let fields = split_fields(data);

        let Some(descriptor) = self.lookup_by_type(kind) else {
            debug!("Rejected sentence: no descriptor for {kind}");
            return Err(ParseError::Unregistered(kind));
        };

        let mut record = (descriptor.allocate)();
        (descriptor.set_default)(&mut record);

        let mut errors = 0;
        for (index, field) in fields.iter().enumerate() {
            if field.is_empty() {
                continue;
            }

            if let Err(err) = (descriptor.parse_field)(&mut record, field, index) {
                trace!("{kind} field {index} ({field:?}): {err}");
                errors += 1;
            }
        }

        Ok(Record {
            kind,
            errors,
            sentence: record,
        })
    }

    /// Releases a record through its descriptor.
    pub fn free(&self, record: Record) {
        match self.lookup_by_type(record.kind) {
            Some(descriptor) => (descriptor.free)(record.sentence),
            None => drop(record),
        }
    }
}

/// Classifies a raw sentence using the process-wide registry.
///
/// ```rust
/// use nmea_dispatch::{SentenceType, get_type};
///
/// assert_eq!(get_type(b"$GPGGA,123519\r\n"), SentenceType::GGA);
/// assert_eq!(get_type(b"$XXGGA,123519\r\n"), SentenceType::Unknown);
/// ```
pub fn get_type(sentence: &[u8]) -> SentenceType {
    initialize().get_type(sentence)
}

/// Parses a raw sentence using the process-wide registry.
///
/// See [`Registry::parse`].
pub fn parse(sentence: &[u8], mode: ChecksumMode) -> Result<Record, ParseError> {
    initialize().parse(sentence, mode)
}

/// Releases a record produced by [`parse`].
pub fn free(record: Record) {
    initialize().free(record)
}
