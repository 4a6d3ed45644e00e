//! # NMEA 0183 Sentence Dispatch
//!
//! This library validates raw NMEA 0183 sentences of the form
//! `$TTWWW,D1,D2,...,Dn*CC\r\n` and decodes them into typed records through a
//! table-driven registry of sentence descriptors.
//!
//! Parsing a sentence:
//! - validates its framing and, depending on the [`ChecksumMode`], its checksum,
//! - classifies it by talker ID and type word into a [`SentenceType`],
//! - splits the data into comma-separated fields and decodes each non-empty field into
//!   the record member it is mapped to.
//!
//! A field that fails to decode does not abort the parse: it is counted in
//! [`Record::errors`] and the remaining fields are still decoded.
//!
//! ## Usage
//!
//! ```rust
//! use nmea_dispatch::{ChecksumMode, SentenceType, parse, sentences::Sentence};
//!
//! let record = parse(
//!     b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n",
//!     ChecksumMode::Optional,
//! )
//! .unwrap();
//!
//! assert_eq!(record.kind, SentenceType::GGA);
//! assert_eq!(record.errors, 0);
//!
//! if let Sentence::GGA(gga) = &record.sentence {
//!     assert_eq!(gga.satellites, Some(8));
//!     assert_eq!(gga.altitude, Some(545.4));
//! }
//! ```
//!
//! ## Custom sentences
//!
//! Records are plain structs deriving [`FieldMap`](derive@FieldMap). Each member names
//! the field indices it decodes from and the setter from [`assign`] that decodes them.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for records and the types they hold.
//! - `nmea-v2-3`: decode the trailing FAA mode indicator of GLL, RMC and VTG.

pub mod assign;
pub mod decode;
mod dispatch;
mod error;
mod framing;
mod parse;
mod registry;
pub mod sentences;

pub use decode::{Cardinal, Position, Timestamp};
pub use dispatch::{Record, free, get_type, parse};
pub use error::{Error, FieldError, IResult, ParseError, RegistryError, ValidationError};
pub use framing::{
    ChecksumMode, MAX_FIELDS, MAX_LENGTH, MIN_LENGTH, checksum, crop, format_checksum,
    get_checksum, has_checksum, split_fields, validate,
};
pub use nmea_dispatch_derive::FieldMap;
pub use parse::FieldValue;
pub use registry::{BUILTIN, Descriptor, MAX_DESCRIPTORS, Registry, SentenceType, initialize};
pub use sentences::{FieldMap, FieldSlot, Sentence, SentenceRecord};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;

#[cfg(test)]
mod tests {
    mod registry;
    mod scenarios;
}
