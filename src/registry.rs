//! # Sentence Registry
//!
//! A [`Descriptor`] describes one sentence type: its type word, the talker IDs it is
//! accepted from, and the functions the parse engine calls to create and fill its
//! record. A [`Registry`] is a bounded, ordered collection of descriptors; lookups
//! return the first match.
//!
//! The built-in descriptors live in the static [`BUILTIN`] table, and [`initialize`]
//! hands out a process-wide registry holding all of them.

use std::{fmt, sync::OnceLock};

use nom::error::ErrorKind;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    FieldError, RegistryError,
    framing::{TALKER_LENGTH, TYPE_WORD_LENGTH},
    sentences::{GGA, GLL, GST, RMC, Sentence, SentenceRecord, VTG},
};

/// Maximum number of descriptors a [`Registry`] holds.
pub const MAX_DESCRIPTORS: usize = 8;

/// Talker IDs accepted by the built-in descriptors, two characters each.
const GNSS_TALKERS: &str = "GPGNGLGAGB";

/// Identifies a sentence type.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentenceType {
    /// The sentence matches no registered descriptor
    #[default]
    Unknown,
    GGA,
    GLL,
    RMC,
    GST,
    VTG,
}

impl fmt::Display for SentenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SentenceType::Unknown => "UNKNOWN",
            SentenceType::GGA => "GGA",
            SentenceType::GLL => "GLL",
            SentenceType::RMC => "RMC",
            SentenceType::GST => "GST",
            SentenceType::VTG => "VTG",
        };
        f.write_str(name)
    }
}

/// Static description of a sentence type.
///
/// The four function pointers form the record lifecycle driven by
/// [`Registry::parse`]: `allocate` creates a record, `set_default` resets it,
/// `parse_field` decodes one field into it, and `free` releases it.
#[derive(Debug)]
pub struct Descriptor {
    pub kind: SentenceType,
    /// The 3-letter type word, e.g. `GGA`
    pub type_word: &'static str,
    /// Accepted talker IDs, concatenated two characters at a time (`"GPGN"`)
    pub talkers: &'static str,
    pub allocate: fn() -> Sentence,
    pub set_default: fn(&mut Sentence),
    pub parse_field: fn(&mut Sentence, &str, usize) -> Result<(), FieldError>,
    pub free: fn(Sentence),
}

impl Descriptor {
    /// Builds the descriptor of record type `T`.
    ///
    /// ```rust
    /// use nmea_dispatch::{Descriptor, Registry, SentenceType, sentences::GGA};
    ///
    /// static GGA_GPS_ONLY: Descriptor = Descriptor::of::<GGA>("GGA", "GP");
    ///
    /// let mut registry = Registry::new();
    /// registry.register(&GGA_GPS_ONLY).unwrap();
    ///
    /// assert_eq!(registry.get_type(b"$GPGGA,\r\n"), SentenceType::GGA);
    /// assert_eq!(registry.get_type(b"$GNGGA,\r\n"), SentenceType::Unknown);
    /// ```
    pub const fn of<T: SentenceRecord>(type_word: &'static str, talkers: &'static str) -> Self {
        Self {
            kind: T::KIND,
            type_word,
            talkers,
            allocate: allocate::<T>,
            set_default: set_default::<T>,
            parse_field: parse_field::<T>,
            free: drop::<Sentence>,
        }
    }

    /// Whether `talker` is one of the accepted talker IDs.
    ///
    /// Matching is on two-character boundaries: `"GPGN"` accepts `GP` and `GN` but
    /// not `PG`.
    pub fn accepts_talker(&self, talker: &[u8]) -> bool {
        talker.len() == TALKER_LENGTH
            && self
                .talkers
                .as_bytes()
                .chunks_exact(TALKER_LENGTH)
                .any(|accepted| accepted == talker)
    }

    /// Whether the talker ID and type word of a raw sentence select this descriptor.
    pub fn matches(&self, sentence: &[u8]) -> bool {
        let talker = sentence.get(1..1 + TALKER_LENGTH);
        let word = sentence.get(1 + TALKER_LENGTH..1 + TALKER_LENGTH + TYPE_WORD_LENGTH);

        match (talker, word) {
            (Some(talker), Some(word)) => {
                word == self.type_word.as_bytes() && self.accepts_talker(talker)
            }
            _ => false,
        }
    }
}

fn allocate<T: SentenceRecord>() -> Sentence {
    T::default().into()
}

fn set_default<T: SentenceRecord>(sentence: &mut Sentence) {
    *sentence = T::default().into();
}

fn parse_field<T: SentenceRecord>(
    sentence: &mut Sentence,
    field: &str,
    index: usize,
) -> Result<(), FieldError> {
    match T::from_sentence_mut(sentence) {
        Some(record) => record.parse_field(index, field),
        None => Err(FieldError::Malformed(ErrorKind::Tag)),
    }
}

/// The built-in descriptors, in lookup order.
pub static BUILTIN: [Descriptor; 5] = [
    Descriptor::of::<GLL>("GLL", GNSS_TALKERS),
    Descriptor::of::<GGA>("GGA", GNSS_TALKERS),
    Descriptor::of::<RMC>("RMC", GNSS_TALKERS),
    Descriptor::of::<GST>("GST", GNSS_TALKERS),
    Descriptor::of::<VTG>("VTG", GNSS_TALKERS),
];

/// An ordered, bounded collection of sentence descriptors.
///
/// Most callers use the process-wide registry from [`initialize`] through the
/// crate-level [`parse`](crate::parse) and [`get_type`](crate::get_type). A separate
/// registry restricts or extends the set of accepted sentences.
#[derive(Debug, Default)]
pub struct Registry {
    descriptors: heapless::Vec<&'static Descriptor, MAX_DESCRIPTORS>,
}

impl Registry {
    /// An empty registry.
    pub const fn new() -> Self {
        Self {
            descriptors: heapless::Vec::new(),
        }
    }

    /// A registry holding the [`BUILTIN`] descriptors.
    pub fn builtin() -> Self {
        Self {
            descriptors: BUILTIN.iter().collect(),
        }
    }

    /// Appends a descriptor.
    ///
    /// Fails without modifying the registry when it is full or already holds a
    /// descriptor of the same sentence type.
    pub fn register(&mut self, descriptor: &'static Descriptor) -> Result<(), RegistryError> {
        if self.lookup_by_type(descriptor.kind).is_some() {
            return Err(RegistryError::Duplicate(descriptor.kind));
        }

        self.descriptors
            .push(descriptor)
            .map_err(|_| RegistryError::Full)
    }

    /// The registered descriptors, in lookup order.
    pub fn descriptors(&self) -> impl Iterator<Item = &'static Descriptor> + '_ {
        self.descriptors.iter().copied()
    }

    pub fn lookup_by_type(&self, kind: SentenceType) -> Option<&'static Descriptor> {
        self.descriptors().find(|descriptor| descriptor.kind == kind)
    }

    /// The first descriptor whose type word and talker list match the sentence.
    ///
    /// Only the header is inspected; the sentence need not be validated.
    pub fn lookup_by_sentence(&self, sentence: &[u8]) -> Option<&'static Descriptor> {
        self.descriptors()
            .find(|descriptor| descriptor.matches(sentence))
    }

    /// Classifies a raw sentence by its talker ID and type word.
    ///
    /// Returns [`SentenceType::Unknown`] when no descriptor matches, including for
    /// sentences too short to hold a header.
    pub fn get_type(&self, sentence: &[u8]) -> SentenceType {
        self.lookup_by_sentence(sentence)
            .map_or(SentenceType::Unknown, |descriptor| descriptor.kind)
    }
}

/// The process-wide registry holding the [`BUILTIN`] descriptors.
///
/// Built on first use; every later call returns the same registry, so concurrent
/// first calls are safe.
pub fn initialize() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(Registry::builtin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order() {
        let kinds: Vec<_> = Registry::builtin()
            .descriptors()
            .map(|descriptor| descriptor.kind)
            .collect();

        assert_eq!(
            kinds,
            [
                SentenceType::GLL,
                SentenceType::GGA,
                SentenceType::RMC,
                SentenceType::GST,
                SentenceType::VTG
            ]
        );
    }

    #[test]
    fn test_talkers_match_on_boundaries() {
        let descriptor = &BUILTIN[0];
        for talker in [b"GP", b"GN", b"GL", b"GA", b"GB"] {
            assert!(descriptor.accepts_talker(talker));
        }
        assert!(!descriptor.accepts_talker(b"PG"));
        assert!(!descriptor.accepts_talker(b"NG"));
        assert!(!descriptor.accepts_talker(b"XX"));
        assert!(!descriptor.accepts_talker(b"G"));
    }

    #[test]
    fn test_get_type() {
        let registry = Registry::builtin();
        assert_eq!(registry.get_type(b"$GPGGA,1\r\n"), SentenceType::GGA);
        assert_eq!(registry.get_type(b"$GNRMC,1\r\n"), SentenceType::RMC);
        assert_eq!(registry.get_type(b"$GBVTG,1\r\n"), SentenceType::VTG);
        assert_eq!(registry.get_type(b"$XXGGA,1\r\n"), SentenceType::Unknown);
        assert_eq!(registry.get_type(b"$GPZDA,1\r\n"), SentenceType::Unknown);
        assert_eq!(registry.get_type(b"$GP"), SentenceType::Unknown);
        assert_eq!(registry.get_type(b""), SentenceType::Unknown);
    }

    #[test]
    fn test_register() {
        let mut registry = Registry::new();
        assert_eq!(registry.get_type(b"$GPGGA,1\r\n"), SentenceType::Unknown);

        registry.register(&BUILTIN[1]).unwrap();
        assert_eq!(registry.get_type(b"$GPGGA,1\r\n"), SentenceType::GGA);
        assert_eq!(
            registry.register(&BUILTIN[1]),
            Err(RegistryError::Duplicate(SentenceType::GGA))
        );
        assert!(registry.lookup_by_type(SentenceType::RMC).is_none());
    }

    #[test]
    fn test_register_full() {
        static EXTRA: [Descriptor; MAX_DESCRIPTORS] =
            [const { Descriptor::of::<GGA>("GGA", "GP") }; MAX_DESCRIPTORS];

        let mut registry = Registry::new();
        for descriptor in &EXTRA {
            registry.descriptors.push(descriptor).unwrap();
        }
        assert_eq!(registry.register(&BUILTIN[0]), Err(RegistryError::Full));
    }

    #[test]
    fn test_initialize_is_shared() {
        let first = initialize();
        let second = initialize();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.descriptors().count(), BUILTIN.len());
    }

    #[test]
    fn test_lifecycle_functions() {
        let descriptor = initialize().lookup_by_type(SentenceType::GGA).unwrap();

        let mut sentence = (descriptor.allocate)();
        assert_eq!(sentence.kind(), SentenceType::GGA);

        (descriptor.parse_field)(&mut sentence, "08", 6).unwrap();
        match &sentence {
            Sentence::GGA(gga) => assert_eq!(gga.satellites, Some(8)),
            other => panic!("unexpected record {other:?}"),
        }

        (descriptor.set_default)(&mut sentence);
        assert_eq!(sentence, Sentence::GGA(GGA::default()));

        let mut mismatched = Sentence::VTG(VTG::default());
        assert!((descriptor.parse_field)(&mut mismatched, "08", 6).is_err());

        (descriptor.free)(sentence);
    }
}
