//! # Sentence Records
//!
//! Strongly-typed records for the built-in sentence types, and the [`FieldMap`] trait
//! through which the parse engine fills them one field at a time.
//!
//! Each record declares which member every field index decodes into with
//! `#[nmea(at(index, setter))]`; the `FieldMap` derive turns those attributes into the
//! record's field table and dispatch switch.

mod gga;
mod gll;
mod gst;
mod rmc;
mod vtg;

pub use gga::GGA;
pub use gll::GLL;
pub use gst::GST;
pub use rmc::RMC;
pub use vtg::VTG;

use crate::{FieldError, SentenceType, parse::field_enum};

/// One entry of a record's field table: field `index` decodes into `member`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSlot {
    pub index: usize,
    pub member: &'static str,
}

/// Per-field decoding of a sentence record.
///
/// Usually derived:
///
/// ```rust
/// use nmea_dispatch::{FieldMap, assign};
///
/// #[derive(Default, FieldMap)]
/// struct Depth {
///     #[nmea(at(0, assign::value))]
///     feet: Option<f32>,
///     #[nmea(at(2, assign::value))]
///     meters: Option<f32>,
/// }
///
/// let mut depth = Depth::default();
/// depth.parse_field(2, "12.5").unwrap();
/// assert_eq!(depth.meters, Some(12.5));
///
/// // Indices without a slot are accepted and ignored.
/// assert_eq!(depth.parse_field(1, "f"), Ok(()));
/// assert_eq!(Depth::FIELDS.len(), 2);
/// ```
pub trait FieldMap: Default {
    /// The field table, ordered by index.
    const FIELDS: &'static [FieldSlot];

    /// Decodes field `index` into its member.
    ///
    /// Indices absent from [`FIELDS`](FieldMap::FIELDS) succeed without effect.
    fn parse_field(&mut self, index: usize, field: &str) -> Result<(), FieldError>;
}

/// A record that can be produced by the parse engine.
///
/// Implemented for every variant of [`Sentence`]; ties a record type to its
/// [`SentenceType`] and to its place in the `Sentence` enum.
pub trait SentenceRecord: FieldMap + Into<Sentence> {
    const KIND: SentenceType;

    /// Borrows the record back out of a [`Sentence`] of the same kind.
    fn from_sentence_mut(sentence: &mut Sentence) -> Option<&mut Self>;
}

macro_rules! sentences {
    ($($(#[$meta:meta])* $variant:ident),* $(,)?) => {
        /// A parsed record of any built-in sentence type.
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, PartialEq)]
        pub enum Sentence {
            $($(#[$meta])* $variant($variant),)*
        }

        impl Sentence {
            /// The sentence type of the record held.
            pub fn kind(&self) -> SentenceType {
                match self {
                    $(Sentence::$variant(_) => SentenceType::$variant,)*
                }
            }

            /// The field table of the record held.
            pub fn fields(&self) -> &'static [FieldSlot] {
                match self {
                    $(Sentence::$variant(_) => <$variant as FieldMap>::FIELDS,)*
                }
            }
        }

        $(
            impl From<$variant> for Sentence {
                fn from(record: $variant) -> Self {
                    Sentence::$variant(record)
                }
            }

            impl SentenceRecord for $variant {
                const KIND: SentenceType = SentenceType::$variant;

                fn from_sentence_mut(sentence: &mut Sentence) -> Option<&mut Self> {
                    match sentence {
                        Sentence::$variant(record) => Some(record),
                        _ => None,
                    }
                }
            }
        )*
    };
}

sentences! {
    /// Global Positioning System Fix Data
    GGA,
    /// Geographic Position - Latitude/Longitude
    GLL,
    /// Recommended Minimum Navigation Information
    RMC,
    /// GPS Pseudorange Noise Statistics
    GST,
    /// Track made good and Ground speed
    VTG,
}

field_enum! {
    /// Quality of the GPS fix
    ///
    /// Variants are declared in indicator order, so `quality as u8` is the digit sent.
    pub enum Quality {
        /// 0 - Fix not available
        '0' => NoFix,
        /// 1 - GPS fix
        '1' => GPSFix,
        /// 2 - Differential GPS fix
        '2' => DGPSFix,
        /// 3 - PPS fix
        '3' => PPSFix,
        /// 4 - Real Time Kinematic
        '4' => RTK,
        /// 5 - Float RTK
        '5' => FloatRTK,
        /// 6 - estimated (dead reckoning)
        '6' => Estimated,
        /// 7 - Manual input mode
        '7' => Manual,
        /// 8 - Simulation mode
        '8' => Simulation,
    }
}

#[cfg(feature = "nmea-v2-3")]
field_enum! {
    /// FAA Mode Indicator
    ///
    /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_sentence_mixes_and_nmea_variations>
    pub enum FaaMode {
        /// A - Autonomous mode
        'A' => Autonomous,
        /// D - Differential Mode
        'D' => Differential,
        /// E - Estimated (dead-reckoning) mode
        'E' => Estimated,
        /// F - RTK Float mode
        'F' => FloatRtk,
        /// M - Manual Input Mode
        'M' => Manual,
        /// N - Data Not Valid
        'N' => DataNotValid,
        /// R - RTK Integer mode
        'R' => FixedRtk,
        /// S - Simulated Mode
        'S' => Simulator,
    }
}
