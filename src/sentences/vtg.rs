#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "nmea-v2-3")]
use crate::sentences::FaaMode;
use crate::{self as nmea_dispatch, FieldMap, assign};

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1  2  3  4  5  6  7  8 9
///          |  |  |  |  |  |  |  | |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,m*hh<CR><LF>
/// ```
///
/// Field 9, the FAA mode, is only decoded with the `nmea-v2-3` feature.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq, FieldMap)]
pub struct VTG {
    #[nmea(at(0, assign::value))]
    /// Course over ground in degrees true
    pub track_true: Option<f32>,
    #[nmea(at(1, assign::value))]
    pub track_true_unit: Option<char>,
    #[nmea(at(2, assign::value))]
    /// Course over ground in degrees magnetic
    pub track_magnetic: Option<f32>,
    #[nmea(at(3, assign::value))]
    pub track_magnetic_unit: Option<char>,
    #[nmea(at(4, assign::value))]
    /// Speed over ground in knots
    pub speed_knots: Option<f32>,
    #[nmea(at(5, assign::value))]
    pub speed_knots_unit: Option<char>,
    #[nmea(at(6, assign::value))]
    /// Speed over ground in km/h
    pub speed_kph: Option<f32>,
    #[nmea(at(7, assign::value))]
    pub speed_kph_unit: Option<char>,
    #[cfg(feature = "nmea-v2-3")]
    #[cfg_attr(docsrs, doc(cfg(feature = "nmea-v2-3")))]
    #[nmea(at(8, assign::value))]
    /// FAA Mode Indicator
    pub faa_mode: Option<FaaMode>,
}

impl VTG {
    /// Speed over ground in knots, converted from km/h when only that was reported.
    pub fn speed_over_ground(&self) -> Option<f32> {
        self.speed_knots.or(self.speed_kph.map(|kph| kph / 1.852))
    }
}
