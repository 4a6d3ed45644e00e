#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "nmea-v2-3")]
use crate::sentences::FaaMode;
use crate::{self as nmea_dispatch, FieldMap, Position, Timestamp, assign};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6 7
///         |       | |        | |         | |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a,m*hh<CR><LF>
/// ```
///
/// Field 7, the FAA mode, is only decoded with the `nmea-v2-3` feature.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq, FieldMap)]
pub struct GLL {
    #[nmea(at(0, assign::position), at(1, assign::cardinal))]
    pub latitude: Position,
    #[nmea(at(2, assign::position), at(3, assign::cardinal))]
    pub longitude: Position,
    #[nmea(at(4, assign::time))]
    /// Fix time in UTC
    pub time: Timestamp,
    #[nmea(at(5, assign::flag))]
    /// Status, `A` is valid
    pub valid: bool,
    #[cfg(feature = "nmea-v2-3")]
    #[cfg_attr(docsrs, doc(cfg(feature = "nmea-v2-3")))]
    #[nmea(at(6, assign::value))]
    /// FAA Mode Indicator
    pub faa_mode: Option<FaaMode>,
}
