#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "nmea-v2-3")]
use crate::sentences::FaaMode;
use crate::{self as nmea_dispatch, Cardinal, FieldMap, Position, Timestamp, assign};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///                                                            12
///         1         2 3       4 5        6  7   8   9    10 11|
///         |         | |       | |        |  |   |   |    |  | |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m*hh<CR><LF>
/// ```
///
/// The time (field 1) and date (field 9) both decode into [`RMC::time`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq, FieldMap)]
pub struct RMC {
    #[nmea(at(0, assign::time), at(8, assign::date))]
    /// Fix date and time in UTC
    pub time: Timestamp,
    #[nmea(at(1, assign::flag))]
    /// Status, `A` is valid and `V` is a navigation receiver warning
    pub valid: bool,
    #[nmea(at(2, assign::position), at(3, assign::cardinal))]
    pub latitude: Position,
    #[nmea(at(4, assign::position), at(5, assign::cardinal))]
    pub longitude: Position,
    #[nmea(at(6, assign::value))]
    /// Speed over ground in knots
    pub speed: Option<f32>,
    #[nmea(at(7, assign::value))]
    /// Track made good, degrees true
    pub track: Option<f32>,
    #[nmea(at(9, assign::value))]
    /// Magnetic variation in degrees
    pub magnetic_variation: Option<f32>,
    #[nmea(at(10, assign::direction))]
    /// Direction of the magnetic variation, east or west
    pub variation_direction: Cardinal,
    #[cfg(feature = "nmea-v2-3")]
    #[cfg_attr(docsrs, doc(cfg(feature = "nmea-v2-3")))]
    #[nmea(at(11, assign::value))]
    /// FAA Mode Indicator
    pub faa_mode: Option<FaaMode>,
}

impl RMC {
    /// Magnetic variation with west negative.
    pub fn signed_variation(&self) -> Option<f32> {
        let variation = self.magnetic_variation?;
        match self.variation_direction {
            Cardinal::West => Some(-variation),
            _ => Some(variation),
        }
    }
}
