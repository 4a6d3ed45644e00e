#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea_dispatch, FieldMap, Position, Timestamp, assign, sentences::Quality};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq, FieldMap)]
pub struct GGA {
    #[nmea(at(0, assign::time))]
    /// Fix time in UTC
    pub time: Timestamp,
    #[nmea(at(1, assign::position), at(2, assign::cardinal))]
    pub latitude: Position,
    #[nmea(at(3, assign::position), at(4, assign::cardinal))]
    pub longitude: Position,
    #[nmea(at(5, assign::value))]
    /// GPS Quality Indicator
    pub fix_quality: Option<Quality>,
    #[nmea(at(6, assign::value))]
    /// Number of satellites in use
    pub satellites: Option<u8>,
    #[nmea(at(7, assign::value))]
    /// Horizontal Dilution of Precision
    pub hdop: Option<f32>,
    #[nmea(at(8, assign::value))]
    /// Antenna altitude above/below mean sea level (geoid)
    pub altitude: Option<f32>,
    #[nmea(at(9, assign::value))]
    pub altitude_unit: Option<char>,
    #[nmea(at(10, assign::value))]
    /// Geoidal separation, the difference between the WGS-84 earth ellipsoid and mean
    /// sea level; negative values indicate that the geoid is below the ellipsoid
    pub undulation: Option<f32>,
    #[nmea(at(11, assign::value))]
    pub undulation_unit: Option<char>,
    #[nmea(at(12, assign::value))]
    /// Age of Differential GPS data in seconds
    pub dgps_age: Option<f32>,
    #[nmea(at(13, assign::value))]
    /// Differential reference station ID
    pub dgps_station: Option<u16>,
}
