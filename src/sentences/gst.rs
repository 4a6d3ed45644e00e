#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea_dispatch, FieldMap, Timestamp, assign};

/// GST - GPS Pseudorange Noise Statistics
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gst_gps_pseudorange_noise_statistics>
///
/// ```text
///         1         2 3 4 5 6 7 8
///         |         | | | | | | |
///  $--GST,hhmmss.ss,x,x,x,x,x,x,x*hh<CR><LF>
/// ```
///
/// Deviations are in meters, the orientation in degrees from true north.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq, FieldMap)]
pub struct GST {
    #[nmea(at(0, assign::time))]
    /// UTC time of the associated GGA fix
    pub time: Timestamp,
    #[nmea(at(1, assign::value))]
    /// Total RMS standard deviation of ranges inputs to the navigation solution
    pub rms_deviation: Option<f32>,
    #[nmea(at(2, assign::value))]
    /// Standard deviation of the semi-major axis of the error ellipse
    pub semi_major_deviation: Option<f32>,
    #[nmea(at(3, assign::value))]
    /// Standard deviation of the semi-minor axis of the error ellipse
    pub semi_minor_deviation: Option<f32>,
    #[nmea(at(4, assign::value))]
    /// Orientation of the semi-major axis of the error ellipse
    pub semi_major_orientation: Option<f32>,
    #[nmea(at(5, assign::value))]
    pub latitude_error_deviation: Option<f32>,
    #[nmea(at(6, assign::value))]
    pub longitude_error_deviation: Option<f32>,
    #[nmea(at(7, assign::value))]
    pub altitude_error_deviation: Option<f32>,
}
