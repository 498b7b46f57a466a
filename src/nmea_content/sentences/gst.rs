#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{self as nmea0183_dispatch, NmeaDecode, nmea_content::parse::time_of_day};

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
#[derive(Debug, Clone, PartialEq, NmeaDecode)]
pub struct GST {
    #[nmea(parser(time_of_day))]
    /// Time of the associated fix in UTC, anchored at the zero date
    pub timestamp: OffsetDateTime,
    /// RMS value of the standard deviation of the range inputs
    pub rms_deviation: f32,
    /// Standard deviation of the semi-major axis of the error ellipse
    pub semi_major_deviation: f32,
    /// Standard deviation of the semi-minor axis of the error ellipse
    pub semi_minor_deviation: f32,
    /// Orientation of the semi-major axis of the error ellipse
    pub semi_major_orientation: f32,
    /// Standard deviation of the latitude error
    pub latitude_deviation: f32,
    /// Standard deviation of the longitude error
    pub longitude_deviation: f32,
    /// Standard deviation of the altitude error
    pub altitude_deviation: f32,
}
