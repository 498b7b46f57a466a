#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea0183_dispatch, NmeaDecode,
    nmea_content::{FaaMode, parse::with_unit},
};

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1  2  3  4  5  6  7  8 9
///          |  |  |  |  |  |  |  | |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, NmeaDecode)]
pub struct VTG {
    #[nmea(parser(with_unit('T')))]
    /// Course over ground in degrees true
    pub true_course: f32,
    #[nmea(parser(with_unit('M')))]
    /// Course over ground in degrees magnetic
    pub magnetic_course: f32,
    #[nmea(parser(with_unit('N')))]
    /// Speed over ground in knots
    pub speed_knots: f32,
    #[nmea(parser(with_unit('K')))]
    /// Speed over ground in kilometers per hour
    pub speed_kmh: f32,
    /// FAA Mode Indicator (NMEA 2.3 and later)
    pub faa_mode: Option<FaaMode>,
}
