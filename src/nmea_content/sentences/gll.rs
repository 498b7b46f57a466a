#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    self as nmea0183_dispatch, NmeaDecode,
    nmea_content::{
        FaaMode,
        parse::{latitude, longitude, status_flag, time_of_day},
    },
};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6 7
///         |       | |        | |         | |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, NmeaDecode)]
pub struct GLL {
    #[nmea(parser(latitude))]
    /// Latitude in degrees, south negative
    pub latitude: f64,
    #[nmea(parser(longitude))]
    /// Longitude in degrees, west negative
    pub longitude: f64,
    #[nmea(parser(time_of_day))]
    /// Fix time in UTC, anchored at the zero date
    pub taken: OffsetDateTime,
    #[nmea(parser(status_flag))]
    /// `true` when the status is `A` (data valid)
    pub active: bool,
    /// FAA Mode Indicator (NMEA 2.3 and later)
    pub faa_mode: Option<FaaMode>,
}
