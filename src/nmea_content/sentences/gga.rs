use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    self as nmea0183_dispatch, NmeaDecode,
    nmea_content::{
        Quality,
        parse::{latitude, longitude, time_of_day, with_unit},
    },
};

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
#[derive(Debug, Clone, PartialEq, NmeaDecode)]
pub struct GGA {
    #[nmea(parser(time_of_day))]
    /// Fix time in UTC, anchored at the zero date
    pub taken: OffsetDateTime,
    #[nmea(parser(latitude))]
    /// Latitude in degrees, south negative
    pub latitude: f64,
    #[nmea(parser(longitude))]
    /// Longitude in degrees, west negative
    pub longitude: f64,
    /// GPS Quality Indicator
    pub quality: Quality,
    /// Number of satellites in use
    pub satellite_count: u8,
    /// Horizontal Dilution of Precision
    pub hdop: f32,
    #[nmea(parser(with_unit('M')))]
    /// Altitude above/below mean sea level (geoid) in meters
    pub altitude: f32,
    #[nmea(parser(with_unit('M')))]
    /// Geoidal separation in meters, negative when the geoid is below the WGS-84 ellipsoid
    pub geoid_height: f32,
    #[nmea(map(|age: Option<f32>| age.and_then(|sec| Duration::try_from_secs_f32(sec).ok())), parse_as(Option<f32>))]
    /// Age of Differential GPS data, `None` when DGPS is not used or the age is negative
    pub dgps_age: Option<Duration>,
    /// Differential reference station ID
    pub dgps_station: u16,
}
