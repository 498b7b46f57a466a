#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime, Time};

use crate::{
    Error, Fields, NmeaDecode,
    nmea_content::{
        FaaMode,
        parse::{latitude, longitude, magnetic_variation, utc_timestamp},
    },
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10 1112
///         |         | |       | |        |  |   |   |    |  | |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m*hh<CR><LF>
/// ```
///
/// The date and time fields are combined into one UTC timestamp. A missing
/// date anchors the time at [`ZERO_DATE`](crate::nmea_content::parse::ZERO_DATE).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct RMC {
    /// Fix date and time in UTC
    pub timestamp: OffsetDateTime,
    /// Status, `A` for active or `V` for void, `None` when the field is empty
    pub status: Option<char>,
    /// Latitude in degrees, south negative
    pub latitude: f64,
    /// Longitude in degrees, west negative
    pub longitude: f64,
    /// Speed over ground in knots
    pub speed: f32,
    /// Course over ground in degrees true
    pub course: f32,
    /// Magnetic variation in degrees, west negative
    pub magnetic_variation: f32,
    /// FAA Mode Indicator (NMEA 2.3 and later)
    pub faa_mode: Option<FaaMode>,
}

impl NmeaDecode for RMC {
    fn decode(fields: &mut Fields<'_>) -> Result<Self, Error> {
        let time = fields.next_optional::<Time>()?;
        let status = fields.next_optional()?;
        let latitude = latitude(fields)?;
        let longitude = longitude(fields)?;
        let speed = fields.next_field()?;
        let course = fields.next_field()?;
        let date = fields.next_optional::<Date>()?;
        let magnetic_variation = magnetic_variation(fields)?;
        let faa_mode = fields.next_optional()?;

        Ok(RMC {
            timestamp: utc_timestamp(date, time),
            status,
            latitude,
            longitude,
            speed,
            course,
            magnetic_variation,
            faa_mode,
        })
    }
}
