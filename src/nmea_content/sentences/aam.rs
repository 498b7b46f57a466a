#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_dispatch, NmeaDecode, nmea_content::parse::status_flag};

/// AAM - Waypoint Arrival Alarm
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_aam_waypoint_arrival_alarm>
///
/// ```text
///         1 2 3   4 5
///         | | |   | |
///  $--AAM,A,A,x.x,N,c--c*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq, NmeaDecode)]
pub struct AAM {
    #[nmea(parser(status_flag))]
    /// Arrival circle entered
    pub arrival_circle_entered: bool,
    #[nmea(parser(status_flag))]
    /// Perpendicular passed at waypoint
    pub perpendicular_passed: bool,
    /// Arrival circle radius
    pub arrival_radius: f32,
    /// Units of the radius, `N` for nautical miles
    pub radius_units: char,
    /// Waypoint ID
    pub waypoint_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, tokenize};

    #[test]
    fn test_decode_aam() {
        let raw = tokenize("$GPAAM,A,A,0.10,N,WPTNME*32").unwrap();
        let aam = AAM::decode(&mut raw.fields()).unwrap();

        assert_eq!(
            aam,
            AAM {
                arrival_circle_entered: true,
                perpendicular_passed: true,
                arrival_radius: 0.1,
                radius_units: 'N',
                waypoint_id: "WPTNME".to_owned(),
            }
        );
    }

    #[test]
    fn test_decode_aam_void_flags() {
        let aam = AAM::decode_fields(&["V", "V", "", "", ""]).unwrap();
        assert_eq!(aam, AAM::default());

        let result = AAM::decode_fields(&["A", "B"]);
        assert_eq!(
            result,
            Err(Error::InvalidField {
                index: 1,
                value: "B".to_owned()
            })
        );
    }
}
