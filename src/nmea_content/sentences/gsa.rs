#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Fields, NmeaDecode,
    nmea_content::{FixMode, SelectionMode},
};

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                      15 16  17
///         | | |                       | |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GSA {
    /// Selection mode, `None` when the field is empty
    pub selection_mode: Option<SelectionMode>,
    /// Fix mode
    pub fix_mode: FixMode,
    /// PRN numbers of the satellites used in the fix, empty slots skipped
    pub satellites: heapless::Vec<u16, 12>,
    /// Position Dilution of Precision
    pub pdop: f32,
    /// Horizontal Dilution of Precision
    pub hdop: f32,
    /// Vertical Dilution of Precision
    pub vdop: f32,
}

impl NmeaDecode for GSA {
    fn decode(fields: &mut Fields<'_>) -> Result<Self, Error> {
        let selection_mode = fields.next_optional()?;
        let fix_mode = fields.next_field()?;

        let satellites = (0..12)
            .map(|_| fields.next_optional::<u16>())
            .filter_map(Result::transpose)
            .collect::<Result<_, _>>()?;

        Ok(GSA {
            selection_mode,
            fix_mode,
            satellites,
            pdop: fields.next_field()?,
            hdop: fields.next_field()?,
            vdop: fields.next_field()?,
        })
    }
}
