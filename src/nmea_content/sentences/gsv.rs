#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Fields, NmeaDecode,
    nmea_content::SatInfo,
};

/// GSV - Satellites in View
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...,x*hh<CR><LF>
/// ```
///
/// A single sentence carries at most four satellites. The full list for a
/// multi-part message is reassembled by
/// [`GsvAccumulator`](crate::GsvAccumulator).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GSV {
    /// Total number of GSV sentences to be transmitted in this group
    pub total_messages: u8,
    /// Sentence number of this GSV message within current group, 1-based
    pub message_number: u8,
    /// Total number of satellites in view
    pub satellites_in_view: u8,
    /// Satellites carried by this sentence
    pub satellites: heapless::Vec<SatInfo, 4>,
}

impl NmeaDecode for GSV {
    fn decode(fields: &mut Fields<'_>) -> Result<Self, Error> {
        let total_messages = fields.next_field()?;
        let message_number = fields.next_field()?;
        let satellites_in_view = fields.next_field()?;

        // Four fields per satellite; a trailing signal ID does not start a new entry.
        let count = ((fields.remaining() + 2) / 4).min(4);
        let satellites = (0..count)
            .map(|_| SatInfo::decode(fields))
            .collect::<Result<_, _>>()?;

        Ok(GSV {
            total_messages,
            message_number,
            satellites_in_view,
            satellites,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;

    fn decode(line: &str) -> Result<GSV, Error> {
        GSV::decode(&mut tokenize(line)?.fields())
    }

    #[test]
    fn test_decode_gsv() {
        let gsv = decode("$GPGSV,4,1,14,25,15,175,30,14,80,041,,19,38,259,14,01,52,223,18*76")
            .unwrap();

        assert_eq!(gsv.total_messages, 4);
        assert_eq!(gsv.message_number, 1);
        assert_eq!(gsv.satellites_in_view, 14);
        assert_eq!(
            gsv.satellites.as_slice(),
            [
                SatInfo::new(25, 15, 175, 30),
                SatInfo::new(14, 80, 41, 0),
                SatInfo::new(19, 38, 259, 14),
                SatInfo::new(1, 52, 223, 18),
            ]
        );
    }

    #[test]
    fn test_decode_last_gsv_part() {
        let gsv = decode("$GPGSV,4,4,14,07,01,181,,15,25,135,*76").unwrap();

        assert_eq!(gsv.message_number, 4);
        assert_eq!(
            gsv.satellites.as_slice(),
            [SatInfo::new(7, 1, 181, 0), SatInfo::new(15, 25, 135, 0)]
        );
    }

    #[test]
    fn test_decode_gsv_entry_counts() {
        let cases: [(&[&str], usize); 6] = [
            (&["1", "1", "00"], 0),
            (&["1", "1", "01", "05", "45", "120", "38"], 1),
            (&["1", "1", "01", "05", "45", "120", "38", "1"], 1),
            (&["1", "1", "01", "05", "45", "120"], 1),
            (&["1", "1", "01", "05", "45", "120", "", "08", ""], 2),
            (
                &[
                    "3", "1", "11", "03", "03", "111", "00", "04", "15", "270", "00", "06", "01",
                    "010", "00", "13", "06", "292", "00", "1",
                ],
                4,
            ),
        ];

        for (raw, expected) in cases {
            let gsv = GSV::decode_fields(raw);
            assert!(gsv.is_ok(), "Failed: {raw:?}\n\t{gsv:?}");
            assert_eq!(gsv.unwrap().satellites.len(), expected, "fields: {raw:?}");
        }
    }

    #[test]
    fn test_decode_gsv_bad_entry() {
        let result = GSV::decode_fields(&["1", "1", "01", "05", "4x", "120", "38"]);
        assert_eq!(
            result,
            Err(Error::InvalidField {
                index: 4,
                value: "4x".to_owned()
            })
        );
    }
}
