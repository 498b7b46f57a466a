#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, PrimitiveDateTime, Time};

use crate::{
    Error, Fields, NmeaDecode,
    nmea_content::parse::{ZERO_DATE, full_date, utc_offset},
};

/// ZDA - Time & Date - UTC, day, month, year and local time zone
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_zda_time_date_utc_day_month_year_and_local_time_zone>
///
/// ```text
///         1         2  3  4    5  6
///         |         |  |  |    |  |
///  $--ZDA,hhmmss.ss,xx,xx,xxxx,xx,xx*hh<CR><LF>
/// ```
///
/// The timestamp keeps the transmitted zone offset instead of being
/// converted to UTC. An empty or zero zone gives a UTC timestamp.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct ZDA {
    /// Date and time, tagged with the local zone offset
    pub timestamp: OffsetDateTime,
}

impl NmeaDecode for ZDA {
    fn decode(fields: &mut Fields<'_>) -> Result<Self, Error> {
        let time = fields.next_optional::<Time>()?;
        let date = full_date(fields)?;
        let offset = utc_offset(fields)?;

        let timestamp = PrimitiveDateTime::new(
            date.unwrap_or(ZERO_DATE),
            time.unwrap_or(Time::MIDNIGHT),
        )
        .assume_offset(offset);

        Ok(ZDA { timestamp })
    }
}

impl From<OffsetDateTime> for ZDA {
    fn from(timestamp: OffsetDateTime) -> Self {
        ZDA { timestamp }
    }
}

impl From<ZDA> for OffsetDateTime {
    fn from(value: ZDA) -> Self {
        value.timestamp
    }
}

#[cfg(test)]
mod tests {
    use time::{
        UtcOffset,
        macros::{date, datetime, offset, time},
    };

    use super::*;
    use crate::tokenize;

    fn decode(line: &str) -> Result<ZDA, Error> {
        ZDA::decode(&mut tokenize(line)?.fields())
    }

    #[test]
    fn test_decode_utc_zda() {
        let zda = decode("$GPZDA,162254.00,11,07,2006,00,00*63").unwrap();

        assert_eq!(zda.timestamp, datetime!(2006-07-11 16:22:54 UTC));
        assert_eq!(zda.timestamp.offset(), UtcOffset::UTC);
    }

    #[test]
    fn test_decode_zda_keeps_offset() {
        let zda = decode("$GPZDA,110003.00,27,03,2006,-5,00*7f").unwrap();

        // Equality compares instants, so check the wall clock and offset separately.
        assert_eq!(zda.timestamp.date(), date!(2006 - 03 - 27));
        assert_eq!(zda.timestamp.time(), time!(11:00:03));
        assert_eq!(zda.timestamp.offset(), offset!(-5));
        assert_eq!(zda.timestamp, datetime!(2006-03-27 16:00:03 UTC));
    }

    #[test]
    fn test_decode_zda_empty_zone() {
        let zda = decode("$GPZDA,050306,29,10,2003,,*43").unwrap();

        assert_eq!(zda.timestamp, datetime!(2003-10-29 05:03:06 UTC));
        assert_eq!(zda.timestamp.offset(), UtcOffset::UTC);
    }

    #[test]
    fn test_decode_zda_partial_fields() {
        let zda = ZDA::decode_fields(&["132502.00", "", "", "", "-03", "30"]).unwrap();
        assert_eq!(zda.timestamp.date(), ZERO_DATE);
        assert_eq!(zda.timestamp.time(), time!(13:25:02));
        assert_eq!(zda.timestamp.offset(), offset!(-3:30));

        let zda = ZDA::decode_fields(&["132502.00", "11", "", "2025", "", ""]).unwrap();
        assert_eq!(zda.timestamp.date(), ZERO_DATE);
    }

    #[test]
    fn test_decode_zda_errors() {
        let cases: [&[&str]; 3] = [
            &["132502.00", "00", "07", "2025", "", ""],
            &["132502.00", "11", "07", "2025", "+26", "00"],
            &["1325", "11", "07", "2025", "", ""],
        ];

        for raw in cases {
            let result = ZDA::decode_fields(raw);
            assert!(result.is_err(), "Decoded invalid ZDA {raw:?}: {result:?}");
        }
    }

    #[test]
    fn test_zda_from_offset_date_time() {
        let timestamp = datetime!(2025-07-11 13:25:02 +3);
        let zda = ZDA::from(timestamp);
        assert_eq!(OffsetDateTime::from(zda), timestamp);
    }
}
