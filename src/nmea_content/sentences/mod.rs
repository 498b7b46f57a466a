mod aam;
mod gga;
mod gll;
mod gsa;
mod gst;
mod gsv;
mod markers;
mod rmc;
mod vtg;
mod zda;

pub use aam::AAM;
pub use gga::GGA;
pub use gll::GLL;
pub use gsa::GSA;
pub use gst::GST;
pub use gsv::GSV;
pub use markers::{
    ALM, APA, APB, BOD, BWC, DTM, GRS, MSK, MSS, RMA, RMB, RTE, STN, TRF, VBW, WCV, WPL, XTC,
    XTE, ZTG,
};
pub use rmc::RMC;
pub use vtg::VTG;
pub use zda::ZDA;

use std::fmt;

use nom::{character::complete::anychar, combinator::map_opt};

use crate::{self as nmea0183_dispatch, Error, Fields, NmeaDecode, NmeaField, RawSentence, parse_with, tokenize};

macro_rules! sentences {
    ($( $(#[$meta:meta])* $code:ident ),* $(,)?) => {
        /// A decoded sentence, one variant per supported sentence type.
        ///
        /// Each variant wraps the record of the same name. Sentence types
        /// without a field layout decode to empty marker records.
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, PartialEq)]
        pub enum Sentence {
            $(
                $(#[$meta])*
                $code($code),
            )*
        }

        /// The sentence type codes that have a decoder.
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum SentenceType {
            $(
                $(#[$meta])*
                $code,
            )*
        }

        impl SentenceType {
            /// Every supported sentence type, in alphabetical order.
            pub const ALL: &'static [SentenceType] = &[$(SentenceType::$code),*];

            /// Looks up a sentence type code such as `"RMC"`.
            ///
            /// Returns `None` for codes without a decoder.
            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $(stringify!($code) => Some(Self::$code),)*
                    _ => None,
                }
            }

            /// The three-letter code of this sentence type.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$code => stringify!($code),)*
                }
            }
        }

        impl Sentence {
            /// The type tag of this record.
            pub fn sentence_type(&self) -> SentenceType {
                match self {
                    $(Self::$code(_) => SentenceType::$code,)*
                }
            }

            fn decode_as(sentence_type: SentenceType, fields: &mut Fields<'_>) -> Result<Self, Error> {
                match sentence_type {
                    $(SentenceType::$code => $code::decode(fields).map(Self::$code),)*
                }
            }
        }
    };
}

sentences! {
    /// Waypoint Arrival Alarm
    AAM,
    /// GPS Almanac Data
    ALM,
    /// Autopilot Sentence "A"
    APA,
    /// Autopilot Sentence "B"
    APB,
    /// Bearing - Waypoint to Waypoint
    BOD,
    /// Bearing & Distance to Waypoint - Great Circle
    BWC,
    /// Datum Reference
    DTM,
    /// Global Positioning System Fix Data
    GGA,
    /// Geographic Position - Latitude/Longitude
    GLL,
    /// GPS Range Residuals
    GRS,
    /// GPS DOP and active satellites
    GSA,
    /// GPS Pseudorange Noise Statistics
    GST,
    /// Satellites in View
    GSV,
    /// Control for a Beacon Receiver
    MSK,
    /// Beacon Receiver Status
    MSS,
    /// Recommended Minimum Navigation Information (Loran-C)
    RMA,
    /// Recommended Minimum Navigation Information (waypoint)
    RMB,
    /// Recommended Minimum Navigation Information
    RMC,
    /// Routes
    RTE,
    /// Multiple Data ID
    STN,
    /// Transit Fix Data
    TRF,
    /// Dual Ground/Water Speed
    VBW,
    /// Track made good and Ground speed
    VTG,
    /// Waypoint Closure Velocity
    WCV,
    /// Waypoint Location
    WPL,
    /// Cross-Track Error
    XTC,
    /// Cross-Track Error, Measured
    XTE,
    /// Time & Date - UTC, day, month, year and local time zone
    ZDA,
    /// UTC & Time to Destination Waypoint
    ZTG,
}

impl Sentence {
    /// Decodes a tokenized sentence.
    ///
    /// Returns `Ok(None)` when the sentence type has no decoder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] when a field holds malformed content.
    pub fn decode(raw: &RawSentence<'_>) -> Result<Option<Self>, Error> {
        let Some(sentence_type) = SentenceType::from_code(raw.sentence_type) else {
            return Ok(None);
        };

        Self::decode_as(sentence_type, &mut raw.fields()).map(Some)
    }
}

impl fmt::Display for SentenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validates, tokenizes and decodes one line.
///
/// Returns `Ok(None)` for a valid sentence whose type has no decoder.
///
/// # Examples
///
/// ```rust
/// use nmea0183_dispatch::{decode, nmea_content::{Quality, Sentence}};
///
/// let sentence = decode("$GPGGA,162254.00,3723.02837,N,12159.39853,W,1,03,2.36,525.6,M,-25.6,M,,*65");
///
/// match sentence {
///     Ok(Some(Sentence::GGA(gga))) => {
///         assert_eq!(gga.quality, Quality::GPSFix);
///         assert_eq!(gga.satellite_count, 3);
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
///
/// // Unsupported sentence types are not an error
/// assert_eq!(decode("$GPTXT,01,01,02,ANTSTATUS=OK*3B"), Ok(None));
/// ```
pub fn decode(line: &str) -> Result<Option<Sentence>, Error> {
    Sentence::decode(&tokenize(line)?)
}

macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $char:literal => $variant:ident = $label:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// The character this value is transmitted as.
            pub fn as_char(&self) -> char {
                match self {
                    $(Self::$variant => $char,)*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(match self {
                    $(Self::$variant => $label,)*
                })
            }
        }

        impl NmeaField for $name {
            fn parse_field(field: &str) -> Result<Option<Self>, Error> {
                parse_with(
                    field,
                    map_opt(anychar, |c| match c {
                        $($char => Some(Self::$variant),)*
                        _ => None,
                    }),
                )
            }
        }
    };
}

field_enum! {
    /// FAA Mode Indicator
    ///
    /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_sentence_mixes_and_nmea_variations>
    pub enum FaaMode {
        /// A - Autonomous mode
        'A' => Autonomous = "autonomous",
        /// C - Quectel Querk, "Caution"
        'C' => Caution = "caution",
        /// D - Differential Mode
        'D' => Differential = "differential",
        /// E - Estimated (dead-reckoning) mode
        'E' => Estimated = "estimated",
        /// F - RTK Float mode
        'F' => FloatRtk = "float rtk",
        /// M - Manual Input Mode
        'M' => Manual = "manual",
        /// N - Data Not Valid
        'N' => DataNotValid = "not valid",
        /// P - Precise
        'P' => Precise = "precise",
        /// R - RTK Integer mode
        'R' => FixedRtk = "fixed rtk",
        /// S - Simulated Mode
        'S' => Simulator = "simulator",
        /// U - Quectel Querk, "Unsafe"
        'U' => Unsafe = "unsafe",
    }
}

field_enum! {
    /// Quality of the GPS fix
    ///
    /// An empty field decodes to [`Quality::NoFix`].
    #[derive(Default)]
    pub enum Quality {
        #[default]
        /// 0 - Fix not available
        '0' => NoFix = "no fix",
        /// 1 - GPS fix
        '1' => GPSFix = "gps fix",
        /// 2 - Differential GPS fix
        '2' => DGPSFix = "dgps fix",
        /// 3 - PPS fix
        '3' => PPSFix = "pps fix",
        /// 4 - Real Time Kinematic
        '4' => RTK = "rt kinematic",
        /// 5 - Float RTK
        '5' => FloatRTK = "float rt kinematic",
        /// 6 - estimated (dead reckoning)
        '6' => Estimated = "estimated",
        /// 7 - Manual input mode
        '7' => Manual = "manual",
        /// 8 - Simulation mode
        '8' => Simulation = "simulation",
    }
}

field_enum! {
    /// Selection Mode
    pub enum SelectionMode {
        /// A - Automatic, 2D/3D
        'A' => Automatic = "automatic",
        /// M - Manual, forced to operate in 2D or 3D
        'M' => Manual = "manual",
    }
}

field_enum! {
    /// Fix Mode
    ///
    /// An empty field decodes to [`FixMode::NoFix`].
    #[derive(Default)]
    pub enum FixMode {
        #[default]
        /// 1 - No fix
        '1' => NoFix = "no fix",
        /// 2 - 2D Fix
        '2' => Fix2D = "2d fix",
        /// 3 - 3D Fix
        '3' => Fix3D = "3d fix",
    }
}

/// One satellite entry of a [`GSV`] sentence.
///
/// Empty fields decode to zero; a zero SNR means the satellite is not tracked.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, NmeaDecode)]
pub struct SatInfo {
    /// Satellite PRN number
    pub prn: u16,
    /// Elevation in degrees
    pub elevation: i8,
    /// Azimuth in degrees, true north
    pub azimuth: u16,
    /// Signal-to-noise ratio in dB-Hz
    pub snr: u8,
}

impl SatInfo {
    /// Creates a satellite entry.
    pub const fn new(prn: u16, elevation: i8, azimuth: u16, snr: u8) -> Self {
        SatInfo {
            prn,
            elevation,
            azimuth,
            snr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_type_codes() {
        assert_eq!(SentenceType::ALL.len(), 29);

        for &sentence_type in SentenceType::ALL {
            assert_eq!(
                SentenceType::from_code(sentence_type.as_str()),
                Some(sentence_type)
            );
        }

        assert_eq!(SentenceType::from_code("RMC"), Some(SentenceType::RMC));
        assert_eq!(SentenceType::from_code("rmc"), None);
        assert_eq!(SentenceType::from_code("TXT"), None);
        assert_eq!(SentenceType::from_code(""), None);
        assert_eq!(SentenceType::ZDA.to_string(), "ZDA");
    }

    #[test]
    fn test_quality() {
        let cases = [
            ("0", Quality::NoFix),
            ("1", Quality::GPSFix),
            ("5", Quality::FloatRTK),
            ("8", Quality::Simulation),
        ];

        for (field, expected) in cases {
            assert_eq!(Quality::parse_field(field), Ok(Some(expected)));
        }

        assert_eq!(Quality::parse_field(""), Ok(None));
        assert!(Quality::parse_field("9").is_err());
        assert!(Quality::parse_field("11").is_err());

        assert_eq!(Quality::FloatRTK.to_string(), "float rt kinematic");
        assert_eq!(Quality::default(), Quality::NoFix);
        assert_eq!(Quality::RTK.as_char(), '4');
    }

    #[test]
    fn test_fix_and_selection_mode() {
        assert_eq!(FixMode::parse_field("2"), Ok(Some(FixMode::Fix2D)));
        assert_eq!(FixMode::default(), FixMode::NoFix);
        assert!(FixMode::parse_field("4").is_err());

        assert_eq!(
            SelectionMode::parse_field("A"),
            Ok(Some(SelectionMode::Automatic))
        );
        assert_eq!(
            SelectionMode::parse_field("M"),
            Ok(Some(SelectionMode::Manual))
        );
        assert!(SelectionMode::parse_field("X").is_err());
    }

    #[test]
    fn test_faa_mode() {
        let cases = [
            ('A', FaaMode::Autonomous),
            ('D', FaaMode::Differential),
            ('E', FaaMode::Estimated),
            ('N', FaaMode::DataNotValid),
            ('R', FaaMode::FixedRtk),
        ];

        for (c, expected) in cases {
            assert_eq!(FaaMode::parse_field(&c.to_string()), Ok(Some(expected)));
            assert_eq!(expected.as_char(), c);
        }

        assert!(FaaMode::parse_field("K").is_err());
    }

    #[test]
    fn test_sat_info() {
        let sat = SatInfo::decode_fields(&["09", "07", "036", ""]);
        assert_eq!(sat, Ok(SatInfo::new(9, 7, 36, 0)));

        let sat = SatInfo::decode_fields(&["15", "25"]);
        assert_eq!(sat, Ok(SatInfo::new(15, 25, 0, 0)));

        let sat = SatInfo::decode_fields(&["15", "x5", "135", "0"]);
        assert_eq!(
            sat,
            Err(Error::InvalidField {
                index: 1,
                value: "x5".to_owned()
            })
        );
    }

    #[test]
    fn test_decode_line() {
        let cases = [
            "$GPRMC,162254.00,A,3723.02837,N,12159.39853,W,0.820,188.36,110706,,,A*74",
            "$GPVTG,188.36,T,,M,0.820,N,1.519,K,A*3F",
            "$GPGGA,162254.00,3723.02837,N,12159.39853,W,1,03,2.36,525.6,M,-25.6,M,,*65",
            "$GPGSA,A,2,25,01,22,,,,,,,,,,2.56,2.36,1.00*02",
            "$GPGSV,4,4,14,07,01,181,,15,25,135,*76",
            "$GPGLL,3723.02837,N,12159.39853,W,162254.00,A,A*7C",
            "$GPZDA,162254.00,11,07,2006,00,00*63",
            "$GPAAM,A,A,0.10,N,WPTNME*32",
            "$GPGST,024603.00,3.2,6.6,4.7,47.3,5.8,5.6,22.0*58",
            "$GPBOD,097.0,T,103.2,M,POINTB,POINTA*4A",
            "$GPWPL,4917.16,N,12310.64,W,003*65",
        ];

        let expected = [
            SentenceType::RMC,
            SentenceType::VTG,
            SentenceType::GGA,
            SentenceType::GSA,
            SentenceType::GSV,
            SentenceType::GLL,
            SentenceType::ZDA,
            SentenceType::AAM,
            SentenceType::GST,
            SentenceType::BOD,
            SentenceType::WPL,
        ];

        for (line, expected) in cases.into_iter().zip(expected) {
            let result = decode(line);
            assert!(
                matches!(&result, Ok(Some(sentence)) if sentence.sentence_type() == expected),
                "Failed to decode {line}: {result:?}"
            );
        }
    }

    #[test]
    fn test_decode_line_errors() {
        assert_eq!(decode("$GPTXT,01,01,02,ANTSTATUS=OK*3B"), Ok(None));
        assert_eq!(decode("$*00"), Ok(None));
        assert!(decode("$GPAAM,A,A,0.10,N,WPTNME*33").is_err_and(|e| e.is_checksum_error()));
        assert_eq!(
            decode("$GPGGA,162254.00,3723.02837,N,12159.39853,W,1,0x,2.36,525.6,M,-25.6,M,,*2E"),
            Err(Error::InvalidField {
                index: 6,
                value: "0x".to_owned()
            })
        );
    }
}
