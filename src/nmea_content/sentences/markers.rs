//! Sentence types that are recognized but carry no decoded fields.
//!
//! They still decode successfully and are dispatched, so a handler can
//! observe that the sentence arrived.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_dispatch, NmeaDecode};

macro_rules! marker_sentences {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
            #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, NmeaDecode)]
            pub struct $name;
        )*
    };
}

marker_sentences! {
    /// ALM - GPS Almanac Data
    ALM,
    /// APA - Autopilot Sentence "A"
    APA,
    /// APB - Autopilot Sentence "B"
    APB,
    /// BOD - Bearing - Waypoint to Waypoint
    BOD,
    /// BWC - Bearing & Distance to Waypoint - Great Circle
    BWC,
    /// DTM - Datum Reference
    DTM,
    /// GRS - GPS Range Residuals
    GRS,
    /// MSK - Control for a Beacon Receiver
    MSK,
    /// MSS - Beacon Receiver Status
    MSS,
    /// RMA - Recommended Minimum Navigation Information (Loran-C)
    RMA,
    /// RMB - Recommended Minimum Navigation Information (waypoint)
    RMB,
    /// RTE - Routes
    RTE,
    /// STN - Multiple Data ID
    STN,
    /// TRF - Transit Fix Data
    TRF,
    /// VBW - Dual Ground/Water Speed
    VBW,
    /// WCV - Waypoint Closure Velocity
    WCV,
    /// WPL - Waypoint Location
    WPL,
    /// XTC - Cross-Track Error
    XTC,
    /// XTE - Cross-Track Error, Measured
    XTE,
    /// ZTG - UTC & Time to Destination Waypoint
    ZTG,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nmea_content::{Sentence, SentenceType, decode};

    #[test]
    fn test_marker_ignores_fields() {
        assert_eq!(BOD::decode_fields(&["097.0", "T", "103.2", "M", "POINTB", "POINTA"]), Ok(BOD));
        assert_eq!(WPL::decode_fields(&[]), Ok(WPL));
    }

    #[test]
    fn test_marker_sentences_are_decoded() {
        let sentence = decode("$GPWPL,4917.16,N,12310.64,W,003*65");
        assert_eq!(sentence, Ok(Some(Sentence::WPL(WPL))));

        let sentence = decode("$GPBOD,097.0,T,103.2,M,POINTB,POINTA*4A").unwrap();
        assert_eq!(
            sentence.map(|sentence| sentence.sentence_type()),
            Some(SentenceType::BOD)
        );
    }
}
