use proptest::prelude::*;

use crate::{ChecksumMode, Error, SentenceParser, checksum, validate_checksum};

const RMC: &str = "$GPRMC,162254.00,A,3723.02837,N,12159.39853,W,0.820,188.36,110706,,,A";

#[test]
fn test_validate_checksum_cases() {
    let cases = [
        ("", false),
        ("*00", false),
        ("$*00", true),
        ("$*01", false),
        ("^0*0", false),
        ("$0*0", false),
        ("$*xx", false),
        ("$*000", false),
        ("!*00", true),
        ("$GPZDA,110003.00,27,03,2006,-5,00*7f", true),
        ("$GPZDA,110003.00,27,03,2006,-5,00*7F", true),
        ("  $GPZDA,162254.00,11,07,2006,00,00*63\r\n", true),
    ];

    for (line, expected) in cases {
        assert_eq!(validate_checksum(line), expected, "line: {line:?}");
    }

    assert!(validate_checksum(&format!("{RMC}*74")));
    assert!(!validate_checksum(&format!("{RMC}*72")));
}

#[test]
fn test_checksum_errors() {
    let parser = SentenceParser::new();

    assert_eq!(parser.parse("GPAAM,A*32"), Err(Error::MissingStartMarker));
    assert_eq!(parser.parse("$GPAAM,A,A,0.10,N,WPTNME"), Err(Error::MissingChecksum));
    assert_eq!(parser.parse("$GPAAM*3"), Err(Error::MalformedChecksum));
    assert_eq!(parser.parse("$GPAAM*3G"), Err(Error::MalformedChecksum));
    assert_eq!(parser.parse("$GPAAM,é*00"), Err(Error::NonAscii));
    assert_eq!(
        parser.parse(&format!("{RMC}*72")),
        Err(Error::ChecksumMismatch {
            expected: 0x74,
            found: 0x72
        })
    );

    for line in ["GPAAM,A*32", "$GPAAM", "$GPAAM*3", "$GPAAM,é*00"] {
        let error = parser.parse(line).unwrap_err();
        assert!(error.is_checksum_error(), "{line:?} -> {error:?}");
    }
}

#[test]
fn test_optional_checksum_mode() {
    let parser = SentenceParser::new().checksum_mode(ChecksumMode::Optional);

    let sentence = parser.parse("$GPAAM,A,A,0.10,N,WPTNME").unwrap();
    assert_eq!(sentence.checksum, None);
    assert_eq!(sentence.sentence_type, "AAM");

    let sentence = parser.parse("$GPAAM,A,A,0.10,N,WPTNME*32").unwrap();
    assert_eq!(sentence.checksum, Some(0x32));

    assert!(parser.parse("$GPAAM,A,A,0.10,N,WPTNME*33").is_err());
    assert!(parser.parse("$GPAAM,A,A,0.10,N,WPTNME*").is_err());
}

proptest! {
    #[test]
    fn lines_without_start_marker_are_rejected(line in "[^$!\\s][ -~]{0,80}") {
        prop_assert!(!validate_checksum(&line));
    }

    #[test]
    fn computed_checksum_is_accepted(body in "[ -)+-~]{0,80}") {
        let line = format!("${body}*{:02X}", checksum(&body));
        prop_assert!(validate_checksum(&line));

        let lower = format!("${body}*{:02x}", checksum(&body));
        prop_assert!(validate_checksum(&lower));
    }

    #[test]
    fn wrong_checksum_is_rejected(body in "[ -)+-~]{0,80}", flip in 1u8..=255) {
        let line = format!("${body}*{:02X}", checksum(&body) ^ flip);
        prop_assert!(!validate_checksum(&line));
    }
}
