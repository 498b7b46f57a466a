//! # NMEA 0183 Framing
//!
//! This module validates and tokenizes NMEA 0183-style lines of the form
//! `$TTSSS,D1,D2,...,Dn*CC`.
//!
//! A line is trimmed, checked for ASCII, then must start with `$` (or `!` for
//! encapsulated sentences). Everything up to `*` is the sentence body, and the
//! two hexadecimal digits after `*` must equal the XOR of every body byte.
//! Only then is the body split into the address field and the data fields.

use nom::{
    Finish, Parser,
    bytes::complete::{take_till, take_while_m_n},
    character::complete::{char, one_of},
    combinator::{all_consuming, map_res, opt},
};

use crate::{Error, IResult, parse::Fields};

/// Defines how a missing `*CC` checksum is treated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumMode {
    #[default]
    /// The `*CC` checksum must be present and valid.
    ///
    /// This is the NMEA 0183 behavior and the default.
    Required,

    /// The checksum may be omitted, but is validated when present.
    ///
    /// Use this mode for equipment or logs that strip checksums.
    Optional,
}

/// A sentence that passed checksum validation, split into its parts.
///
/// `talker` and `sentence_type` are taken from the address field: the type is
/// its final three characters (or the whole field when shorter) and the talker
/// is whatever precedes it. The talker is not used for dispatching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSentence<'a> {
    /// Start marker, `$` or `!`
    pub marker: char,
    /// Talker identifier, e.g. `GP`
    pub talker: &'a str,
    /// Sentence type code, e.g. `RMC`
    pub sentence_type: &'a str,
    /// Data fields following the address field, in order
    pub fields: Vec<&'a str>,
    /// Transmitted checksum, absent only under [`ChecksumMode::Optional`]
    pub checksum: Option<u8>,
}

impl RawSentence<'_> {
    /// Returns a cursor over the data fields.
    pub fn fields(&self) -> Fields<'_> {
        Fields::new(&self.fields)
    }
}

/// Validates and tokenizes NMEA 0183 lines.
///
/// Uses the builder pattern for its configuration.
///
/// # Examples
///
/// ```rust
/// use nmea0183_dispatch::{ChecksumMode, SentenceParser};
///
/// let strict = SentenceParser::new();
/// assert!(strict.parse("$GPAAM,A,A,0.10,N,WPTNME*32").is_ok());
/// assert!(strict.parse("$GPAAM,A,A,0.10,N,WPTNME").is_err()); // (missing checksum)
///
/// let lenient = SentenceParser::new().checksum_mode(ChecksumMode::Optional);
/// assert!(lenient.parse("$GPAAM,A,A,0.10,N,WPTNME").is_ok());
/// assert!(lenient.parse("$GPAAM,A,A,0.10,N,WPTNME*33").is_err()); // (invalid checksum)
/// ```
#[must_use]
#[derive(Debug, Default, Clone, Copy)]
pub struct SentenceParser {
    checksum_mode: ChecksumMode,
}

impl SentenceParser {
    /// Creates a parser requiring a valid checksum on every line.
    pub fn new() -> Self {
        SentenceParser {
            checksum_mode: ChecksumMode::Required,
        }
    }

    /// Sets the checksum mode for the parser.
    ///
    /// # Arguments
    ///
    /// * `mode` - The desired checksum mode:
    ///   - [`ChecksumMode::Required`]: Checksum must be present and valid
    ///   - [`ChecksumMode::Optional`]: Checksum may be absent or must be valid if present
    pub fn checksum_mode(mut self, mode: ChecksumMode) -> Self {
        self.checksum_mode = mode;
        self
    }

    /// Returns the configured checksum mode.
    pub fn mode(&self) -> ChecksumMode {
        self.checksum_mode
    }

    /// Validates `line` and splits it into a [`RawSentence`].
    ///
    /// Surrounding whitespace (including `\r\n`) is ignored.
    ///
    /// # Errors
    ///
    /// Returns one of the framing variants of [`Error`] when the line is not
    /// a well-formed sentence with a matching checksum.
    pub fn parse<'a>(&self, line: &'a str) -> Result<RawSentence<'a>, Error> {
        let (_, (marker, body, checksum)) = frame(self.checksum_mode).parse(line.trim()).finish()?;

        let mut fields = body.split(',');
        let address = fields.next().unwrap_or_default();
        let (talker, sentence_type) = address.split_at(address.len().saturating_sub(3));

        Ok(RawSentence {
            marker,
            talker,
            sentence_type,
            fields: fields.collect(),
            checksum,
        })
    }
}

/// Returns `true` when `line` carries a start marker, a `*` delimiter and a
/// two-digit hexadecimal checksum equal to the XOR of the bytes in between.
///
/// Hex digits may be upper or lower case. An empty body has checksum `00`.
///
/// ```rust
/// use nmea0183_dispatch::validate_checksum;
///
/// assert!(validate_checksum("$*00"));
/// assert!(validate_checksum("$GPZDA,110003.00,27,03,2006,-5,00*7f"));
/// assert!(!validate_checksum("$*01"));
/// assert!(!validate_checksum("*00"));
/// ```
pub fn validate_checksum(line: &str) -> bool {
    frame(ChecksumMode::Required).parse(line.trim()).is_ok()
}

/// Validates and tokenizes `line` with a [`ChecksumMode::Required`] parser.
pub fn tokenize(line: &str) -> Result<RawSentence<'_>, Error> {
    SentenceParser::new().parse(line)
}

/// Calculates the NMEA 0183 checksum of a sentence body.
///
/// The body is everything between the start marker and `*`, exclusive.
pub fn checksum(body: &str) -> u8 {
    body.bytes().fold(0u8, |accumulated_xor, byte| accumulated_xor ^ byte)
}

/// Splits a trimmed line into `(marker, body, transmitted checksum)`.
fn frame<'a>(
    mode: ChecksumMode,
) -> impl Parser<&'a str, Output = (char, &'a str, Option<u8>), Error = Error> {
    move |i: &'a str| -> IResult<&'a str, (char, &'a str, Option<u8>)> {
        if !i.is_ascii() {
            return Err(nom::Err::Error(Error::NonAscii));
        }

        let (i, marker) = one_of("$!")
            .parse(i)
            .map_err(|_: nom::Err<Error>| nom::Err::Error(Error::MissingStartMarker))?;
        let (i, body) = take_till(|c: char| c == '*').parse(i)?;
        let (i, delimiter) = opt(char('*')).parse(i)?;

        let (i, found) = match (delimiter, mode) {
            (Some(_), _) => {
                let (i, found) = checksum_digits(i)?;
                (i, Some(found))
            }
            (None, ChecksumMode::Required) => return Err(nom::Err::Error(Error::MissingChecksum)),
            (None, ChecksumMode::Optional) => (i, None),
        };

        let expected = checksum(body);
        if let Some(found) = found
            && found != expected
        {
            return Err(nom::Err::Error(Error::ChecksumMismatch { expected, found }));
        }

        Ok((i, (marker, body, found)))
    }
}

/// Exactly two hex digits, nothing after them.
fn checksum_digits(i: &str) -> IResult<&str, u8> {
    all_consuming(map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
        |digits: &str| u8::from_str_radix(digits, 16),
    ))
    .parse(i)
    .map_err(|_: nom::Err<Error>| nom::Err::Error(Error::MalformedChecksum))
}
