//! # Error Types
//!
//! This module defines the errors produced while validating, tokenizing and
//! decoding a single NMEA 0183 line. Failures reading the underlying source
//! are reported separately as [`std::io::Error`] by the dispatcher.

use nom::error::{ErrorKind, FromExternalError, ParseError};

/// Holds the result of the nom-based grammar parsers used by field decoders.
///
/// The `Ok` side is a pair of the unparsed remainder and the produced value.
/// Outside of parsing code, use [`nom::Finish::finish`] to turn it into a
/// plain [`Result`].
pub type IResult<I, O> = nom::IResult<I, O, Error>;

/// Every reason a single line can be rejected.
///
/// The first five variants are checksum/framing failures: such a line is never
/// tokenized or decoded. [`Error::InvalidField`] means the frame was valid but
/// one field held malformed, non-empty content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The line contains non-ASCII bytes.
    #[error("line contains non-ASCII characters")]
    NonAscii,

    /// The line does not begin with `$` or `!`.
    #[error("line does not start with `$` or `!`")]
    MissingStartMarker,

    /// No `*` delimiter follows the sentence body.
    #[error("line has no `*` checksum delimiter")]
    MissingChecksum,

    /// The characters after `*` are not exactly two hexadecimal digits.
    #[error("checksum is not two hexadecimal digits")]
    MalformedChecksum,

    /// The transmitted checksum does not match the computed one.
    #[error("checksum mismatch: computed {expected:02X}, found {found:02X}")]
    ChecksumMismatch {
        /// XOR of every byte between the start marker and `*`
        expected: u8,
        /// The two hex digits transmitted after `*`
        found: u8,
    },

    /// A non-empty field could not be decoded.
    ///
    /// `index` counts data fields from zero, starting after the address field.
    #[error("field {index} ({value:?}) is malformed")]
    InvalidField {
        /// Zero-based position of the field after the address field
        index: usize,
        /// The raw field content
        value: String,
    },

    /// A grammar-level failure inside a nom parser.
    ///
    /// Field decoders wrap this into [`Error::InvalidField`] once the field
    /// position is known, so it only surfaces from the standalone grammar
    /// functions in [`crate::nmea_content::parse`].
    #[error("malformed input ({0:?})")]
    Parsing(ErrorKind),
}

impl Error {
    /// Returns `true` for framing and checksum failures.
    pub fn is_checksum_error(&self) -> bool {
        matches!(
            self,
            Error::NonAscii
                | Error::MissingStartMarker
                | Error::MissingChecksum
                | Error::MalformedChecksum
                | Error::ChecksumMismatch { .. }
        )
    }
}

impl<I> ParseError<I> for Error {
    fn from_error_kind(_: I, kind: ErrorKind) -> Self {
        Error::Parsing(kind)
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I, EX> FromExternalError<I, EX> for Error {
    fn from_external_error(_: I, kind: ErrorKind, _: EX) -> Self {
        Error::Parsing(kind)
    }
}
