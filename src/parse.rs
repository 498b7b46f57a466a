use std::str::FromStr;

use nom::{
    Finish, Parser,
    character::complete::{anychar, char, digit0, one_of},
    combinator::{all_consuming, map_res, opt, recognize},
};

use crate::{Error, IResult};

/// Trait for decoding a value from a single NMEA 0183 field.
///
/// Every field decode has three possible outcomes:
///
/// - `Ok(Some(value))` - the field held a well-formed value,
/// - `Ok(None)` - the field was empty, and the caller substitutes a default,
/// - `Err(_)` - the field held non-empty content that does not parse.
///
/// Implementations are provided for the integer and float primitives,
/// `char`, `String`, `Option<T>`, [`time::Time`] (`hhmmss.ss`) and
/// [`time::Date`] (`ddmmyy`).
///
/// # Examples
///
/// ```rust
/// use nmea0183_dispatch::NmeaField;
///
/// assert_eq!(u8::parse_field("08"), Ok(Some(8)));
/// assert_eq!(f32::parse_field(""), Ok(None));
/// assert!(u8::parse_field("x1").is_err());
/// ```
///
/// # Implementing for Custom Types
///
/// Most implementations delegate to [`parse_with`], which runs a nom parser
/// over the whole field:
///
/// ```rust
/// use nmea0183_dispatch::{Error, NmeaField, parse_with};
/// use nom::{Parser, character::complete::one_of};
///
/// struct Hemisphere(bool);
///
/// impl NmeaField for Hemisphere {
///     fn parse_field(field: &str) -> Result<Option<Self>, Error> {
///         parse_with(field, one_of("NS").map(|c| Hemisphere(c == 'N')))
///     }
/// }
///
/// assert!(matches!(Hemisphere::parse_field("S"), Ok(Some(Hemisphere(false)))));
/// ```
pub trait NmeaField: Sized {
    /// Decodes `field`, returning `Ok(None)` when it is empty.
    fn parse_field(field: &str) -> Result<Option<Self>, Error>;
}

/// Runs `parser` over a whole field.
///
/// An empty field yields `Ok(None)` without invoking the parser. Otherwise the
/// parser must consume the entire field.
pub fn parse_with<'a, O, P>(field: &'a str, parser: P) -> Result<Option<O>, Error>
where
    P: Parser<&'a str, Output = O, Error = Error>,
{
    if field.is_empty() {
        return Ok(None);
    }

    let (_, value) = all_consuming(parser).parse(field).finish()?;
    Ok(Some(value))
}

/// Parses a plain decimal number: an optional sign, digits and an optional
/// fraction. Exponents, `nan` and `inf` are rejected.
pub(crate) fn decimal<T: FromStr>(i: &str) -> IResult<&str, T> {
    map_res(
        recognize((opt(one_of("+-")), digit0, opt((char('.'), digit0)))),
        str::parse,
    )
    .parse(i)
}

macro_rules! impl_nmea_field {
    ($($ty:ty => $parser:expr),* $(,)?) => {
        $(
            impl NmeaField for $ty {
                fn parse_field(field: &str) -> Result<Option<Self>, Error> {
                    parse_with(field, $parser)
                }
            }
        )*
    };
}

impl_nmea_field!(
    u8 => nom::character::complete::u8,
    u16 => nom::character::complete::u16,
    u32 => nom::character::complete::u32,
    i8 => nom::character::complete::i8,
    i16 => nom::character::complete::i16,
    i32 => nom::character::complete::i32,
    f32 => decimal::<f32>,
    f64 => decimal::<f64>,
    char => anychar,
);

impl NmeaField for String {
    fn parse_field(field: &str) -> Result<Option<Self>, Error> {
        Ok((!field.is_empty()).then(|| field.to_owned()))
    }
}

impl<T: NmeaField> NmeaField for Option<T> {
    fn parse_field(field: &str) -> Result<Option<Self>, Error> {
        T::parse_field(field).map(Some)
    }
}

/// A cursor over the data fields of one sentence.
///
/// Reading past the last field yields empty fields, so sentences with
/// missing trailing fields decode to defaults instead of failing.
/// Every decode failure is reported as [`Error::InvalidField`] carrying the
/// position and raw content of the offending field.
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    fields: &'a [&'a str],
    position: usize,
}

impl<'a> Fields<'a> {
    /// Creates a cursor positioned at the first field.
    pub fn new(fields: &'a [&'a str]) -> Self {
        Fields {
            fields,
            position: 0,
        }
    }

    /// Index of the next field to be read.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of fields left to read.
    pub fn remaining(&self) -> usize {
        self.fields.len().saturating_sub(self.position)
    }

    /// Returns the next raw field without advancing.
    pub fn peek(&self) -> &'a str {
        self.fields.get(self.position).copied().unwrap_or_default()
    }

    /// Returns the next raw field and advances.
    pub fn next_raw(&mut self) -> &'a str {
        let field = self.peek();
        self.position += 1;
        field
    }

    /// Skips `count` fields.
    pub fn skip(&mut self, count: usize) {
        self.position += count;
    }

    /// Decodes the next field with `decode`.
    pub fn next_with<T, F>(&mut self, decode: F) -> Result<Option<T>, Error>
    where
        F: FnOnce(&'a str) -> Result<Option<T>, Error>,
    {
        let index = self.position;
        let field = self.next_raw();
        decode(field).map_err(|_| Error::InvalidField {
            index,
            value: field.to_owned(),
        })
    }

    /// Decodes the next field, keeping empty fields as `None`.
    pub fn next_optional<T: NmeaField>(&mut self) -> Result<Option<T>, Error> {
        self.next_with(T::parse_field)
    }

    /// Decodes the next field, substituting `T::default()` when it is empty.
    pub fn next_field<T: NmeaField + Default>(&mut self) -> Result<T, Error> {
        self.next_optional().map(Option::unwrap_or_default)
    }

    /// Builds an [`Error::InvalidField`] for the field at `index`.
    ///
    /// Used by decoders that validate a combination of fields after reading them.
    pub fn invalid(&self, index: usize) -> Error {
        Error::InvalidField {
            index,
            value: self.fields.get(index).copied().unwrap_or_default().to_owned(),
        }
    }
}

/// Trait for decoding a whole sentence record from its data fields.
///
/// Usually derived with [`macro@crate::NmeaDecode`]: fields are decoded in
/// declaration order, each one consuming one data field unless a custom
/// `#[nmea(parser(..))]` consumes more.
///
/// ```rust
/// use nmea0183_dispatch::{NmeaDecode, nmea_content::parse::latitude};
///
/// #[derive(Debug, NmeaDecode)]
/// struct Waypoint {
///     #[nmea(parser(latitude))]
///     latitude: f64,
///     name: String,
/// }
///
/// let waypoint = Waypoint::decode_fields(&["4917.16", "S", "003"]).unwrap();
/// assert!((waypoint.latitude + 49.286).abs() < 1e-9);
/// assert_eq!(waypoint.name, "003");
/// ```
pub trait NmeaDecode: Sized {
    /// Decodes `Self` from the cursor, advancing past the consumed fields.
    fn decode(fields: &mut Fields<'_>) -> Result<Self, Error>;

    /// Decodes `Self` from a slice of data fields.
    fn decode_fields(fields: &[&str]) -> Result<Self, Error> {
        Self::decode(&mut Fields::new(fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_primitive_fields() {
        assert_eq!(u8::parse_field("03"), Ok(Some(3)));
        assert_eq!(u16::parse_field("312"), Ok(Some(312)));
        assert_eq!(i8::parse_field("-5"), Ok(Some(-5)));
        assert_eq!(f64::parse_field("-25.6"), Ok(Some(-25.6)));
        assert_eq!(f32::parse_field("0.820"), Ok(Some(0.82)));
        assert_eq!(f32::parse_field("+1.5"), Ok(Some(1.5)));
        assert_eq!(f32::parse_field(".5"), Ok(Some(0.5)));
        assert_eq!(f32::parse_field("5."), Ok(Some(5.0)));
        assert_eq!(char::parse_field("A"), Ok(Some('A')));
        assert_eq!(String::parse_field("WPTNME"), Ok(Some("WPTNME".to_owned())));
    }

    #[test]
    fn test_parse_empty_fields() {
        assert_eq!(u8::parse_field(""), Ok(None));
        assert_eq!(f64::parse_field(""), Ok(None));
        assert_eq!(char::parse_field(""), Ok(None));
        assert_eq!(String::parse_field(""), Ok(None));
        assert_eq!(Option::<u8>::parse_field(""), Ok(Some(None)));
    }

    #[test]
    fn test_parse_malformed_fields() {
        let cases = ["x", "1x", "300", "-1", " 1"];
        for field in cases {
            let result = u8::parse_field(field);
            assert!(result.is_err(), "Parsed malformed u8 {field:?}: {result:?}");
        }

        let cases = [
            "abc", "1.2.3", "1,5", "nan", "NaN", "inf", "-inf", "infinity", "1e5", "+", ".",
        ];
        for field in cases {
            let result = f64::parse_field(field);
            assert!(result.is_err(), "Parsed malformed f64 {field:?}: {result:?}");
        }

        assert!(char::parse_field("AV").is_err());
    }

    #[test]
    fn test_fields_cursor() {
        let raw = ["1", "", "x", "2.5"];
        let mut fields = Fields::new(&raw);

        assert_eq!(fields.next_field::<u8>(), Ok(1));
        assert_eq!(fields.next_field::<u8>(), Ok(0));
        assert_eq!(
            fields.next_field::<u8>(),
            Err(Error::InvalidField {
                index: 2,
                value: "x".to_owned()
            })
        );
        assert_eq!(fields.remaining(), 1);
        assert_eq!(fields.next_optional::<f32>(), Ok(Some(2.5)));

        // Past the end: empty fields, never an error.
        assert_eq!(fields.remaining(), 0);
        assert_eq!(fields.next_optional::<f32>(), Ok(None));
        assert_eq!(fields.next_field::<f64>(), Ok(0.0));
        assert_eq!(fields.position(), 6);
    }
}
