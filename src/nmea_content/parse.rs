//! Field decoders shared by the sentence records.
//!
//! The nom grammar functions ([`hhmmss`], [`ddmmyy`]) parse a single field.
//! The cursor-level decoders ([`latitude`], [`time_of_day`], [`with_unit`], ...)
//! read one or more fields from [`Fields`] and are meant for
//! `#[nmea(parser(..))]` attributes and hand-written decoders.
//!
//! Empty fields never fail: they decode to zero, `false`, midnight or
//! [`ZERO_DATE`].

use nom::{
    Parser,
    bytes::complete::take_while_m_n,
    character::complete::{char, digit0, digit1, one_of, u8},
    combinator::{all_consuming, map_res, opt, recognize, verify},
    error::ErrorKind,
    sequence::preceded,
};
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

use crate::{Error, Fields, IResult, NmeaField, parse::decimal, parse_with};

/// Date used for timestamps of sentences that carry only a time of day.
pub const ZERO_DATE: Date = time::macros::date!(0000 - 01 - 01);

/// Combines an optional date and time into a UTC timestamp.
///
/// A missing date falls back to [`ZERO_DATE`], a missing time to midnight.
pub fn utc_timestamp(date: Option<Date>, time: Option<Time>) -> OffsetDateTime {
    PrimitiveDateTime::new(date.unwrap_or(ZERO_DATE), time.unwrap_or(Time::MIDNIGHT)).assume_utc()
}

/// Parses `hhmmss` with an optional fractional second (`hhmmss.sss`).
pub fn hhmmss(i: &str) -> IResult<&str, Time> {
    let (i, (hour, minute, second)) = (two_digits, two_digits, two_digits).parse(i)?;
    let (i, fraction) = opt(preceded(char('.'), digit0)).parse(i)?;

    let time = Time::from_hms_nano(hour, minute, second, fraction.map_or(0, nanoseconds))
        .map_err(|_| nom::Err::Error(Error::Parsing(ErrorKind::Verify)))?;

    Ok((i, time))
}

/// Parses `ddmmyy`. Two-digit years are taken as `2000 + yy`.
pub fn ddmmyy(i: &str) -> IResult<&str, Date> {
    let (i, (day, month, year)) = (two_digits, two_digits, two_digits).parse(i)?;

    let date = Month::try_from(month)
        .and_then(|month| Date::from_calendar_date(2000 + i32::from(year), month, day))
        .map_err(|_| nom::Err::Error(Error::Parsing(ErrorKind::Verify)))?;

    Ok((i, date))
}

fn two_digits(i: &str) -> IResult<&str, u8> {
    with_take(2usize, u8).parse(i)
}

/// Takes `count` characters and requires `parser` to consume all of them.
fn with_take<'a, O, P>(count: usize, parser: P) -> impl Parser<&'a str, Output = O, Error = Error>
where
    P: Parser<&'a str, Output = O, Error = Error>,
{
    take_while_m_n(count, count, |c: char| c.is_ascii_digit()).and_then(all_consuming(parser))
}

/// Fractional-second digits to nanoseconds; digits past the ninth are dropped.
fn nanoseconds(digits: &str) -> u32 {
    digits
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(9)
        .fold(0, |nanos, digit| nanos * 10 + u32::from(digit - b'0'))
}

/// `DDMM.mmmm` / `DDDMM.mmmm` to decimal degrees.
fn degrees_minutes<'a>(degree_digits: usize) -> impl Parser<&'a str, Output = f64, Error = Error> {
    (with_take(degree_digits, u8), minutes)
        .map(|(degrees, minutes): (u8, f64)| f64::from(degrees) + minutes / 60.0)
}

/// Unsigned `mm.mmmm`, below 60.
fn minutes(i: &str) -> IResult<&str, f64> {
    verify(
        map_res(recognize((digit1, opt((char('.'), digit0)))), str::parse::<f64>),
        |minutes: &f64| *minutes < 60.0,
    )
    .parse(i)
}

impl NmeaField for Time {
    fn parse_field(field: &str) -> Result<Option<Self>, Error> {
        parse_with(field, hhmmss)
    }
}

impl NmeaField for Date {
    fn parse_field(field: &str) -> Result<Option<Self>, Error> {
        parse_with(field, ddmmyy)
    }
}

fn coordinate(
    fields: &mut Fields<'_>,
    degree_digits: usize,
    hemispheres: &'static str,
    negative: char,
) -> Result<f64, Error> {
    let magnitude = fields.next_with(|field| parse_with(field, degrees_minutes(degree_digits)))?;
    let hemisphere = fields.next_with(|field| parse_with(field, one_of(hemispheres)))?;

    Ok(match (magnitude, hemisphere) {
        (Some(value), Some(hemisphere)) if hemisphere == negative => -value,
        (Some(value), _) => value,
        (None, _) => 0.0,
    })
}

/// Reads `ddmm.mmmm,N|S` as signed decimal degrees, south negative.
pub fn latitude(fields: &mut Fields<'_>) -> Result<f64, Error> {
    coordinate(fields, 2, "NS", 'S')
}

/// Reads `dddmm.mmmm,E|W` as signed decimal degrees, west negative.
pub fn longitude(fields: &mut Fields<'_>) -> Result<f64, Error> {
    coordinate(fields, 3, "EW", 'W')
}

/// Reads `x.x,E|W` as signed degrees, west negative.
pub fn magnetic_variation(fields: &mut Fields<'_>) -> Result<f32, Error> {
    let value = fields.next_with(|field| parse_with(field, decimal::<f32>))?;
    let direction = fields.next_with(|field| parse_with(field, one_of("EW")))?;

    Ok(match (value, direction) {
        (Some(value), Some('W')) => -value,
        (value, _) => value.unwrap_or_default(),
    })
}

/// Reads a time of day anchored at [`ZERO_DATE`], in UTC.
pub fn time_of_day(fields: &mut Fields<'_>) -> Result<OffsetDateTime, Error> {
    let time = fields.next_optional::<Time>()?;
    Ok(utc_timestamp(None, time))
}

/// Reads an `A` (active, `true`) / `V` (void, `false`) status field.
pub fn status_flag(fields: &mut Fields<'_>) -> Result<bool, Error> {
    fields
        .next_with(|field| parse_with(field, one_of("AV").map(|status| status == 'A')))
        .map(Option::unwrap_or_default)
}

/// Returns a decoder reading a value followed by its unit field.
///
/// The unit field must be empty or equal to `unit`.
///
/// ```rust
/// use nmea0183_dispatch::{Fields, nmea_content::parse::with_unit};
///
/// let mut fields = Fields::new(&["525.6", "M", "1.519", "N"]);
/// let mut meters = with_unit::<f32>('M');
///
/// assert_eq!(meters(&mut fields), Ok(525.6));
/// assert!(meters(&mut fields).is_err());
/// ```
pub fn with_unit<T>(unit: char) -> impl FnMut(&mut Fields<'_>) -> Result<T, Error>
where
    T: NmeaField + Default,
{
    move |fields: &mut Fields<'_>| {
        let value = fields.next_field()?;
        fields.next_with(|field| parse_with(field, char(unit)))?;
        Ok(value)
    }
}

/// Reads `dd,mm,yyyy` as a calendar date.
///
/// Returns `None` when any of the three fields is empty.
pub fn full_date(fields: &mut Fields<'_>) -> Result<Option<Date>, Error> {
    let index = fields.position();
    let day = fields.next_optional::<u8>()?;
    let month = fields.next_optional::<u8>()?;
    let year = fields.next_optional::<u16>()?;

    let (Some(day), Some(month), Some(year)) = (day, month, year) else {
        return Ok(None);
    };

    let month = Month::try_from(month).map_err(|_| fields.invalid(index + 1))?;
    Date::from_calendar_date(i32::from(year), month, day)
        .map(Some)
        .map_err(|_| fields.invalid(index))
}

/// Reads a local zone as `±hh,mm`.
///
/// The sign of the hours field applies to the minutes as well, so `-03,30`
/// is three and a half hours behind UTC. Empty fields mean UTC.
pub fn utc_offset(fields: &mut Fields<'_>) -> Result<UtcOffset, Error> {
    let index = fields.position();
    let negative = fields.peek().starts_with('-');
    let hours = fields.next_field::<i8>()?;
    let minutes = fields.next_field::<i8>()?;

    let minutes = if negative {
        -minutes.saturating_abs()
    } else {
        minutes
    };

    UtcOffset::from_hms(hours, minutes, 0).map_err(|_| fields.invalid(index))
}
