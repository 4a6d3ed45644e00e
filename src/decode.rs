//! # Field Decoders
//!
//! Stateless conversions from the text of a single field into a typed value: geographic
//! coordinates, cardinal directions, time of day and calendar dates.

use nom::{
    Parser,
    bytes::complete::take_while_m_n,
    character::complete::{char, digit0},
    combinator::{map_res, opt},
    error::{ErrorKind, ParseError},
    sequence::preceded,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, FieldError, IResult, parse::consumed};

/// Cardinal direction of a coordinate.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Cardinal {
    /// The direction was not reported or was not one of `N`, `E`, `S`, `W`
    #[default]
    Unknown,
    North,
    East,
    South,
    West,
}

/// A latitude or longitude as transmitted: whole degrees, decimal minutes and a
/// cardinal direction.
///
/// Decoded positions always hold `minutes` in `0.0..60.0`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Position {
    pub degrees: u16,
    pub minutes: f64,
    pub cardinal: Cardinal,
}

impl Position {
    /// Signed decimal degrees; south and west are negative.
    ///
    /// ```rust
    /// use nmea_dispatch::{Cardinal, Position};
    ///
    /// let position = Position { degrees: 48, minutes: 30.0, cardinal: Cardinal::South };
    /// assert_eq!(position.to_degrees(), -48.5);
    /// ```
    pub fn to_degrees(&self) -> f64 {
        let degrees = f64::from(self.degrees) + self.minutes / 60.0;
        match self.cardinal {
            Cardinal::South | Cardinal::West => -degrees,
            _ => degrees,
        }
    }
}

/// UTC time of day and date, filled in from separate fields.
///
/// Time and date fields decode into the same `Timestamp` without clearing one another,
/// so a record whose sentence carries both ends up with a complete timestamp regardless
/// of field order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub time: Option<time::Time>,
    pub date: Option<time::Date>,
}

impl Timestamp {
    /// The combined date and time, when both have been reported.
    pub fn datetime(&self) -> Option<time::PrimitiveDateTime> {
        Some(time::PrimitiveDateTime::new(self.date?, self.time?))
    }
}

fn two_digits(i: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_digit()),
        |digits: &str| digits.parse::<u8>(),
    )
    .parse(i)
}

fn minutes(i: &str) -> IResult<&str, f64> {
    let (fraction, _) = (take_while_m_n(2, 2, |c: char| c.is_ascii_digit()), char('.')).parse(i)?;
    let (rest, _) = digit0(fraction)?;

    let minutes = i[..i.len() - rest.len()]
        .parse::<f64>()
        .map_err(|_| nom::Err::Error(Error::from_error_kind(i, ErrorKind::Float)))?;

    Ok((rest, minutes))
}

fn position(i: &str) -> IResult<&str, Position> {
    let Some((degrees, rest)) = i
        .find('.')
        .and_then(|dot| dot.checked_sub(2))
        .and_then(|split| i.split_at_checked(split))
    else {
        return Err(nom::Err::Error(Error::from_error_kind(i, ErrorKind::Char)));
    };

    let degrees = if degrees.is_empty() {
        0
    } else {
        consumed(nom::character::complete::u16, ErrorKind::Digit).parse(degrees)?.1
    };
    let (rest, minutes) = consumed(minutes, ErrorKind::Float).parse(rest)?;

    if minutes >= 60.0 {
        return Err(nom::Err::Error(Error::OutOfRange(i)));
    }

    Ok((
        rest,
        Position {
            degrees,
            minutes,
            cardinal: Cardinal::Unknown,
        },
    ))
}

fn millis(fraction: &str) -> u16 {
    fraction
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(3)
        .fold(0, |millis, digit| millis * 10 + u16::from(digit - b'0'))
}

fn clock(i: &str) -> IResult<&str, time::Time> {
    let (rest, (hour, minute, second)) = (two_digits, two_digits, two_digits).parse(i)?;
    let (rest, fraction) = opt(preceded(char('.'), digit0)).parse(rest)?;

    let time = time::Time::from_hms_milli(hour, minute, second, fraction.map_or(0, millis))
        .map_err(|_| nom::Err::Error(Error::OutOfRange(i)))?;

    Ok((rest, time))
}

fn calendar(i: &str) -> IResult<&str, time::Date> {
    let (rest, (day, month, year)) = (two_digits, two_digits, two_digits).parse(i)?;

    let year = match year {
        69..=99 => 1900 + i32::from(year),
        _ => 2000 + i32::from(year),
    };

    let date = time::Month::try_from(month)
        .and_then(|month| time::Date::from_calendar_date(year, month, day))
        .map_err(|_| nom::Err::Error(Error::OutOfRange(i)))?;

    Ok((rest, date))
}

/// Decodes a `DDMM.MMMM` or `DDDMM.MMMM` coordinate.
///
/// The integer minutes are the two digits before the decimal point; everything before
/// them is whole degrees. The returned position's cardinal is [`Cardinal::Unknown`];
/// the direction arrives in a separate field.
///
/// # Examples
///
/// ```rust
/// use nmea_dispatch::decode::decode_position;
///
/// let latitude = decode_position("4807.038").unwrap();
/// assert_eq!(latitude.degrees, 48);
/// assert!((latitude.minutes - 7.038).abs() < 1e-3);
///
/// assert!(decode_position("4807038").is_err());
/// ```
pub fn decode_position(field: &str) -> Result<Position, FieldError> {
    if field.is_empty() {
        return Err(FieldError::Empty);
    }

    let (_, position) = position(field)?;
    Ok(position)
}

/// Decodes a single-letter cardinal direction.
///
/// Anything other than `N`, `E`, `S` or `W`, including an empty field, is
/// [`Cardinal::Unknown`].
pub fn decode_cardinal(field: &str) -> Cardinal {
    match field {
        "N" => Cardinal::North,
        "E" => Cardinal::East,
        "S" => Cardinal::South,
        "W" => Cardinal::West,
        _ => Cardinal::Unknown,
    }
}

/// Decodes an `HHMMSS` time of day, with optional fractional seconds, into
/// `timestamp.time`. The date half of `timestamp` is left untouched.
///
/// ```rust
/// use nmea_dispatch::{Timestamp, decode::decode_time};
///
/// let mut timestamp = Timestamp::default();
/// decode_time("123519", &mut timestamp).unwrap();
/// assert_eq!(timestamp.time, Some(time::Time::from_hms(12, 35, 19).unwrap()));
///
/// assert!(decode_time("1A3519", &mut timestamp).is_err());
/// ```
pub fn decode_time(field: &str, timestamp: &mut Timestamp) -> Result<(), FieldError> {
    if field.is_empty() {
        return Err(FieldError::Empty);
    }

    let (_, time) = consumed(clock, ErrorKind::Eof).parse(field)?;
    timestamp.time = Some(time);
    Ok(())
}

/// Decodes a `DDMMYY` date into `timestamp.date`. The time half of `timestamp` is
/// left untouched.
///
/// Two-digit years 69 through 99 fall in the 1900s, the rest in the 2000s.
pub fn decode_date(field: &str, timestamp: &mut Timestamp) -> Result<(), FieldError> {
    if field.is_empty() {
        return Err(FieldError::Empty);
    }

    let (_, date) = consumed(calendar, ErrorKind::Eof).parse(field)?;
    timestamp.date = Some(date);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_position() {
        let latitude = decode_position("4807.038").unwrap();
        assert_eq!(latitude.degrees, 48);
        assert!((latitude.minutes - 7.038).abs() < 1e-3);
        assert_eq!(latitude.cardinal, Cardinal::Unknown);

        let longitude = decode_position("01131.000").unwrap();
        assert_eq!(longitude.degrees, 11);
        assert!((longitude.minutes - 31.0).abs() < 1e-3);

        let short = decode_position("807.5").unwrap();
        assert_eq!(short.degrees, 8);
        assert!((short.minutes - 7.5).abs() < 1e-3);

        let no_degrees = decode_position("07.5").unwrap();
        assert_eq!(no_degrees.degrees, 0);
    }

    #[test]
    fn test_decode_position_keeps_fractional_minutes() {
        let cases = [
            ("4807.038", 48, 7.038),
            ("4916.45", 49, 16.45),
            ("12311.12", 123, 11.12),
            ("4404.14036", 44, 4.14036),
            ("0000.0001", 0, 0.0001),
            ("5959.", 59, 59.0),
        ];

        for (field, degrees, minutes) in cases {
            let position = decode_position(field).unwrap();
            assert_eq!(position.degrees, degrees, "{field}");
            assert!((position.minutes - minutes).abs() < 1e-9, "{field}: {position:?}");
        }
    }

    #[test]
    fn test_decode_position_errors() {
        assert_eq!(decode_position(""), Err(FieldError::Empty));
        assert!(decode_position("4807038").is_err());
        assert!(decode_position("7.5").is_err());
        assert!(decode_position("4A07.038").is_err());
        assert!(decode_position("48X7.038").is_err());
        assert!(decode_position("4807.03X").is_err());
        assert_eq!(decode_position("4875.000"), Err(FieldError::OutOfRange));
    }

    #[test]
    fn test_decode_cardinal() {
        assert_eq!(decode_cardinal("N"), Cardinal::North);
        assert_eq!(decode_cardinal("E"), Cardinal::East);
        assert_eq!(decode_cardinal("S"), Cardinal::South);
        assert_eq!(decode_cardinal("W"), Cardinal::West);
        assert_eq!(decode_cardinal("X"), Cardinal::Unknown);
        assert_eq!(decode_cardinal(""), Cardinal::Unknown);
    }

    #[test]
    fn test_decode_time() {
        let mut timestamp = Timestamp::default();
        decode_time("123519", &mut timestamp).unwrap();
        assert_eq!(timestamp.time, time::Time::from_hms(12, 35, 19).ok());
        assert_eq!(timestamp.date, None);

        decode_time("001043.25", &mut timestamp).unwrap();
        assert_eq!(timestamp.time, time::Time::from_hms_milli(0, 10, 43, 250).ok());

        assert_eq!(decode_time("", &mut timestamp), Err(FieldError::Empty));
        assert!(decode_time("1A3519", &mut timestamp).is_err());
        assert!(decode_time("12351", &mut timestamp).is_err());
        assert!(decode_time("1235190", &mut timestamp).is_err());
        assert_eq!(
            decode_time("253519", &mut timestamp),
            Err(FieldError::OutOfRange)
        );
    }

    #[test]
    fn test_decode_date() {
        let mut timestamp = Timestamp::default();
        decode_date("230394", &mut timestamp).unwrap();

        let date = timestamp.date.unwrap();
        assert_eq!(date.day(), 23);
        assert_eq!(date.month(), time::Month::March);
        assert_eq!(u8::from(date.month()) - 1, 2);
        assert_eq!(date.year(), 1994);

        decode_date("010125", &mut timestamp).unwrap();
        assert_eq!(timestamp.date.map(|date| date.year()), Some(2025));

        assert!(decode_date("320394", &mut timestamp).is_err());
        assert!(decode_date("231394", &mut timestamp).is_err());
        assert!(decode_date("23039", &mut timestamp).is_err());
    }

    #[test]
    fn test_time_and_date_accumulate() {
        let mut timestamp = Timestamp::default();
        decode_date("230394", &mut timestamp).unwrap();
        decode_time("123519", &mut timestamp).unwrap();

        let datetime = timestamp.datetime().unwrap();
        assert_eq!(datetime.year(), 1994);
        assert_eq!(datetime.hour(), 12);
        assert_eq!(datetime.second(), 19);
    }
}
