//! # Field Setters
//!
//! Each setter decodes one field and stores the result in a record member. They are the
//! targets of `#[nmea(at(index, setter))]` attributes, and all share the shape
//! `fn(&mut Member, &str) -> Result<(), FieldError>`.
//!
//! On failure a setter leaves its member as it was, except for the cardinal setters,
//! which store [`Cardinal::Unknown`] before reporting the error.

use nom::error::ErrorKind;

use crate::{
    Cardinal, FieldError, FieldValue, Position, Timestamp,
    decode::{decode_cardinal, decode_date, decode_position, decode_time},
};

/// Stores the degrees and minutes of a coordinate, keeping its cardinal direction.
pub fn position(position: &mut Position, field: &str) -> Result<(), FieldError> {
    let decoded = decode_position(field)?;
    position.degrees = decoded.degrees;
    position.minutes = decoded.minutes;
    Ok(())
}

/// Stores the cardinal direction of a coordinate.
pub fn cardinal(position: &mut Position, field: &str) -> Result<(), FieldError> {
    direction(&mut position.cardinal, field)
}

/// Stores a standalone cardinal direction; anything but `N`, `E`, `S`, `W` is an error.
pub fn direction(cardinal: &mut Cardinal, field: &str) -> Result<(), FieldError> {
    *cardinal = decode_cardinal(field);

    match cardinal {
        Cardinal::Unknown => Err(FieldError::Malformed(ErrorKind::OneOf)),
        _ => Ok(()),
    }
}

/// Stores the time of day half of a timestamp.
pub fn time(timestamp: &mut Timestamp, field: &str) -> Result<(), FieldError> {
    decode_time(field, timestamp)
}

/// Stores the date half of a timestamp.
pub fn date(timestamp: &mut Timestamp, field: &str) -> Result<(), FieldError> {
    decode_date(field, timestamp)
}

/// Stores a scalar decoded through [`FieldValue`].
pub fn value<T: FieldValue>(value: &mut Option<T>, field: &str) -> Result<(), FieldError> {
    *value = Some(T::from_field(field)?);
    Ok(())
}

/// Stores a status flag: `true` exactly when the field is `A`.
pub fn flag(flag: &mut bool, field: &str) -> Result<(), FieldError> {
    *flag = field == "A";
    Ok(())
}
