//! # Positional field maps for NMEA 0183 records
//!
//! `nmea-dispatch-derive` provides `#[derive(FieldMap)]` for the record structs of
//! [`nmea-dispatch`]. Each named member carries one or more `#[nmea(at(index, setter))]`
//! attributes binding a comma-delimited field position to a setter function. The derive
//! expands them into the per-field switch the parse engine drives, plus a static table
//! describing which member each field index feeds.
//!
//! ```rust,ignore
//! use nmea_dispatch::{FieldMap, assign};
//!
//! #[derive(Debug, Default, FieldMap)]
//! pub struct Fix {
//!     #[nmea(at(0, assign::time))]
//!     pub time: Timestamp,
//!     #[nmea(at(1, assign::position), at(2, assign::cardinal))]
//!     pub latitude: Position,
//! }
//! ```
//!
//! A setter has the shape `fn(&mut Member, &str) -> Result<(), FieldError>`. Field
//! indices that no member claims are ignored by the generated switch.
//!
//! [`nmea-dispatch`]: https://crates.io/crates/nmea-dispatch

use generate::generate_field_map_impl;
use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod config;
mod generate;
mod meta;

#[proc_macro_derive(FieldMap, attributes(nmea))]
pub fn derive_field_map(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_field_map_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
