use proc_macro2::Span;
use syn::{Ident, Path, parse_quote};

#[derive(Clone)]
pub struct Config {
    pub crate_path: Path,
    pub index_name: Ident,
    pub field_name: Ident,
}

impl Config {
    pub fn new() -> Self {
        Self {
            crate_path: parse_quote!(nmea_dispatch),
            index_name: Ident::new("nmea_index", Span::call_site()),
            field_name: Ident::new("nmea_field", Span::call_site()),
        }
    }
}
