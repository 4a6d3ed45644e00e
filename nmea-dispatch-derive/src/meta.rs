use proc_macro2::Span;
use syn::{
    Attribute, Error, Expr, Ident, LitInt, Result, Token, parenthesized,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

/// One `at(<index>, <setter>)` entry of a member's `#[nmea(...)]` attribute.
pub struct FieldAttribute {
    pub index: usize,
    pub setter: Expr,
    span: Span,
}

impl FieldAttribute {
    pub fn span(&self) -> Span {
        self.span
    }
}

impl Parse for FieldAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let ident: Ident = input.parse()?;
        if ident != "at" {
            return Err(Error::new(
                ident.span(),
                "nmea-dispatch-derive: Unknown nmea attribute, expected `at(<index>, <setter>)`",
            ));
        }

        let content;
        parenthesized!(content in input);
        let index: LitInt = content.parse()?;
        let _: Token![,] = content.parse()?;
        let setter: Expr = content.parse()?;
        if content.peek(Token![,]) {
            let _: Token![,] = content.parse()?;
        }
        if !content.is_empty() {
            return Err(content.error("nmea-dispatch-derive: Unexpected tokens after setter"));
        }

        Ok(Self {
            index: index.base10_parse()?,
            setter,
            span: ident.span(),
        })
    }
}

struct List<T: Parse>(Vec<T>);

impl<T: Parse> Parse for List<T> {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(List(
            Punctuated::<T, Token![,]>::parse_terminated(input)?
                .into_iter()
                .collect(),
        ))
    }
}

pub fn parse_field_attributes(attrs: &[Attribute]) -> Result<Vec<FieldAttribute>> {
    Ok(attrs
        .iter()
        .filter(|attr| attr.path().is_ident("nmea"))
        .map(|attr| attr.parse_args::<List<FieldAttribute>>())
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flat_map(|list| list.0)
        .collect())
}

pub fn reject_top_level_attributes(attrs: &[Attribute]) -> Result<()> {
    match attrs.iter().find(|attr| attr.path().is_ident("nmea")) {
        Some(attr) => Err(Error::new_spanned(
            attr,
            "nmea-dispatch-derive: `nmea` attributes belong on struct members",
        )),
        None => Ok(()),
    }
}
