use std::collections::HashMap;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Expr, Fields, Ident, Result};

use crate::{config::Config, meta};

struct Slot {
    index: usize,
    member: Ident,
    setter: Expr,
}

fn collect_slots(input: &DeriveInput) -> Result<Vec<Slot>> {
    let Data::Struct(datastruct) = &input.data else {
        return Err(Error::new(
            input.ident.span(),
            "nmea-dispatch-derive: Only structs are supported",
        ));
    };
    let Fields::Named(fields) = &datastruct.fields else {
        return Err(Error::new(
            input.ident.span(),
            "nmea-dispatch-derive: Only structs with named members are supported",
        ));
    };

    let mut claimed: HashMap<usize, Ident> = HashMap::new();
    let mut slots = vec![];

    for field in &fields.named {
        let Some(member) = &field.ident else {
            continue;
        };

        for attribute in meta::parse_field_attributes(&field.attrs)? {
            if let Some(owner) = claimed.get(&attribute.index) {
                return Err(Error::new(
                    attribute.span(),
                    format!(
                        "nmea-dispatch-derive: Field index {} is already mapped to `{owner}`",
                        attribute.index
                    ),
                ));
            }
            claimed.insert(attribute.index, member.clone());

            slots.push(Slot {
                index: attribute.index,
                member: member.clone(),
                setter: attribute.setter,
            });
        }
    }

    slots.sort_by_key(|slot| slot.index);
    Ok(slots)
}

pub fn generate_field_map_impl(input: &DeriveInput) -> Result<TokenStream> {
    meta::reject_top_level_attributes(&input.attrs)?;

    let config = Config::new();
    let slots = collect_slots(input)?;

    let krate = &config.crate_path;
    let index_name = &config.index_name;
    let field_name = &config.field_name;

    let table = slots.iter().map(|Slot { index, member, .. }| {
        let member = member.to_string();
        quote! { #krate::FieldSlot { index: #index, member: #member } }
    });

    let arms = slots.iter().map(
        |Slot {
             index,
             member,
             setter,
         }| {
            quote! { #index => (#setter)(&mut self.#member, #field_name), }
        },
    );

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #krate::FieldMap for #name #ty_generics #where_clause {
            const FIELDS: &'static [#krate::FieldSlot] = &[#(#table),*];

            fn parse_field(
                &mut self,
                #index_name: usize,
                #field_name: &str,
            ) -> ::core::result::Result<(), #krate::FieldError> {
                match #index_name {
                    #(#arms)*
                    _ => ::core::result::Result::Ok(()),
                }
            }
        }
    })
}
