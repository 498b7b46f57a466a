use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Data, DeriveInput, Error, Generics, Ident, Result, WhereClause, parse_quote};

use crate::{
    generate::fields::FieldDecoders,
    meta::{self, MetaAttributeType},
};

mod fields;

// Usage:
// #[derive(NmeaDecode)]
// pub struct MySentence {
//     #[nmea(parser(latitude))]
//     pub latitude: f64,
//     #[nmea(ignore)]
//     pub computed_field: u32,
//     #[nmea(skip_after(1))]
//     pub altitude: f32,
// }

struct Struct<'a> {
    name: &'a Ident,
    generics: &'a Generics,
    fields: FieldDecoders,
}

impl Struct<'_> {
    fn generate_decode_body(&self) -> TokenStream {
        let name = self.name;

        if self.fields.empty {
            return quote! {
                let _ = nmea_fields;
                Ok(#name)
            };
        }

        let statements = self.fields.decoders.iter().map(|field| {
            let variable = Ident::new(&field.variable_name, Span::call_site());
            let ty = &field.ty;
            let decoder = &field.decoder;

            let skip_before = field.skip_before.as_ref().map(|count| {
                quote! { nmea_fields.skip(#count as usize); }
            });
            let skip_after = field.skip_after.as_ref().map(|count| {
                quote! { nmea_fields.skip(#count as usize); }
            });

            quote! {
                #skip_before
                let #variable: #ty = #decoder;
                #skip_after
            }
        });

        let variables = self
            .fields
            .decoders
            .iter()
            .map(|field| Ident::new(&field.variable_name, Span::call_site()));

        let struct_def = if self.fields.unnamed {
            quote! { #name(#(#variables),*) }
        } else {
            quote! { #name { #(#variables),* } }
        };

        quote! {
            #(#statements)*
            Ok(#struct_def)
        }
    }

    fn generate_impl(&self) -> TokenStream {
        let name = self.name;
        let body = self.generate_decode_body();
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let mut impl_where: WhereClause = if where_clause.is_some() {
            parse_quote!(#where_clause)
        } else {
            parse_quote!(where)
        };

        // Generic parameters are decoded as plain fields
        for param in self.generics.type_params() {
            let param = &param.ident;
            impl_where.predicates.push(parse_quote!(
                #param: nmea0183_dispatch::NmeaField + ::core::default::Default
            ));
        }

        quote! {
            impl #impl_generics nmea0183_dispatch::NmeaDecode for #name #ty_generics #impl_where {
                fn decode(
                    nmea_fields: &mut nmea0183_dispatch::Fields<'_>,
                ) -> ::core::result::Result<Self, nmea0183_dispatch::Error> {
                    #body
                }
            }
        }
    }
}

pub fn generate_nmea_decode_impl(input: &DeriveInput) -> Result<TokenStream> {
    meta::reject_top_level_attributes(&input.attrs)?;

    let Data::Struct(datastruct) = &input.data else {
        return Err(Error::new(
            input.ident.span(),
            "nmea0183-dispatch-derive: Only structs are supported",
        ));
    };

    let generator = Struct {
        name: &input.ident,
        generics: &input.generics,
        fields: FieldDecoders::from_fields(&datastruct.fields)?,
    };

    Ok(generator.generate_impl())
}

pub fn attribute_arg(
    attributes: &[meta::MetaAttribute],
    r#type: MetaAttributeType,
) -> Option<TokenStream> {
    attributes
        .iter()
        .find(|attribute| attribute.r#type == r#type)
        .map(|attribute| attribute.arg())
}
