use proc_macro2::TokenStream;
use syn::{Fields, Result, Type, parse2};

use crate::{
    decoder::Decoder,
    generate::attribute_arg,
    meta::{self, MetaAttribute, MetaAttributeType},
};

pub struct FieldDecoder {
    pub variable_name: String,
    pub ty: Type,
    pub decoder: Decoder,
    pub skip_before: Option<TokenStream>,
    pub skip_after: Option<TokenStream>,
}

pub struct FieldDecoders {
    pub empty: bool,
    pub unnamed: bool,
    pub decoders: Vec<FieldDecoder>,
}

impl FieldDecoders {
    pub fn from_fields(fields: &Fields) -> Result<Self> {
        let (empty, unnamed) = match fields {
            Fields::Named(_) => (false, false),
            Fields::Unnamed(_) => (false, true),
            Fields::Unit => (true, false),
        };

        let decoders = fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let variable_name = field.ident.as_ref().map_or_else(
                    || format!("__nmea_field_{index}"),
                    |ident| ident.to_string(),
                );
                let attributes = meta::parse_field_level_attributes(&field.attrs)?;

                Ok(FieldDecoder {
                    variable_name,
                    ty: field.ty.clone(),
                    decoder: Self::get_decoder(&field.ty, &attributes)?,
                    skip_before: attribute_arg(&attributes, MetaAttributeType::SkipBefore),
                    skip_after: attribute_arg(&attributes, MetaAttributeType::SkipAfter),
                })
            })
            .collect::<Result<_>>()?;

        Ok(Self {
            empty,
            unnamed,
            decoders,
        })
    }

    /// Attributes apply outermost first: `map(f), parse_as(T)` decodes a `T`
    /// and then maps it with `f`.
    fn get_decoder(ty: &Type, attributes: &[MetaAttribute]) -> Result<Decoder> {
        let mut attributes = attributes;
        while let Some((attribute, rest)) = attributes.split_first() {
            match attribute.r#type {
                MetaAttributeType::Parser => {
                    return Ok(Decoder::Raw(attribute.arg()));
                }
                MetaAttributeType::ParseAs => {
                    let parse_as_type = parse2::<Type>(attribute.arg())?;
                    return Self::get_decoder(&parse_as_type, rest);
                }
                MetaAttributeType::Ignore => {
                    return Ok(Decoder::Default(Box::new(ty.clone())));
                }
                MetaAttributeType::Map => {
                    let decoder = Self::get_decoder(ty, rest)?;
                    return Ok(Decoder::Map {
                        decoder: Box::new(decoder),
                        map: attribute.arg(),
                    });
                }
                MetaAttributeType::SkipAfter | MetaAttributeType::SkipBefore => {}
            }

            attributes = rest;
        }

        Ok(Decoder::Type(Box::new(ty.clone())))
    }
}
