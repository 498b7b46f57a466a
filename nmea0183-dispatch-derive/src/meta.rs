use std::fmt::Display;

use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote};
use syn::{
    Attribute, Error, Expr, Ident, Lit, Result, Token, Type, parenthesized,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    token::Paren,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetaAttributeType {
    Ignore,
    Map,
    ParseAs,
    Parser,
    SkipAfter,
    SkipBefore,
}

impl MetaAttributeType {
    pub fn from_ident(ident: &Ident) -> Option<Self> {
        match ident.to_string().as_str() {
            "ignore" => Some(Self::Ignore),
            "map" => Some(Self::Map),
            "parse_as" => Some(Self::ParseAs),
            "parser" => Some(Self::Parser),
            "skip_after" => Some(Self::SkipAfter),
            "skip_before" => Some(Self::SkipBefore),
            _ => None,
        }
    }

    fn takes_argument(&self) -> bool {
        !matches!(self, Self::Ignore)
    }

    fn allowed_multiple(&self) -> bool {
        matches!(self, Self::Map)
    }

    /// Attributes that decide how the value itself is produced.
    fn is_source(&self) -> bool {
        matches!(self, Self::Ignore | Self::ParseAs | Self::Parser)
    }
}

impl Display for MetaAttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Ignore => "ignore",
            Self::Map => "map",
            Self::ParseAs => "parse_as",
            Self::Parser => "parser",
            Self::SkipAfter => "skip_after",
            Self::SkipBefore => "skip_before",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug)]
pub struct MetaAttribute {
    pub r#type: MetaAttributeType,
    arg: Option<TokenStream>,
    span: Span,
}

impl MetaAttribute {
    /// The attribute argument. Always present for attributes that take one.
    pub fn arg(&self) -> TokenStream {
        self.arg.clone().unwrap_or_default()
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl Parse for MetaAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let ident: Ident = input.parse()?;
        let r#type = MetaAttributeType::from_ident(&ident).ok_or_else(|| {
            Error::new(
                ident.span(),
                "nmea0183-dispatch-derive: Unknown nmea attribute",
            )
        })?;

        let arg = if r#type.takes_argument() {
            let tokens = match r#type {
                MetaAttributeType::ParseAs => parse_argument::<Type>(input)?,
                _ => parse_argument::<Expr>(input)?,
            };
            Some(tokens)
        } else {
            None
        };

        Ok(MetaAttribute {
            r#type,
            arg,
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

/// Reads `= "value"` or `(value)`.
fn parse_argument<P>(input: ParseStream) -> Result<TokenStream>
where
    P: Parse + ToTokens,
{
    if input.peek(Token![=]) {
        let _: Token![=] = input.parse()?;
        let value = Lit::parse(input)?;

        match value {
            Lit::Str(string) => {
                let parsed: P = string.parse()?;
                Ok(quote! { #parsed })
            }
            _ => Err(Error::new(
                value.span(),
                "nmea0183-dispatch-derive: Unexpected type for nmea attribute content",
            )),
        }
    } else if input.peek(Paren) {
        let content;
        parenthesized!(content in input);
        let parsed: P = content.parse()?;
        Ok(quote! { #parsed })
    } else {
        Err(Error::new(
            input.span(),
            "nmea0183-dispatch-derive: Expected '= <value>' or '(<value>)' for nmea attribute",
        ))
    }
}

/// Rejects any `#[nmea(..)]` attribute on the type itself.
pub fn reject_top_level_attributes(attrs: &[Attribute]) -> Result<()> {
    match attrs.iter().find(|attr| attr.path().is_ident("nmea")) {
        Some(attr) => Err(Error::new_spanned(
            attr,
            "nmea0183-dispatch-derive: nmea attributes are only supported on fields",
        )),
        None => Ok(()),
    }
}

pub fn parse_field_level_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    let mut seen = Vec::new();
    let mut source: Option<MetaAttributeType> = None;

    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("nmea"))
        .map(|attr| attr.parse_args::<List<MetaAttribute>>())
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flat_map(|list| list.0)
        .map(|meta_attr| {
            if !meta_attr.r#type.allowed_multiple() && seen.contains(&meta_attr.r#type) {
                return Err(Error::new(
                    meta_attr.span(),
                    format!(
                        "nmea0183-dispatch-derive: Duplicate nmea attribute `{}`",
                        meta_attr.r#type
                    ),
                ));
            }
            seen.push(meta_attr.r#type);

            // Only one of `parser`, `parse_as` or `ignore` can be used.
            if meta_attr.r#type.is_source() {
                if let Some(previous) = source {
                    return Err(Error::new(
                        meta_attr.span(),
                        format!(
                            "nmea0183-dispatch-derive: Attribute `{}` cannot be used with `{previous}` attribute.",
                            meta_attr.r#type
                        ),
                    ));
                }
                source = Some(meta_attr.r#type);
            }

            Ok(meta_attr)
        })
        .collect()
}
