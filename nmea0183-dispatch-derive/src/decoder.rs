use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::Type;

/// How one struct field is produced from the field cursor.
#[derive(Clone)]
pub enum Decoder {
    Default(Box<Type>),
    Map {
        decoder: Box<Decoder>,
        map: TokenStream,
    },
    Raw(TokenStream),
    Type(Box<Type>),
}

impl ToTokens for Decoder {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let token_stream = match self {
            Self::Default(ty) => {
                quote! { <#ty as ::core::default::Default>::default() }
            }
            Self::Map { decoder, map } => {
                // Route the mapping through a generic fn so closure arguments get their types.
                quote! {
                    {
                        fn __nmea_map<T, U>(value: T, map: impl FnOnce(T) -> U) -> U {
                            map(value)
                        }
                        __nmea_map(#decoder, #map)
                    }
                }
            }
            Self::Raw(decoder) => {
                quote! { (#decoder)(nmea_fields)? }
            }
            Self::Type(ty) => {
                quote! { nmea_fields.next_field::<#ty>()? }
            }
        };

        tokens.extend(token_stream);
    }
}
