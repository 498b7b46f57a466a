//! # Derive macro for NMEA 0183 sentence records
//!
//! `nmea0183-dispatch-derive` provides `#[derive(NmeaDecode)]` for
//! [`nmea0183-dispatch`]. The generated decoder reads one data field per
//! struct field, in declaration order, from a `Fields` cursor.
//!
//! Field attributes:
//!
//! - `#[nmea(parser(expr))]` - decode with `expr`, a function or closure
//!   taking `&mut Fields` and returning `Result<T, Error>`. It may consume any
//!   number of fields.
//! - `#[nmea(parse_as(Type))]` - decode the field as `Type` instead.
//! - `#[nmea(map(expr))]` - apply `expr` to the decoded value.
//! - `#[nmea(ignore)]` - consume nothing, use `Default::default()`.
//! - `#[nmea(skip_before(n))]`, `#[nmea(skip_after(n))]` - skip `n` fields.
//!
//! [`nmea0183-dispatch`]: https://crates.io/crates/nmea0183-dispatch

use generate::generate_nmea_decode_impl;
use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod decoder;
mod generate;
mod meta;

#[proc_macro_derive(NmeaDecode, attributes(nmea))]
pub fn derive_nmea_decode(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_nmea_decode_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
