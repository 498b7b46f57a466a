//! Typed records for the supported sentence types.
//!
//! [`Sentence`] is the sum of all records; [`decode`] runs a whole line through
//! validation, tokenizing and decoding.

pub mod parse;
mod sentences;

pub use sentences::*;
