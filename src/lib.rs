//! # NMEA 0183 Decode and Dispatch
//!
//! This library validates, decodes and dispatches NMEA 0183 sentences of the
//! form `$TTSSS,D1,D2,...,Dn*CC`, as emitted by GPS receivers.
//!
//! Every line goes through the same pipeline:
//!
//! 1. the checksum is validated ([`validate_checksum`], [`SentenceParser`]),
//! 2. the line is split into talker, sentence type and fields ([`tokenize`]),
//! 3. the fields are decoded into a typed record ([`nmea_content::Sentence`]),
//! 4. GSV records are fed to a [`GsvAccumulator`],
//! 5. the record is handed to the callback registered for its type ([`Handlers`]).
//!
//! Malformed lines are dropped without stopping the stream, and sentence types
//! without a decoder are ignored.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_dispatch::{Handlers, process};
//!
//! let log = "\
//! $GPGGA,162254.00,3723.02837,N,12159.39853,W,1,03,2.36,525.6,M,-25.6,M,,*65
//! $GPTXT,01,01,02,ANTSTATUS=OK*3B
//! $GPZDA,110003.00,27,03,2006,-5,00*7F
//! ";
//!
//! let mut altitudes = Vec::new();
//! let mut zones = Vec::new();
//!
//! let handlers = Handlers::new()
//!     .on_gga(|gga| altitudes.push(gga.altitude))
//!     .on_zda(|zda| zones.push(zda.timestamp.offset().whole_hours()));
//!
//! let summary = process(log.as_bytes(), handlers).unwrap();
//!
//! assert_eq!(summary.dispatched, 2);
//! assert_eq!(summary.unsupported, 1);
//! assert_eq!(altitudes, [525.6]);
//! assert_eq!(zones, [-5]);
//! ```
//!
//! Single lines can be decoded without a dispatcher with [`decode`].

mod accumulator;
mod dispatch;
pub mod error;
mod nmea0183;
pub mod nmea_content;
mod parse;

pub use accumulator::GsvAccumulator;
pub use dispatch::{Dispatcher, DispatcherBuilder, Handlers, LineOutcome, Summary, process};
pub use error::{Error, IResult};
pub use nmea_content::decode;
pub use nmea0183::*;
pub use nmea0183_dispatch_derive::NmeaDecode;
pub use parse::{Fields, NmeaDecode, NmeaField, parse_with};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
