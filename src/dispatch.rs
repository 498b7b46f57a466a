use std::{fmt, io::BufRead, mem};

use log::{debug, trace};

use crate::{
    ChecksumMode, Error, GsvAccumulator, SentenceParser,
    nmea_content::{
        AAM, ALM, APA, APB, BOD, BWC, DTM, GGA, GLL, GRS, GSA, GST, GSV, MSK, MSS, RMA, RMB, RMC,
        RTE, STN, Sentence, SentenceType, TRF, VBW, VTG, WCV, WPL, XTC, XTE, ZDA, ZTG,
    },
};

macro_rules! handlers {
    ($($code:ident => $slot:ident, $register:ident;)*) => {
        /// Callbacks keyed by sentence type.
        ///
        /// Each sentence type has at most one handler, receiving the decoded
        /// record by value. Types without a handler are decoded and discarded.
        ///
        /// ```rust
        /// use nmea0183_dispatch::{Handlers, nmea_content::SentenceType};
        ///
        /// let mut fixes = 0;
        /// let handlers = Handlers::new().on_gga(|_gga| fixes += 1);
        ///
        /// assert!(handlers.handles(SentenceType::GGA));
        /// assert!(!handlers.handles(SentenceType::RMC));
        /// ```
        #[derive(Default)]
        pub struct Handlers<'h> {
            $($slot: Option<Box<dyn FnMut($code) + 'h>>,)*
        }

        impl<'h> Handlers<'h> {
            $(
                #[doc = concat!("Registers the handler for ", stringify!($code), " records, replacing any previous one.")]
                #[must_use]
                pub fn $register(mut self, handler: impl FnMut($code) + 'h) -> Self {
                    self.$slot = Some(Box::new(handler));
                    self
                }
            )*

            /// Whether a handler is registered for `sentence_type`.
            pub fn handles(&self, sentence_type: SentenceType) -> bool {
                match sentence_type {
                    $(SentenceType::$code => self.$slot.is_some(),)*
                }
            }

            /// Passes `sentence` to its handler.
            ///
            /// Returns `false` when no handler is registered for its type.
            pub fn dispatch(&mut self, sentence: Sentence) -> bool {
                match sentence {
                    $(
                        Sentence::$code(record) => match &mut self.$slot {
                            Some(handler) => {
                                handler(record);
                                true
                            }
                            None => false,
                        },
                    )*
                }
            }
        }

        impl fmt::Debug for Handlers<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut set = f.debug_set();
                $(
                    if self.$slot.is_some() {
                        set.entry(&SentenceType::$code);
                    }
                )*
                set.finish()
            }
        }
    };
}

handlers! {
    AAM => aam, on_aam;
    ALM => alm, on_alm;
    APA => apa, on_apa;
    APB => apb, on_apb;
    BOD => bod, on_bod;
    BWC => bwc, on_bwc;
    DTM => dtm, on_dtm;
    GGA => gga, on_gga;
    GLL => gll, on_gll;
    GRS => grs, on_grs;
    GSA => gsa, on_gsa;
    GST => gst, on_gst;
    GSV => gsv, on_gsv;
    MSK => msk, on_msk;
    MSS => mss, on_mss;
    RMA => rma, on_rma;
    RMB => rmb, on_rmb;
    RMC => rmc, on_rmc;
    RTE => rte, on_rte;
    STN => stn, on_stn;
    TRF => trf, on_trf;
    VBW => vbw, on_vbw;
    VTG => vtg, on_vtg;
    WCV => wcv, on_wcv;
    WPL => wpl, on_wpl;
    XTC => xtc, on_xtc;
    XTE => xte, on_xte;
    ZDA => zda, on_zda;
    ZTG => ztg, on_ztg;
}

impl Handlers<'_> {
    /// Creates an empty handler table.
    pub fn new() -> Self {
        Self::default()
    }
}

/// What happened to one successfully processed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line was empty after trimming.
    Blank,
    /// The line was valid but its sentence type has no decoder.
    Unsupported,
    /// The line was decoded; `dispatched` is `false` when no handler was registered.
    Decoded {
        sentence_type: SentenceType,
        dispatched: bool,
    },
}

/// Line counts of one [`Dispatcher::process`] run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Lines read, blank ones included
    pub lines: usize,
    /// Lines decoded into a record
    pub decoded: usize,
    /// Decoded records passed to a handler
    pub dispatched: usize,
    /// Valid lines of an unsupported sentence type
    pub unsupported: usize,
    /// Lines dropped for a checksum or field error
    pub rejected: usize,
}

/// Builder for [`Dispatcher`].
#[derive(Debug, Default, Clone)]
#[must_use]
pub struct DispatcherBuilder {
    parser: SentenceParser,
}

impl DispatcherBuilder {
    /// Sets how the checksum suffix is treated.
    pub fn checksum_mode(mut self, mode: ChecksumMode) -> Self {
        self.parser = self.parser.checksum_mode(mode);
        self
    }

    /// Builds a dispatcher delivering records to `handlers`.
    pub fn build<'h>(self, handlers: Handlers<'h>) -> Dispatcher<'h> {
        Dispatcher {
            handlers,
            gsv: GsvAccumulator::new(),
            parser: self.parser,
        }
    }
}

/// Validates, decodes and dispatches sentences one line at a time.
///
/// Each dispatcher owns one [`GsvAccumulator`]; use one dispatcher per
/// sentence stream.
///
/// # Examples
///
/// ```rust
/// use nmea0183_dispatch::{Dispatcher, Handlers};
///
/// let log = "\
/// $GPRMC,162254.00,A,3723.02837,N,12159.39853,W,0.820,188.36,110706,,,A*74
/// $GPRMC,162254.00,A,3723.02837,N,12159.39853,W,0.820,188.36,110706,,,A*72
/// $GPGGA,162254.00,3723.02837,N,12159.39853,W,1,03,2.36,525.6,M,-25.6,M,,*65
/// ";
///
/// let mut speeds = Vec::new();
/// let summary = {
///     let handlers = Handlers::new().on_rmc(|rmc| speeds.push(rmc.speed));
///     Dispatcher::new(handlers).process(log.as_bytes()).unwrap()
/// };
///
/// assert_eq!(speeds, [0.82]);
/// assert_eq!(summary.decoded, 2);
/// assert_eq!(summary.dispatched, 1);
/// assert_eq!(summary.rejected, 1);
/// ```
#[derive(Debug)]
pub struct Dispatcher<'h> {
    handlers: Handlers<'h>,
    gsv: GsvAccumulator,
    parser: SentenceParser,
}

impl<'h> Dispatcher<'h> {
    /// Creates a dispatcher with a required checksum.
    pub fn new(handlers: Handlers<'h>) -> Self {
        Self::builder().build(handlers)
    }

    /// Starts configuring a dispatcher, e.g. to accept lines without a checksum.
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::default()
    }

    /// Processes one line.
    ///
    /// GSV records are added to the accumulator before they are dispatched.
    ///
    /// # Errors
    ///
    /// Returns the checksum or field error that caused the line to be dropped.
    /// Nothing is dispatched in that case.
    pub fn process_line(&mut self, line: &str) -> Result<LineOutcome, Error> {
        if line.trim().is_empty() {
            return Ok(LineOutcome::Blank);
        }

        let raw = self.parser.parse(line)?;
        let Some(sentence) = Sentence::decode(&raw)? else {
            trace!(
                "Ignoring unsupported sentence type {}{}",
                raw.talker, raw.sentence_type
            );
            return Ok(LineOutcome::Unsupported);
        };

        let sentence_type = sentence.sentence_type();
        if let Sentence::GSV(gsv) = &sentence {
            self.gsv.add(gsv);
        }

        let dispatched = self.handlers.dispatch(sentence);
        if dispatched {
            trace!("Dispatched {sentence_type} from talker {}", raw.talker);
        }

        Ok(LineOutcome::Decoded {
            sentence_type,
            dispatched,
        })
    }

    /// Reads `reader` to the end, processing every line.
    ///
    /// Malformed lines are logged and dropped.
    ///
    /// # Errors
    ///
    /// Only a failure of `reader` itself stops the loop.
    pub fn process<R: BufRead>(&mut self, mut reader: R) -> std::io::Result<Summary> {
        let mut summary = Summary::default();
        let mut buffer = Vec::new();

        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            summary.lines += 1;

            let outcome = std::str::from_utf8(&buffer)
                .map_err(|_| Error::NonAscii)
                .and_then(|line| self.process_line(line));

            match outcome {
                Ok(LineOutcome::Blank) => {}
                Ok(LineOutcome::Unsupported) => summary.unsupported += 1,
                Ok(LineOutcome::Decoded { dispatched, .. }) => {
                    summary.decoded += 1;
                    summary.dispatched += usize::from(dispatched);
                }
                Err(error) => {
                    debug!("Dropping line {}: {error}", summary.lines);
                    summary.rejected += 1;
                }
            }
        }

        debug!("Finished processing: {summary:?}");
        Ok(summary)
    }

    /// The satellites accumulated from GSV sentences so far.
    pub fn gsv(&self) -> &GsvAccumulator {
        &self.gsv
    }

    /// Takes the accumulated satellites, leaving an empty accumulator.
    pub fn take_gsv(&mut self) -> GsvAccumulator {
        mem::take(&mut self.gsv)
    }

    /// The registered handlers.
    pub fn handlers(&self) -> &Handlers<'h> {
        &self.handlers
    }

    /// Consumes the dispatcher, returning its handlers.
    pub fn into_handlers(self) -> Handlers<'h> {
        self.handlers
    }
}

/// Processes every line of `reader` with a default [`Dispatcher`].
///
/// # Errors
///
/// Returns an error only when reading from `reader` fails.
pub fn process<R: BufRead>(reader: R, handlers: Handlers<'_>) -> std::io::Result<Summary> {
    Dispatcher::new(handlers).process(reader)
}
