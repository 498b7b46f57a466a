use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

use clap::Parser;
use log::{LevelFilter, info};
use nmea0183_dispatch::{ChecksumMode, Dispatcher, Handlers};

/// Decodes an NMEA 0183 log and prints every position-related record
#[derive(Parser)]
struct Args {
    /// Log file to read, stdin when omitted
    input: Option<PathBuf>,

    /// Accept sentences without a `*hh` checksum
    #[arg(long)]
    optional_checksum: bool,

    /// Print satellites in view after the log is processed
    #[arg(short, long)]
    satellites: bool,

    /// Increase log verbosity (-v for dropped lines, -vv for every dispatch)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .format_timestamp(None)
        .format_target(false)
        .filter_level(level)
        .parse_env("LOG_LEVEL")
        .init();

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };

    let mode = if args.optional_checksum {
        ChecksumMode::Optional
    } else {
        ChecksumMode::Required
    };

    let handlers = Handlers::new()
        .on_rmc(|rmc| {
            println!(
                "RMC {} status={} lat={:.6} lon={:.6} speed={}kn course={}",
                rmc.timestamp,
                rmc.status.unwrap_or('-'),
                rmc.latitude,
                rmc.longitude,
                rmc.speed,
                rmc.course
            )
        })
        .on_gga(|gga| {
            println!(
                "GGA {} quality={} sats={} hdop={} alt={}m",
                gga.taken.time(),
                gga.quality,
                gga.satellite_count,
                gga.hdop,
                gga.altitude
            )
        })
        .on_gll(|gll| println!("{gll:?}"))
        .on_gsa(|gsa| {
            println!(
                "GSA {} sats={:?} pdop={} hdop={} vdop={}",
                gsa.fix_mode, gsa.satellites, gsa.pdop, gsa.hdop, gsa.vdop
            )
        })
        .on_vtg(|vtg| println!("{vtg:?}"))
        .on_zda(|zda| println!("ZDA {}", zda.timestamp))
        .on_gst(|gst| println!("{gst:?}"))
        .on_aam(|aam| println!("{aam:?}"));

    let mut dispatcher = Dispatcher::builder().checksum_mode(mode).build(handlers);
    let summary = dispatcher.process(reader)?;

    if args.satellites {
        let gsv = dispatcher.gsv();
        println!(
            "{} satellites in view, {} entries received",
            gsv.satellites_in_view,
            gsv.satellites.len()
        );
        for sat in &gsv.satellites {
            println!(
                "  PRN {:3} elevation {:3} azimuth {:3} SNR {:2}",
                sat.prn, sat.elevation, sat.azimuth, sat.snr
            );
        }
    }

    info!(
        "{} lines: {} decoded, {} dispatched, {} unsupported, {} rejected",
        summary.lines, summary.decoded, summary.dispatched, summary.unsupported, summary.rejected
    );

    Ok(())
}
