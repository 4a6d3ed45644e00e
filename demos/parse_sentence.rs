//! Parses NMEA 0183 sentences given as arguments, or a few built-in samples.
//!
//! ```text
//! RUST_LOG=trace cargo run --example parse_sentence -- '$GPGLL,4916.45,N,12311.12,W,225444,A*31'
//! ```

use log::info;
use nmea_dispatch::{ChecksumMode, parse, sentences::Sentence};

const SAMPLES: [&str; 5] = [
    "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47",
    "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A",
    "$GNVTG,054.7,T,034.4,M,005.5,N,010.2,K",
    "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*48",
    "$XXGLL,4916.45,N,12311.12,W,225444,A",
];

fn report(line: &str) {
    let sentence = format!("{}\r\n", line.trim_end());

    let record = match parse(sentence.as_bytes(), ChecksumMode::Optional) {
        Ok(record) => record,
        Err(err) => {
            println!("{}: {err}", line.trim_end());
            return;
        }
    };

    match &record.sentence {
        Sentence::GGA(gga) => println!(
            "GGA lat {:.6} lon {:.6} alt {:?} sats {:?}",
            gga.latitude.to_degrees(),
            gga.longitude.to_degrees(),
            gga.altitude,
            gga.satellites
        ),
        Sentence::RMC(rmc) => println!(
            "RMC {:?} lat {:.6} lon {:.6} speed {:?}",
            rmc.time.datetime(),
            rmc.latitude.to_degrees(),
            rmc.longitude.to_degrees(),
            rmc.speed
        ),
        other => println!("{other:?}"),
    }

    if record.errors > 0 {
        println!("  {} field(s) failed to decode", record.errors);
    }
    nmea_dispatch::free(record);
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        info!("No sentences given, parsing {} samples", SAMPLES.len());
        SAMPLES.iter().for_each(|line| report(line));
    } else {
        args.iter().for_each(|line| report(line));
    }
}
