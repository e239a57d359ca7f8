use clap::Parser;
use log::{error, info};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use sx_convert::configuration::config::Config;
use sx_convert::converter::Converter;

#[derive(Parser)]
#[command(name = "sx-convert")]
#[command(version = "0.1.0")]
#[command(about = "Converts Shoutcast server logs to the SoundExchange reporting format")]
struct Args {
    /// Input log file; standard input when omitted
    #[arg(short = 'i', value_name = "PATH")]
    input: Option<PathBuf>,

    /// Output report file; standard output when omitted
    #[arg(short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Stream identifier stamped on every output row (no whitespace)
    #[arg(short = 's', default_value = "stream1")]
    stream_id: String,

    /// Fixed local-to-UTC offset as [+-]HH:MM; system local offset when omitted
    #[arg(long, value_name = "OFFSET", allow_hyphen_values = true)]
    utc_offset: Option<String>,
}

fn main() {
    // Example how to log
    // https://docs.rs/env_logger/latest/env_logger/
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .init();

    let args = Args::parse();

    let utc_offset = match &args.utc_offset {
        Some(spec) => Config::parse_offset(spec).unwrap_or_else(|e| {
            error!("{}", e);
            process::exit(1);
        }),
        None => Config::local_offset(),
    };

    let config = Config::new(args.stream_id, utc_offset).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    info!(
        "Converting with stream id {:?}, UTC offset {}",
        config.stream_id, config.utc_offset
    );

    let input: Box<dyn BufRead> = match &args.input {
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(e) => {
                error!("Unable to open input file {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Box::new(BufReader::new(io::stdin())),
    };

    let output: Box<dyn Write> = match &args.output {
        Some(path) => match File::create(path) {
            Ok(file) => Box::new(BufWriter::new(file)),
            Err(e) => {
                error!("Unable to open output file {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Box::new(BufWriter::new(io::stdout())),
    };

    match Converter::new(config).run(input, output) {
        Ok(rows) => info!("Conversion finished, {} rows written", rows),
        Err(e) => {
            error!("Conversion failed: {}", e);
            process::exit(1);
        }
    }
}
