//! Print fields from a replay file header.
//!
//! # Usage
//!
//! ```bash
//! # Print the map name
//! replay-header game.rep
//!
//! # Print every decoded field
//! replay-header --all game.rep
//!
//! # Show each field as it is decoded
//! RUST_LOG=replay_header=trace replay-header game.rep
//! ```
//!
//! Only a file that cannot be opened is an error. Short reads and other decode
//! problems are logged as warnings and the fields decoded so far are printed.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use replay_header::{
    avec::{self, FromRecord},
    header::ReplayHeader,
    sans::{self, report::TracingReporter, source::ReaderSource},
};

/// Decode the header of a replay file.
#[derive(Parser)]
#[command(name = "replay-header")]
#[command(version)]
struct Cli {
    /// Replay file to read
    path: PathBuf,

    /// Print every header field rather than just the map name
    #[arg(long)]
    all: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.all {
        // Untyped, so fields are printed under their schema names.
        let mut source = ReaderSource::new(avec::open(&cli.path)?);
        let record = sans::decode(ReplayHeader::SCHEMA, &mut source, &mut TracingReporter);

        for (name, value) in record.iter() {
            match value {
                Some(value) => println!("{name}: {value}"),
                None => println!("{name}: -"),
            }
        }
    } else {
        let header: ReplayHeader = avec::decode_file(&cli.path, &mut TracingReporter)?;
        println!("{}", header.map_name().unwrap_or_default());
    }

    Ok(())
}
