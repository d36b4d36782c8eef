//! kgtool - statistics for JSON and JSON-LD documents
//!
//! Usage:
//!   kgtool triples data/person.jsonld
//!   kgtool profile data/items.jsonl --lines -o summary.json
//!   kgtool fields data/items.json --unique id --value type,year
//!   kgtool digest data/items.jsonl --lines

use clap::{Parser, Subcommand};
use kgtool::config::KgToolConfig;
use kgtool::json::{load_json, load_json_lines, sha1_hex, to_debug_string, write_json, write_lines};
use kgtool::stats::{stat_fields, Normalizer, Profiler, TripleCounter};
use kgtool::{Error, LogSink, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "kgtool", version)]
#[command(about = "kgtool - Triple counting and corpus profiling for JSON and JSON-LD")]
struct Args {
    /// Verbosity, repeat for more (-v warnings, -vv info, -vvv debug)
    #[arg(short, long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbosity: u8,

    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write the result to this file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count the triples of a JSON-LD document
    Triples {
        /// Input file
        input: PathBuf,

        /// Read one document per line and sum their counts
        #[arg(long)]
        lines: bool,
    },

    /// Per-field population counts and a sample record
    Profile {
        /// Input file holding a JSON array of records
        input: PathBuf,

        /// Read one record per line instead
        #[arg(long)]
        lines: bool,
    },

    /// Value breakdown of selected fields
    Fields {
        /// Input file holding a JSON array of records
        input: PathBuf,

        /// Read one record per line instead
        #[arg(long)]
        lines: bool,

        /// Fields whose distinct and non-empty values are counted (comma-separated)
        #[arg(long, value_delimiter = ',')]
        unique: Vec<String>,

        /// Fields whose normalized values are counted (comma-separated)
        #[arg(long, value_delimiter = ',')]
        value: Vec<String>,
    },

    /// SHA-1 fingerprint of each document
    Digest {
        /// Input file
        input: PathBuf,

        /// Read one document per line
        #[arg(long)]
        lines: bool,
    },
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    stderrlog::new().verbosity(usize::from(args.verbosity)).init()?;

    let config = match &args.config {
        Some(path) => KgToolConfig::from_file(path)?,
        None => KgToolConfig::default(),
    };
    log::debug!("configuration: {:?}", config);

    run(&args, &config)?;
    Ok(())
}

fn run(args: &Args, config: &KgToolConfig) -> Result<()> {
    let output = args.output.as_deref();

    match &args.command {
        Command::Triples { input, lines } => {
            let mut counter = TripleCounter::new();
            for doc in load_documents(input, *lines, config)? {
                counter.visit(&doc);
            }
            let table = counter.finish();
            log::info!("{} triples in {}", table.get("triple"), input.display());
            emit(output, &table)
        }
        Command::Profile { input, lines } => {
            let records = load_records(input, *lines, config)?;
            let mut profiler = Profiler::new(config.normalize.clone())?;
            for record in &records {
                profiler.add(record);
            }
            let profile = profiler.finish();
            for diagnostic in &profile.diagnostics {
                log::warn!("{}", diagnostic);
            }
            emit(output, &profile)
        }
        Command::Fields { input, lines, unique, value } => {
            if unique.is_empty() && value.is_empty() {
                return Err(Error::InvalidInput(
                    "at least one of --unique or --value is required".to_string(),
                ));
            }
            let records = load_records(input, *lines, config)?;
            let normalizer = Normalizer::new(config.normalize.clone())?;
            let table = stat_fields(&records, unique, value, &normalizer, &mut LogSink);
            log::info!("{}", to_debug_string(&table)?);
            emit(output, &table)
        }
        Command::Digest { input, lines } => {
            let digests: Vec<String> =
                load_documents(input, *lines, config)?.iter().map(sha1_hex).collect();
            match output {
                Some(path) => write_lines(path, &digests),
                None => {
                    for digest in &digests {
                        println!("{}", digest);
                    }
                    Ok(())
                }
            }
        }
    }
}

/// One document, or one per line.
fn load_documents(input: &Path, lines: bool, config: &KgToolConfig) -> Result<Vec<Value>> {
    if lines {
        load_json_lines(input, &config.reader)
    } else {
        Ok(vec![load_json(input)?])
    }
}

/// Records from a JSON-lines file or from a file holding a JSON array.
fn load_records(input: &Path, lines: bool, config: &KgToolConfig) -> Result<Vec<Value>> {
    if lines {
        return load_json_lines(input, &config.reader);
    }
    match load_json(input)? {
        Value::Array(items) => Ok(items),
        _ => Err(Error::InvalidInput("expect list of items".to_string())),
    }
}

fn emit<T: Serialize>(output: Option<&Path>, data: &T) -> Result<()> {
    match output {
        Some(path) => {
            write_json(path, data)?;
            log::info!("wrote {}", path.display());
            Ok(())
        }
        None => {
            println!("{}", to_debug_string(data)?);
            Ok(())
        }
    }
}
