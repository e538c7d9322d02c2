use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;

use tokfreq::config::DEFAULT_ENCODING;
use tokfreq::{Config, CorpusReport, EmptyTokenPolicy, pipeline};

#[derive(Parser, Debug)]
#[command(name = "tokfreq", version)]
#[command(about = "Count space-delimited tokens across the files of one directory")]
struct Args {
    /// Directory whose files are tokenized (subdirectories are skipped)
    input_dir: PathBuf,

    /// Shortest token length kept, in characters
    min_length: usize,

    /// Longest token length kept, in characters
    max_length: usize,

    /// Character encoding of the input files
    #[arg(long, default_value = DEFAULT_ENCODING)]
    encoding: String,

    /// Drop the empty tokens produced by consecutive spaces
    #[arg(long)]
    skip_empty_tokens: bool,

    /// List tokens in lexicographic order
    #[arg(long)]
    sort: bool,

    /// Print only the statistics
    #[arg(long)]
    no_tokens: bool,

    /// Print the statistics as JSON
    #[arg(long)]
    json: bool,

    /// Log per-file details
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let empty_tokens = if args.skip_empty_tokens { EmptyTokenPolicy::Skip } else { EmptyTokenPolicy::Keep };
    let config = Config::new(&args.input_dir, args.min_length, args.max_length)
        .and_then(|config| config.with_encoding(&args.encoding))
        .context("invalid configuration")?
        .with_empty_tokens(empty_tokens);
    debug!(config = %serde_json::to_string(&config)?, "Parsed configuration");

    let report = pipeline::run(&config)?;

    let mut out = BufWriter::new(io::stdout().lock());
    if !args.no_tokens {
        write_tokens(&mut out, &report, args.sort)?;
    }
    match report.stats() {
        Ok(stats) if args.json => {
            serde_json::to_writer(&mut out, &stats)?;
            writeln!(out)?;
        }
        Ok(stats) => writeln!(out, "{stats}")?,
        Err(e) if !e.is_fatal() => warn!("{e}"),
        Err(e) => return Err(e.into()),
    }
    out.flush()?;

    Ok(())
}

fn write_tokens(out: &mut impl Write, report: &CorpusReport, sort: bool) -> io::Result<()> {
    if sort {
        for token in report.table.sorted_tokens() {
            writeln!(out, "{token}")?;
        }
    } else {
        for token in report.table.tokens() {
            writeln!(out, "{token}")?;
        }
    }
    Ok(())
}
