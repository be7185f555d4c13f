use clap::Parser;
use fastx_read_counter::{
    CollapseMode, CountError, CountOptions, FormatMode, InputSource, count_sources,
};
use log::LevelFilter;
use std::io::{self, Write};
use std::process::ExitCode;

/// Count the reads in FASTA/FASTQ files.
///
/// Identifiers of the form NNN-COUNT (collapsed reads) count as COUNT reads.
/// The total is printed to stdout without a trailing newline.
#[derive(Parser, Debug)]
#[command(name = "count-reads", version)]
struct Args {
    /// Input files; use 'stdin' or '-' to read from STDIN
    files: Vec<String>,

    /// Input is FASTA (default: auto-detect per file)
    #[arg(long, overrides_with = "fastq")]
    fasta: bool,

    /// Input is FASTQ (default: auto-detect per file)
    #[arg(long, overrides_with = "fasta")]
    fastq: bool,

    /// Read-ids are collapsed (NNN-COUNT) (default: auto-detect)
    #[arg(long, overrides_with = "nocollapsed")]
    collapsed: bool,

    /// Read-ids are not collapsed; every record is one read
    #[arg(long, overrides_with = "collapsed")]
    nocollapsed: bool,

    /// Report detection results and per-file counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn options(&self) -> CountOptions {
        let format = match (self.fasta, self.fastq) {
            (true, _) => FormatMode::Fasta,
            (_, true) => FormatMode::Fastq,
            _ => FormatMode::Auto,
        };
        let collapse = match (self.collapsed, self.nocollapsed) {
            (true, _) => CollapseMode::Collapsed,
            (_, true) => CollapseMode::NotCollapsed,
            _ => CollapseMode::Auto,
        };
        CountOptions { format, collapse }
    }
}

fn run(args: &Args) -> Result<u64, CountError> {
    let sources: Vec<InputSource> = args.files.iter().map(|f| InputSource::from_name(f)).collect();
    let totals = count_sources(&sources, args.options())?;
    Ok(totals.reads)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();

    match run(&args) {
        Ok(reads) => {
            let mut out = io::stdout().lock();
            if let Err(e) = write!(out, "{reads}").and_then(|()| out.flush()) {
                eprintln!("Error: failed to write result: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
