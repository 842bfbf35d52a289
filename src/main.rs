//! HelixScope - DNA sequence analysis dashboard
//!
//! ## Usage
//!
//! ```bash
//! helixscope <sequence.fasta>
//! helixscope -w 8 -r reference.fasta -q query.fasta <sequence.fasta>
//! helixscope -o - <sequence.fasta>   # Text report on stdout
//! ```
//!
//! ## Navigation
//!
//! - `Tab` / `h` / `l`: switch analysis tab
//! - `j` / `k`: scroll
//! - `+` / `-`: GC window size
//! - `:q`: Quit
//! - `:h`: Help

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::builder::TypedValueParser;
use clap::Parser;
use log::info;

use helixscope::analysis::restriction::PalindromeMode;
use helixscope::analysis::{
    AnalysisSettings, DEFAULT_MAX_SITE_LENGTH, DEFAULT_MIN_SITE_LENGTH, DEFAULT_WINDOW_SIZE,
};
use helixscope::controller::run_app;
use helixscope::fasta::parse_file;
use helixscope::logging::{default_log_path, init_logger, LogTarget};
use helixscope::model::{AppState, LoadedSequence, SnpStatus};
use helixscope::report::write_report;

/// HelixScope - elementary DNA sequence analysis in the terminal
///
/// When run without -o/--output, opens an interactive dashboard.
/// With -o/--output, writes a text report to a file (or stdout with "-").
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// FASTA file to analyse (header lines are skipped, records are concatenated)
    file: PathBuf,

    /// Window size for GC content (3-10)
    #[arg(
        short = 'w',
        long = "window",
        default_value_t = DEFAULT_WINDOW_SIZE,
        value_parser = clap::value_parser!(u64).range(3..=10).map(|v| v as usize)
    )]
    window: usize,

    /// Minimum restriction-site length
    #[arg(long = "min-site", default_value_t = DEFAULT_MIN_SITE_LENGTH)]
    min_site: usize,

    /// Maximum restriction-site length
    #[arg(long = "max-site", default_value_t = DEFAULT_MAX_SITE_LENGTH)]
    max_site: usize,

    /// Search reverse-complement palindromes instead of literal ones
    #[arg(long = "biological-sites")]
    biological_sites: bool,

    /// Reference FASTA file for SNP detection
    #[arg(short = 'r', long = "reference", requires = "query")]
    reference: Option<PathBuf>,

    /// Query FASTA file for SNP detection
    #[arg(short = 'q', long = "query", requires = "reference")]
    query: Option<PathBuf>,

    /// Output file (writes a text report instead of opening the dashboard). Use "-" for stdout.
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log file (with -v, dashboard mode defaults to a new file in the temporary directory)
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn settings(&self) -> AnalysisSettings {
        AnalysisSettings {
            window_size: self.window,
            min_site_length: self.min_site,
            max_site_length: self.max_site,
            palindrome_mode: if self.biological_sites {
                PalindromeMode::ReverseComplement
            } else {
                PalindromeMode::Literal
            },
        }
    }
}

/// Display name of an input file.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Runs report mode: write every analysis to a file or stdout.
fn run_report_mode(state: &AppState, output: &str) -> Result<()> {
    if output == "-" {
        // Write to stdout
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_report(&mut handle, state)?;
        handle.flush()?;
    } else {
        // Write to file
        let mut file = io::BufWriter::new(
            std::fs::File::create(output).with_context(|| format!("Cannot create {}", output))?,
        );
        write_report(&mut file, state)?;
        file.flush()?;
        eprintln!("Wrote report for {} to {}", state.sequence.name, output);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.min_site == 0 {
        anyhow::bail!("Minimum restriction-site length must be at least 1");
    }

    let log_target = match (&args.log_file, &args.output) {
        (Some(path), _) => Some(LogTarget::File(path.clone())),
        (None, Some(_)) => Some(LogTarget::Stderr),
        (None, None) if args.verbose > 0 => Some(LogTarget::File(default_log_path())),
        (None, None) => None,
    };
    if let Some(target) = &log_target {
        init_logger(target, args.verbose)?;
    }

    let data = parse_file(&args.file)?;
    let sequence = LoadedSequence::new(display_name(&args.file), data);

    let snps = match (&args.reference, &args.query) {
        (Some(reference), Some(query)) => SnpStatus::from_files(reference, query),
        _ => SnpStatus::NotRequested,
    };

    let state = AppState::new(sequence, args.settings(), snps)?;

    if let Some(output) = &args.output {
        run_report_mode(&state, output)?;
    } else {
        run_app(state)?;
        if let Some(LogTarget::File(path)) = &log_target {
            eprintln!("Log written to {}", path.display());
        }
    }

    info!("Done");
    Ok(())
}
