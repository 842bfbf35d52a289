//! Sequence analyses.
//!
//! Every analysis is a pure function over a borrowed sequence:
//! - `composition`: character counts, purine/pyrimidine counts and percentages
//! - `strand`: reverse complement and DNA to mRNA transcription
//! - `restriction`: palindromic restriction-site search
//! - `gc`: sliding-window GC content
//! - `snp`: positional differences between two sequences
//!
//! Positions and lengths are counted in characters, not bytes.
//!
//! [`analyze`] runs all single-sequence analyses with one set of
//! [`AnalysisSettings`] and bundles the results in a [`SequenceReport`].

pub mod composition;
pub mod gc;
pub mod restriction;
pub mod snp;
pub mod strand;

use std::ops::RangeInclusive;

use thiserror::Error;

use composition::{CompositionReport, PercentageReport, PurinePyrimidineReport};
use gc::GcProfile;
use restriction::{PalindromeMode, RestrictionSite};

/// Default GC window size.
pub const DEFAULT_WINDOW_SIZE: usize = 5;
/// Window sizes offered by the dashboard.
pub const WINDOW_SIZE_RANGE: RangeInclusive<usize> = 3..=10;
/// Default minimum restriction-site length.
pub const DEFAULT_MIN_SITE_LENGTH: usize = 4;
/// Default maximum restriction-site length.
pub const DEFAULT_MAX_SITE_LENGTH: usize = 8;

/// Errors raised by the analyses themselves.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("GC window size must be positive")]
    ZeroWindow,
}

/// Parameters shared by the single-sequence analyses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisSettings {
    /// Sliding window size for GC content
    pub window_size: usize,
    /// Shortest restriction site reported
    pub min_site_length: usize,
    /// Longest restriction site reported
    pub max_site_length: usize,
    /// Palindrome definition used for restriction sites
    pub palindrome_mode: PalindromeMode,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            min_site_length: DEFAULT_MIN_SITE_LENGTH,
            max_site_length: DEFAULT_MAX_SITE_LENGTH,
            palindrome_mode: PalindromeMode::Literal,
        }
    }
}

/// Results of every single-sequence analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceReport {
    /// Sequence length in characters
    pub length: usize,
    pub composition: CompositionReport,
    pub purine_pyrimidine: PurinePyrimidineReport,
    pub percentages: PercentageReport,
    pub reverse_complement: String,
    pub restriction_sites: Vec<RestrictionSite>,
    pub gc_profile: GcProfile,
    pub mrna: String,
}

/// Runs all single-sequence analyses on `seq`.
pub fn analyze(seq: &str, settings: &AnalysisSettings) -> Result<SequenceReport, AnalysisError> {
    let composition = composition::count(seq);
    let purine_pyrimidine = composition::purine_pyrimidine(&composition);

    Ok(SequenceReport {
        length: seq.chars().count(),
        purine_pyrimidine,
        composition,
        percentages: composition::percentages(seq),
        reverse_complement: strand::reverse_complement(seq),
        restriction_sites: restriction::find_restriction_sites_with(
            seq,
            settings.min_site_length,
            settings.max_site_length,
            settings.palindrome_mode,
        ),
        gc_profile: gc::gc_content(seq, settings.window_size)?,
        mrna: strand::transcribe(seq),
    })
}
