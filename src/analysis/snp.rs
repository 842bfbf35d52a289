//! Single-nucleotide polymorphism detection between two sequences.
//!
//! The outcome is explicit: `Ok` with an empty position list means the
//! sequences agree, while `Err` means they could not be compared at all.

use std::fmt;
use std::path::Path;

use thiserror::Error;

use crate::fasta::{self, ParseError};

/// Non-fatal condition noticed while comparing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnpWarning {
    /// Sequences differ in length; only the common prefix was compared.
    LengthMismatch { reference: usize, query: usize },
}

impl fmt::Display for SnpWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnpWarning::LengthMismatch { reference, query } => write!(
                f,
                "Warning: The sequences are not of same length (reference: {}, query: {})",
                reference, query
            ),
        }
    }
}

/// Reasons why two sequences could not be compared.
#[derive(Error, Debug)]
pub enum SnpError {
    #[error("{}", describe_empty(*reference_empty, *query_empty))]
    EmptySequence { reference_empty: bool, query_empty: bool },

    #[error("Error reading files: {0}")]
    Ingest(#[from] ParseError),
}

fn describe_empty(reference_empty: bool, query_empty: bool) -> &'static str {
    match (reference_empty, query_empty) {
        (true, true) => "Both sequences are empty",
        (true, false) => "Reference sequence is empty",
        _ => "Query sequence is empty",
    }
}

/// Positions where the reference and query differ.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnpReport {
    /// 0-based, ascending
    pub positions: Vec<usize>,
    pub warning: Option<SnpWarning>,
}

impl SnpReport {
    /// Returns true if no differing position was found.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Compares `reference` and `query` position by position.
///
/// Only the first `min(len(reference), len(query))` characters are compared;
/// a length difference is reported as a warning in the returned report.
pub fn detect_snps(reference: &str, query: &str) -> Result<SnpReport, SnpError> {
    let reference_len = reference.chars().count();
    let query_len = query.chars().count();

    if reference_len == 0 || query_len == 0 {
        return Err(SnpError::EmptySequence {
            reference_empty: reference_len == 0,
            query_empty: query_len == 0,
        });
    }

    let warning = (reference_len != query_len).then_some(SnpWarning::LengthMismatch {
        reference: reference_len,
        query: query_len,
    });

    let positions = reference
        .chars()
        .zip(query.chars())
        .enumerate()
        .filter(|(_, (r, q))| r != q)
        .map(|(i, _)| i)
        .collect();

    Ok(SnpReport { positions, warning })
}

/// Parses two FASTA byte buffers and compares them.
pub fn detect_snps_in_bytes(reference: &[u8], query: &[u8]) -> Result<SnpReport, SnpError> {
    let reference = fasta::parse_bytes(reference)?;
    let query = fasta::parse_bytes(query)?;
    detect_snps(&reference, &query)
}

/// Parses two FASTA files and compares them.
pub fn detect_snps_in_files<P: AsRef<Path>, Q: AsRef<Path>>(
    reference: P,
    query: Q,
) -> Result<SnpReport, SnpError> {
    let reference = fasta::parse_file(reference)?;
    let query = fasta::parse_file(query)?;
    detect_snps(&reference, &query)
}
