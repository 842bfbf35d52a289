//! FASTA file parser.
//!
//! This module extracts the raw nucleotide sequence from FASTA text.
//! Header lines are skipped and every other line is trimmed and appended,
//! so a multi-record file collapses into one continuous sequence.
//!
//! ## FASTA Format
//!
//! ```text
//! >sequence_identifier optional description
//! ACGTACGTACGT...
//! TGCATGCATGCA...
//! ```
//!
//! No validation of the resulting characters is performed: anything that is
//! not a header ends up in the sequence and flows through to the analyses.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::str::Utf8Error;

use thiserror::Error;

/// Errors that can occur while reading FASTA input.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read input: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid UTF-8 at line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: Utf8Error,
    },
}

/// Result type for FASTA operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Concatenates the sequence lines of already decoded FASTA text.
///
/// A line is a header if its very first character is `>`; the check is made
/// before trimming, so an indented `>` is treated as sequence data.
///
/// # Examples
///
/// ```
/// use helixscope::fasta::parse_lines;
///
/// let seq = parse_lines([">h1", "ACGT", "AC", ">h2", "GG"]);
/// assert_eq!(seq, "ACGTACGG");
/// ```
pub fn parse_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sequence = String::new();
    for line in lines {
        let line = line.as_ref();
        if line.starts_with('>') {
            continue;
        }
        sequence.push_str(line.trim());
    }
    sequence
}

/// Parses raw FASTA bytes, decoding each line as UTF-8.
pub fn parse_bytes(content: &[u8]) -> ParseResult<String> {
    let mut sequence = String::new();

    for (idx, raw_line) in content.split(|&b| b == b'\n').enumerate() {
        let line = std::str::from_utf8(raw_line)
            .map_err(|source| ParseError::Decode { line: idx + 1, source })?;
        if line.starts_with('>') {
            continue;
        }
        sequence.push_str(line.trim());
    }

    Ok(sequence)
}

/// Parses FASTA content from a reader.
pub fn parse_reader<R: Read>(mut reader: R) -> ParseResult<String> {
    let mut content = Vec::new();
    reader.read_to_end(&mut content)?;
    parse_bytes(&content)
}

/// Parses a FASTA file and returns its concatenated sequence.
///
/// # Examples
///
/// ```no_run
/// use helixscope::fasta::parse_file;
///
/// let dna = parse_file("sample.fasta").unwrap();
/// println!("Loaded {} nucleotides", dna.chars().count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> ParseResult<String> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_reader(BufReader::new(file))
}
