//! Plain-text report, written when the dashboard is not wanted.
//!
//! Sections follow the dashboard tabs. Sequences are wrapped at
//! [`SEQUENCE_LINE_WIDTH`] columns.

use std::io::{self, Write};

use crate::analysis::SequenceReport;
use crate::model::{AppState, SnpStatus};
use crate::ui::wrap_sequence;

/// Width of wrapped sequence lines.
pub const SEQUENCE_LINE_WIDTH: usize = 60;

fn write_section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "## {}", title)
}

fn write_sequence<W: Write>(out: &mut W, seq: &str) -> io::Result<()> {
    for line in wrap_sequence(seq, SEQUENCE_LINE_WIDTH) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Writes the report of `state` (current settings and SNP outcome).
pub fn write_report<W: Write>(out: &mut W, state: &AppState) -> io::Result<()> {
    let report: &SequenceReport = &state.report;
    let settings = &state.settings;

    writeln!(out, "# DNA Sequence Analysis: {}", state.sequence.name)?;
    writeln!(out, "Length: {}", report.length)?;

    write_section(out, "DNA sequence")?;
    write_sequence(out, &state.sequence.data)?;

    write_section(out, "Nucleotide analysis")?;
    let counts: Vec<String> = report
        .composition
        .iter()
        .map(|(base, n)| format!("{}: {}", base, n))
        .collect();
    writeln!(out, "Nucleotide count: {{{}}}", counts.join(", "))?;
    writeln!(
        out,
        "Purine and pyrimidine count: purine: {}, pyrimidine: {}",
        report.purine_pyrimidine.purine, report.purine_pyrimidine.pyrimidine
    )?;
    writeln!(
        out,
        "Percentages: purine: {:.2}%, pyrimidine: {:.2}%",
        report.percentages.purine_percentage, report.percentages.pyrimidine_percentage
    )?;

    write_section(out, "Reverse complement")?;
    write_sequence(out, &report.reverse_complement)?;

    write_section(out, "Restriction site analysis")?;
    writeln!(
        out,
        "Mode: {} palindromes, length {}-{}",
        settings.palindrome_mode, settings.min_site_length, settings.max_site_length
    )?;
    if report.restriction_sites.is_empty() {
        writeln!(out, "No restriction sites found")?;
    } else {
        writeln!(out, "Found restriction sites:")?;
        for site in &report.restriction_sites {
            writeln!(out, "Position {}: {}", site.position, site.site)?;
        }
    }

    write_section(out, "GC content analysis")?;
    writeln!(out, "Window size: {}", settings.window_size)?;
    if report.gc_profile.is_empty() {
        writeln!(out, "Sequence shorter than window: no GC profile")?;
    } else {
        writeln!(out, "position\tgc_percentage")?;
        for (pos, pct) in report.gc_profile.positions.iter().zip(&report.gc_profile.gc_percentages) {
            writeln!(out, "{}\t{:.2}", pos, pct)?;
        }
    }

    write_section(out, "SNP detection")?;
    match &state.snps {
        SnpStatus::NotRequested => writeln!(out, "SNP detection not requested")?,
        SnpStatus::Done(Err(e)) => writeln!(out, "Error: {}", e)?,
        SnpStatus::Done(Ok(snps)) => {
            if let Some(warning) = &snps.warning {
                writeln!(out, "{}", warning)?;
            }
            if snps.is_empty() {
                writeln!(out, "No SNPs detected.")?;
            } else {
                writeln!(out, "SNPs found at positions: {:?}", snps.positions)?;
            }
        }
    }

    write_section(out, "DNA to mRNA transcription")?;
    write_sequence(out, &report.mrna)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::snp::detect_snps;
    use crate::analysis::AnalysisSettings;
    use crate::model::LoadedSequence;

    fn render(data: &str, snps: SnpStatus) -> String {
        let state = AppState::new(LoadedSequence::new("sample.fa", data), AnalysisSettings::default(), snps).unwrap();
        let mut out = Vec::new();
        write_report(&mut out, &state).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_sections() {
        let text = render("GATTACA", SnpStatus::NotRequested);
        assert!(text.starts_with("# DNA Sequence Analysis: sample.fa\nLength: 7\n"));
        assert!(text.contains("Nucleotide count: {A: 3, C: 1, G: 1, T: 2}"));
        assert!(text.contains("Purine and pyrimidine count: purine: 4, pyrimidine: 3"));
        assert!(text.contains("Percentages: purine: 57.14%, pyrimidine: 42.86%"));
        assert!(text.contains("## Reverse complement\nTGTAATC\n"));
        assert!(text.contains("Position 1: ATTA"));
        assert!(text.contains("0\t20.00\n1\t20.00\n2\t20.00\n"));
        assert!(text.contains("SNP detection not requested"));
        assert!(text.contains("## DNA to mRNA transcription\nGAUUACA\n"));
    }

    #[test]
    fn test_report_empty_results() {
        let text = render("ACG", SnpStatus::Done(detect_snps("ACGT", "ACGT")));
        assert!(text.contains("No restriction sites found"));
        assert!(text.contains("Sequence shorter than window: no GC profile"));
        assert!(text.contains("No SNPs detected."));
    }

    #[test]
    fn test_report_snp_warning_and_positions() {
        let text = render("ACGT", SnpStatus::Done(detect_snps("ACGTT", "TCGA")));
        assert!(text.contains("Warning: The sequences are not of same length (reference: 5, query: 4)"));
        assert!(text.contains("SNPs found at positions: [0, 3]"));
    }

    #[test]
    fn test_report_snp_error() {
        let text = render("ACGT", SnpStatus::Done(detect_snps("", "")));
        assert!(text.contains("Error: Both sequences are empty"));
    }

    #[test]
    fn test_long_sequence_is_wrapped() {
        let text = render(&"A".repeat(130), SnpStatus::NotRequested);
        let section = text.split("## DNA sequence\n").nth(1).unwrap();
        let lines: Vec<&str> = section.lines().take(3).collect();
        assert_eq!(lines, vec!["A".repeat(60), "A".repeat(60), "A".repeat(10)]);
    }

    #[test]
    fn test_sequence_lines_keep_every_character() {
        let data = format!("{} CCCCC-GG", "A".repeat(60));
        let text = render(&data, SnpStatus::NotRequested);
        let section = text.split("## DNA sequence\n").nth(1).unwrap();
        let lines: Vec<&str> = section.lines().take(2).collect();
        assert_eq!(lines, vec!["A".repeat(60), " CCCCC-GG".to_string()]);
        assert_eq!(lines.concat(), data);
    }
}
