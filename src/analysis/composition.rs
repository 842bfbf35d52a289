//! Nucleotide composition.

use std::collections::BTreeMap;

/// Occurrence count of every distinct character in a sequence.
pub type CompositionReport = BTreeMap<char, usize>;

/// Purine (A + G) and pyrimidine (T + C) counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PurinePyrimidineReport {
    pub purine: usize,
    pub pyrimidine: usize,
}

/// Purine and pyrimidine shares of a sequence, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PercentageReport {
    pub purine_percentage: f64,
    pub pyrimidine_percentage: f64,
}

/// Counts every character of `seq`, not only A/C/G/T.
pub fn count(seq: &str) -> CompositionReport {
    let mut counts = CompositionReport::new();
    for c in seq.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

/// Sums uppercase `A`/`G` into purines and `T`/`C` into pyrimidines.
///
/// Any other key (lowercase, `N`, gaps...) is ignored.
pub fn purine_pyrimidine(report: &CompositionReport) -> PurinePyrimidineReport {
    let mut result = PurinePyrimidineReport::default();
    for (&base, &n) in report {
        match base {
            'A' | 'G' => result.purine += n,
            'T' | 'C' => result.pyrimidine += n,
            _ => {}
        }
    }
    result
}

/// Purine and pyrimidine percentages, counted directly from `seq`.
///
/// Both are 0 for an empty sequence. They only add up to 100 when the
/// sequence is made of uppercase A/C/G/T exclusively.
pub fn percentages(seq: &str) -> PercentageReport {
    let total = seq.chars().count();
    if total == 0 {
        return PercentageReport::default();
    }

    let purine = seq.chars().filter(|&c| c == 'A' || c == 'G').count();
    let pyrimidine = seq.chars().filter(|&c| c == 'T' || c == 'C').count();

    PercentageReport {
        purine_percentage: purine as f64 / total as f64 * 100.0,
        pyrimidine_percentage: pyrimidine as f64 / total as f64 * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_sums_to_length() {
        for seq in ["", "A", "ACGTACGT", "AANNxx--", "GATTACA"] {
            let total: usize = count(seq).values().sum();
            assert_eq!(total, seq.chars().count(), "sequence {:?}", seq);
        }
    }

    #[test]
    fn test_count_all_characters() {
        let counts = count("AAcN");
        assert_eq!(counts.get(&'A'), Some(&2));
        assert_eq!(counts.get(&'c'), Some(&1));
        assert_eq!(counts.get(&'N'), Some(&1));
        assert_eq!(counts.get(&'C'), None);
    }

    #[test]
    fn test_purine_pyrimidine() {
        let report = purine_pyrimidine(&count("AAGGTCN"));
        assert_eq!(report.purine, 4);
        assert_eq!(report.pyrimidine, 2);
    }

    #[test]
    fn test_purine_pyrimidine_ignores_lowercase() {
        let report = purine_pyrimidine(&count("agtc"));
        assert_eq!(report, PurinePyrimidineReport::default());
    }

    #[test]
    fn test_percentages_empty() {
        let pct = percentages("");
        assert_eq!(pct.purine_percentage, 0.0);
        assert_eq!(pct.pyrimidine_percentage, 0.0);
    }

    #[test]
    fn test_percentages_pure_acgt_sum_to_100() {
        let pct = percentages("AAGT");
        assert_eq!(pct.purine_percentage, 75.0);
        assert_eq!(pct.pyrimidine_percentage, 25.0);
    }

    #[test]
    fn test_percentages_with_other_characters() {
        let pct = percentages("ACNN");
        assert_eq!(pct.purine_percentage, 25.0);
        assert_eq!(pct.pyrimidine_percentage, 25.0);
        assert!(pct.purine_percentage + pct.pyrimidine_percentage < 100.0);
    }
}
