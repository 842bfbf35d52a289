//! Strand transformations: reverse complement and transcription.
//!
//! The two functions treat unexpected characters differently on purpose:
//! `reverse_complement` drops anything outside uppercase A/C/G/T, while
//! `transcribe` copies it through untouched.

/// Complement of an uppercase nucleotide, `None` for anything else.
#[inline]
fn complement(base: char) -> Option<char> {
    match base {
        'A' => Some('T'),
        'T' => Some('A'),
        'C' => Some('G'),
        'G' => Some('C'),
        _ => None,
    }
}

/// Reverse complement of `seq`.
///
/// Characters without a complement (lowercase, `N`, gaps...) are dropped, so
/// the result can be shorter than the input.
pub fn reverse_complement(seq: &str) -> String {
    seq.chars().rev().filter_map(complement).collect()
}

/// Transcribes DNA to mRNA by replacing every `T` with `U`.
///
/// Lowercase `t` is left as is.
pub fn transcribe(seq: &str) -> String {
    seq.replace('T', "U")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_complement() {
        assert_eq!(reverse_complement("ATGCGATC"), "GATCGCAT");
        assert_eq!(reverse_complement("AAAA"), "TTTT");
        assert_eq!(reverse_complement(""), "");
    }

    #[test]
    fn test_reverse_complement_drops_unknown() {
        assert_eq!(reverse_complement("ANCg-T"), "AGT");
        assert_eq!(reverse_complement("nnnn"), "");
    }

    #[test]
    fn test_double_reverse_complement_is_identity() {
        for seq in ["ATGCGATC", "GATTACA", "CCCCGGGGAT", "T"] {
            assert_eq!(reverse_complement(&reverse_complement(seq)), seq);
        }
    }

    #[test]
    fn test_transcribe() {
        assert_eq!(transcribe("ATCG"), "AUCG");
        assert_eq!(transcribe("TTTT"), "UUUU");
        assert_eq!(transcribe(""), "");
    }

    #[test]
    fn test_transcribe_is_case_sensitive() {
        assert_eq!(transcribe("atcg"), "atcg");
        assert_eq!(transcribe("TtN-"), "UtN-");
    }

    #[test]
    fn test_transcribe_keeps_length() {
        let seq = "GATTACA-NN";
        assert_eq!(transcribe(seq).chars().count(), seq.chars().count());
    }
}
