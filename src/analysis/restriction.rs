//! Palindromic restriction-site search.
//!
//! By default a site is a *literal* palindrome: a substring equal to its own
//! character reversal (e.g. `ATTA`). Real recognition sites are reverse
//! complement palindromes (e.g. EcoRI `GAATTC`); that definition is available
//! through [`PalindromeMode::ReverseComplement`] and must be chosen explicitly.

use std::fmt;

use super::{DEFAULT_MAX_SITE_LENGTH, DEFAULT_MIN_SITE_LENGTH};

/// What counts as a palindrome when searching for sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PalindromeMode {
    /// Substring equals its character reversal
    #[default]
    Literal,
    /// Substring equals its reverse complement
    ReverseComplement,
}

impl PalindromeMode {
    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            PalindromeMode::Literal => PalindromeMode::ReverseComplement,
            PalindromeMode::ReverseComplement => PalindromeMode::Literal,
        }
    }

    fn matches(self, window: &[char]) -> bool {
        match self {
            PalindromeMode::Literal => window.iter().eq(window.iter().rev()),
            PalindromeMode::ReverseComplement => window
                .iter()
                .zip(window.iter().rev())
                .all(|(&a, &b)| is_complement(a, b)),
        }
    }
}

impl fmt::Display for PalindromeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PalindromeMode::Literal => write!(f, "literal"),
            PalindromeMode::ReverseComplement => write!(f, "reverse-complement"),
        }
    }
}

fn is_complement(a: char, b: char) -> bool {
    matches!((a, b), ('A', 'T') | ('T', 'A') | ('C', 'G') | ('G', 'C'))
}

/// A palindromic substring and its 0-based start position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestrictionSite {
    pub position: usize,
    pub site: String,
}

/// Literal-palindrome sites with the default 4..=8 length window.
pub fn find_default_restriction_sites(seq: &str) -> Vec<RestrictionSite> {
    find_restriction_sites(seq, DEFAULT_MIN_SITE_LENGTH, DEFAULT_MAX_SITE_LENGTH)
}

/// Finds every literal palindrome of length `min_length..=max_length`.
///
/// Sites are ordered by length, then by position. Overlapping and repeated
/// sites are all reported. An empty or inverted length window yields nothing.
pub fn find_restriction_sites(seq: &str, min_length: usize, max_length: usize) -> Vec<RestrictionSite> {
    find_restriction_sites_with(seq, min_length, max_length, PalindromeMode::Literal)
}

/// Same as [`find_restriction_sites`] with an explicit palindrome definition.
pub fn find_restriction_sites_with(
    seq: &str,
    min_length: usize,
    max_length: usize,
    mode: PalindromeMode,
) -> Vec<RestrictionSite> {
    let mut sites = Vec::new();
    if min_length < 1 || min_length > max_length {
        return sites;
    }

    let chars: Vec<char> = seq.chars().collect();
    for len in min_length..=max_length {
        if len > chars.len() {
            break;
        }
        for (position, window) in chars.windows(len).enumerate() {
            if mode.matches(window) {
                sites.push(RestrictionSite {
                    position,
                    site: window.iter().collect(),
                });
            }
        }
    }
    sites
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(position: usize, site: &str) -> RestrictionSite {
        RestrictionSite {
            position,
            site: site.to_string(),
        }
    }

    #[test]
    fn test_literal_palindrome() {
        assert_eq!(find_restriction_sites("ATTA", 4, 4), vec![site(0, "ATTA")]);
    }

    #[test]
    fn test_order_by_length_then_position() {
        // AAAAAA: three 4-mers, two 5-mers
        let sites = find_restriction_sites("AAAAAA", 4, 5);
        let summary: Vec<(usize, usize)> = sites.iter().map(|s| (s.site.len(), s.position)).collect();
        assert_eq!(summary, vec![(4, 0), (4, 1), (4, 2), (5, 0), (5, 1)]);
    }

    #[test]
    fn test_no_dedup_of_repeated_sites() {
        let sites = find_restriction_sites("ATTAxATTA", 4, 4);
        assert_eq!(sites, vec![site(0, "ATTA"), site(5, "ATTA")]);
    }

    #[test]
    fn test_invalid_windows_are_empty() {
        assert!(find_restriction_sites("ATTA", 5, 4).is_empty());
        assert!(find_restriction_sites("ATTA", 0, 4).is_empty());
        assert!(find_restriction_sites("ATT", 4, 8).is_empty());
        assert!(find_restriction_sites("", 4, 8).is_empty());
    }

    #[test]
    fn test_default_window() {
        let sites = find_default_restriction_sites("GATTACA");
        assert_eq!(sites, vec![site(1, "ATTA")]);
    }

    #[test]
    fn test_literal_mode_misses_ecori() {
        assert!(find_restriction_sites("GAATTC", 6, 6).is_empty());
    }

    #[test]
    fn test_reverse_complement_mode() {
        let sites = find_restriction_sites_with("TTGAATTCTT", 6, 6, PalindromeMode::ReverseComplement);
        assert_eq!(sites, vec![site(2, "GAATTC")]);

        // A literal palindrome is not a reverse-complement one
        let sites = find_restriction_sites_with("ATTA", 4, 4, PalindromeMode::ReverseComplement);
        assert!(sites.is_empty());
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(PalindromeMode::Literal.toggled(), PalindromeMode::ReverseComplement);
        assert_eq!(PalindromeMode::ReverseComplement.toggled(), PalindromeMode::Literal);
        assert_eq!(PalindromeMode::default().to_string(), "literal");
    }
}
