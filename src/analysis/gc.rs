//! Sliding-window GC content.

use super::AnalysisError;

/// GC percentage of every window, keyed by window start.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GcProfile {
    /// 0-based window start positions
    pub positions: Vec<usize>,
    /// GC percentage of each window, in [0, 100]
    pub gc_percentages: Vec<f64>,
}

impl GcProfile {
    /// Number of windows.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the sequence was shorter than the window.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// (position, percentage) pairs, ready for plotting.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.positions
            .iter()
            .zip(&self.gc_percentages)
            .map(|(&x, &y)| (x as f64, y))
            .collect()
    }
}

/// Computes the GC percentage of every window of `window_size` characters.
///
/// Counting is case-insensitive. A window larger than the sequence yields an
/// empty profile; a zero window is an error.
pub fn gc_content(seq: &str, window_size: usize) -> Result<GcProfile, AnalysisError> {
    if window_size == 0 {
        return Err(AnalysisError::ZeroWindow);
    }

    let upper: Vec<char> = seq.chars().map(|c| c.to_ascii_uppercase()).collect();
    let mut profile = GcProfile::default();
    if window_size > upper.len() {
        return Ok(profile);
    }

    let n_windows = upper.len() - window_size + 1;
    profile.positions.reserve(n_windows);
    profile.gc_percentages.reserve(n_windows);

    for (i, window) in upper.windows(window_size).enumerate() {
        let gc = window.iter().filter(|&&c| c == 'G' || c == 'C').count();
        profile.positions.push(i);
        profile.gc_percentages.push(gc as f64 / window_size as f64 * 100.0);
    }

    Ok(profile)
}
