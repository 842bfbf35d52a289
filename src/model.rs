//! Data model for the analysis dashboard.
//!
//! This module contains all data structures for representing:
//! - The loaded sequence and the optional SNP comparison
//! - The analysis parameters and the report computed from them
//! - Application state (selected tab, scrolling, input mode)
//!
//! The sequence never changes once loaded; parameter changes recompute the
//! report from it.

use std::fmt;
use std::path::Path;

use log::{debug, info, warn};

use crate::analysis::snp::{self, SnpError, SnpReport};
use crate::analysis::{
    analyze, AnalysisError, AnalysisSettings, SequenceReport, WINDOW_SIZE_RANGE,
};

/// A sequence read from a FASTA file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSequence {
    /// Display name (usually the file name)
    pub name: String,
    /// Concatenated sequence data, headers removed
    pub data: String,
}

impl LoadedSequence {
    /// Creates a new loaded sequence.
    pub fn new(name: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

/// State of the optional reference/query comparison.
#[derive(Debug)]
pub enum SnpStatus {
    /// No reference/query pair was given
    NotRequested,
    /// Comparison outcome
    Done(Result<SnpReport, SnpError>),
}

impl SnpStatus {
    /// Reads and compares a reference/query pair of FASTA files.
    pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(reference: P, query: Q) -> Self {
        let result = snp::detect_snps_in_files(&reference, &query);
        match &result {
            Ok(report) => {
                if let Some(warning) = &report.warning {
                    warn!("{}", warning);
                }
                info!(
                    "SNP detection: {} vs {}: {} positions",
                    reference.as_ref().display(),
                    query.as_ref().display(),
                    report.positions.len()
                );
            }
            Err(e) => warn!("SNP detection failed: {}", e),
        }
        SnpStatus::Done(result)
    }
}

/// Dashboard tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    ReverseComplement,
    RestrictionSites,
    GcContent,
    Snps,
    Mrna,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 6] = [
        Tab::Overview,
        Tab::ReverseComplement,
        Tab::RestrictionSites,
        Tab::GcContent,
        Tab::Snps,
        Tab::Mrna,
    ];

    /// Position of the tab in [`Tab::ALL`].
    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }

    /// Tab at `index`, if any.
    pub fn from_index(index: usize) -> Option<Tab> {
        Tab::ALL.get(index).copied()
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn previous(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    /// Title shown in the tab bar.
    pub fn title(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::ReverseComplement => "Reverse complement",
            Tab::RestrictionSites => "Restriction sites",
            Tab::GcContent => "GC content",
            Tab::Snps => "SNPs",
            Tab::Mrna => "mRNA",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Application mode for handling different input states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Command input mode (after pressing ':')
    Command(String),
}

/// The complete application state.
#[derive(Debug)]
pub struct AppState {
    /// The analysed sequence
    pub sequence: LoadedSequence,
    /// Current analysis parameters
    pub settings: AnalysisSettings,
    /// Report computed from `sequence` and `settings`
    pub report: SequenceReport,
    /// Optional reference/query comparison
    pub snps: SnpStatus,
    /// Selected tab
    pub tab: Tab,
    /// First visible line of the selected tab
    pub scroll: usize,
    /// Largest useful value of `scroll` for the current tab and terminal size
    scroll_limit: usize,
    /// Current application mode
    pub mode: AppMode,
    /// Whether the help overlay is shown
    pub show_help: bool,
    /// Whether the application should quit
    pub should_quit: bool,
    /// Status message to display
    pub status_message: Option<String>,
}

impl AppState {
    /// Creates the application state and computes the initial report.
    pub fn new(
        sequence: LoadedSequence,
        settings: AnalysisSettings,
        snps: SnpStatus,
    ) -> Result<Self, AnalysisError> {
        let report = analyze(&sequence.data, &settings)?;
        info!("Loaded {} ({} nt)", sequence.name, report.length);

        let status_message = match &snps {
            SnpStatus::Done(Err(e)) => Some(e.to_string()),
            SnpStatus::Done(Ok(report)) => report.warning.map(|w| w.to_string()),
            SnpStatus::NotRequested => None,
        };

        Ok(Self {
            sequence,
            settings,
            report,
            snps,
            tab: Tab::default(),
            scroll: 0,
            scroll_limit: 0,
            mode: AppMode::Normal,
            show_help: false,
            should_quit: false,
            status_message,
        })
    }

    /// Recomputes the report after a parameter change.
    ///
    /// On failure the previous settings and report are kept.
    fn apply_settings(&mut self, settings: AnalysisSettings) {
        if settings == self.settings {
            return;
        }
        match analyze(&self.sequence.data, &settings) {
            Ok(report) => {
                debug!("Recomputed report with {:?}", settings);
                self.settings = settings;
                self.report = report;
            }
            Err(e) => {
                warn!("Rejected settings {:?}: {}", settings, e);
                self.status_message = Some(e.to_string());
            }
        }
    }

    /// Updates the scroll limit, clamping the current scroll position.
    pub fn set_scroll_limit(&mut self, limit: usize) {
        self.scroll_limit = limit;
        self.scroll = self.scroll.min(limit);
    }

    /// Selects a tab and scrolls back to its top.
    pub fn select_tab(&mut self, tab: Tab) {
        if tab != self.tab {
            self.tab = tab;
            self.scroll = 0;
        }
    }

    /// Selects the next tab (wrapping around).
    pub fn next_tab(&mut self) {
        self.select_tab(self.tab.next());
    }

    /// Selects the previous tab (wrapping around).
    pub fn previous_tab(&mut self) {
        self.select_tab(self.tab.previous());
    }

    /// Scrolls the current tab down by `lines`.
    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = (self.scroll + lines).min(self.scroll_limit);
    }

    /// Scrolls the current tab up by `lines`.
    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    /// Sets the GC window size, refusing values outside the offered range.
    pub fn set_window_size(&mut self, window_size: usize) {
        if !WINDOW_SIZE_RANGE.contains(&window_size) {
            self.status_message = Some(format!(
                "Window size must be between {} and {}",
                WINDOW_SIZE_RANGE.start(),
                WINDOW_SIZE_RANGE.end()
            ));
            return;
        }
        self.apply_settings(AnalysisSettings {
            window_size,
            ..self.settings
        });
    }

    /// Increases the GC window size by one.
    pub fn increase_window(&mut self) {
        self.set_window_size(self.settings.window_size + 1);
    }

    /// Decreases the GC window size by one.
    pub fn decrease_window(&mut self) {
        self.set_window_size(self.settings.window_size.saturating_sub(1));
    }

    /// Changes the minimum restriction-site length, keeping it at least 1.
    pub fn adjust_min_site(&mut self, increase: bool) {
        let min_site_length = if increase {
            self.settings.min_site_length + 1
        } else {
            self.settings.min_site_length.saturating_sub(1).max(1)
        };
        self.apply_settings(AnalysisSettings {
            min_site_length,
            ..self.settings
        });
    }

    /// Changes the maximum restriction-site length, keeping it at least 1.
    pub fn adjust_max_site(&mut self, increase: bool) {
        let max_site_length = if increase {
            self.settings.max_site_length + 1
        } else {
            self.settings.max_site_length.saturating_sub(1).max(1)
        };
        self.apply_settings(AnalysisSettings {
            max_site_length,
            ..self.settings
        });
    }

    /// Switches between literal and reverse-complement palindromes.
    pub fn toggle_palindrome_mode(&mut self) {
        let palindrome_mode = self.settings.palindrome_mode.toggled();
        self.apply_settings(AnalysisSettings {
            palindrome_mode,
            ..self.settings
        });
        self.status_message = Some(format!("Restriction sites: {} palindromes", self.settings.palindrome_mode));
    }

    /// Enters command mode.
    pub fn enter_command_mode(&mut self) {
        self.mode = AppMode::Command(String::new());
    }

    /// Handles a character input in command mode.
    pub fn command_input(&mut self, c: char) {
        if let AppMode::Command(ref mut cmd) = self.mode {
            cmd.push(c);
        }
    }

    /// Handles backspace in command mode.
    pub fn command_backspace(&mut self) {
        if let AppMode::Command(ref mut cmd) = self.mode {
            cmd.pop();
            if cmd.is_empty() {
                self.mode = AppMode::Normal;
            }
        }
    }

    /// Executes the current command.
    pub fn execute_command(&mut self) {
        if let AppMode::Command(cmd) = std::mem::take(&mut self.mode) {
            let mut words = cmd.split_whitespace();
            match (words.next(), words.next()) {
                (Some("q" | "quit"), None) => self.should_quit = true,
                (Some("h" | "help"), None) => self.show_help = true,
                (Some("w" | "window"), Some(arg)) => match arg.parse::<usize>() {
                    Ok(size) => self.set_window_size(size),
                    Err(_) => self.status_message = Some(format!("Invalid window size: {}", arg)),
                },
                (Some(tab), None) if tab.parse::<usize>().is_ok() => {
                    match tab.parse::<usize>().ok().and_then(|n| n.checked_sub(1)).and_then(Tab::from_index) {
                        Some(tab) => self.select_tab(tab),
                        None => self.status_message = Some(format!("Invalid tab: {}", tab)),
                    }
                }
                _ => self.status_message = Some(format!("Unknown command: {}", cmd.trim())),
            }
        }
        self.mode = AppMode::Normal;
    }

    /// Cancels command mode and returns to normal mode.
    pub fn cancel_command(&mut self) {
        self.mode = AppMode::Normal;
    }

    /// Hides the help overlay.
    pub fn dismiss_help(&mut self) {
        self.show_help = false;
    }
}
