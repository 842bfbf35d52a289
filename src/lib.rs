//! # HelixScope - DNA Sequence Analysis Dashboard
//!
//! Elementary analyses of a small DNA sequence read from a FASTA file,
//! browsable in a terminal dashboard built on ratatui.
//!
//! ## Architecture
//!
//! The analyses are pure functions; everything else is presentation:
//! - `fasta`: extraction of the raw sequence from FASTA input
//! - `analysis`: composition, reverse complement, restriction sites,
//!   GC content, SNP detection and transcription
//! - `model`: loaded sequence, parameters, computed report and UI state
//! - `event`: keyboard event handling
//! - `ui`: TUI rendering with ratatui
//! - `controller`: orchestration of state transitions
//! - `report`: plain-text report for non-interactive use
//! - `logging`: logger setup

pub mod analysis;
pub mod controller;
pub mod event;
pub mod fasta;
pub mod logging;
pub mod model;
pub mod report;
pub mod ui;
