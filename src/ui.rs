//! TUI rendering module.
//!
//! This module handles all visual rendering using ratatui:
//! - Header with the sequence name and length
//! - Tab bar with one tab per analysis
//! - Colored nucleotide display for sequence tabs
//! - GC content line chart
//! - Status bar with mode, messages and current parameters
//! - Help overlay

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Clear, Dataset, GraphType, Paragraph, Tabs},
    Frame,
};

use crate::analysis::restriction::PalindromeMode;
use crate::model::{AppMode, AppState, SnpStatus, Tab};

/// Height of the header line.
const HEADER_HEIGHT: u16 = 1;
/// Height of the tab bar (including borders).
const TABS_HEIGHT: u16 = 3;
/// Height of the status bar.
const STATUS_BAR_HEIGHT: u16 = 1;

/// Color scheme for sequence characters.
///
/// This trait allows for different color schemes to be implemented.
pub trait ColorScheme {
    fn get_color(&self, c: char) -> Color;
}

/// Nucleotide color scheme (DNA and RNA).
pub struct DnaColorScheme;

impl ColorScheme for DnaColorScheme {
    fn get_color(&self, c: char) -> Color {
        match c.to_ascii_uppercase() {
            'A' => Color::Red,
            'C' => Color::Green,
            'G' => Color::Yellow,
            'T' | 'U' => Color::Blue,
            _ => Color::DarkGray,
        }
    }
}

/// Renders the complete UI.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(TABS_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    render_header(frame, state, main_layout[0]);
    render_tabs(frame, state, main_layout[1]);
    match state.tab {
        Tab::GcContent => render_gc_chart(frame, state, main_layout[2]),
        _ => render_text_panel(frame, state, main_layout[2]),
    }
    render_status_bar(frame, state, main_layout[3]);

    if state.show_help {
        render_help(frame, area);
    }
}

/// Calculates the visible dimensions (rows, cols) inside the analysis panel.
pub fn calculate_visible_dimensions(terminal_width: u16, terminal_height: u16) -> (usize, usize) {
    // Account for header, tab bar, status bar and panel borders
    let visible_rows =
        terminal_height.saturating_sub(HEADER_HEIGHT + TABS_HEIGHT + STATUS_BAR_HEIGHT + 2) as usize;
    let visible_cols = terminal_width.saturating_sub(2) as usize;
    (visible_rows, visible_cols)
}

/// Largest scroll offset that still shows content for the current tab.
pub fn scroll_limit(state: &AppState, terminal_width: u16, terminal_height: u16) -> usize {
    let (rows, cols) = calculate_visible_dimensions(terminal_width, terminal_height);
    if state.tab == Tab::GcContent {
        return 0;
    }
    tab_lines(state, cols).len().saturating_sub(rows)
}

/// Cuts a sequence into lines of exactly `width` characters (the last may be
/// shorter). Every character is kept, gaps and spaces included.
pub fn wrap_sequence(seq: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = seq.chars().collect();
    chars
        .chunks(width.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Word-wraps an explanatory note to the panel width.
fn note(text: &str, width: usize, color: Color) -> Vec<Line<'static>> {
    textwrap::wrap(text, width.max(1))
        .into_iter()
        .map(|line| colored(line.into_owned(), color))
        .collect()
}

/// Builds the colored lines of a sequence.
fn sequence_lines(seq: &str, width: usize) -> Vec<Line<'static>> {
    let scheme = DnaColorScheme;
    wrap_sequence(seq, width)
        .into_iter()
        .map(|chunk| {
            let spans: Vec<Span> = chunk
                .chars()
                .map(|c| Span::styled(c.to_string(), Style::default().fg(scheme.get_color(c))))
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn heading(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn colored(text: impl Into<String>, color: Color) -> Line<'static> {
    Line::from(Span::styled(text.into(), Style::default().fg(color)))
}

/// Builds the content of a text tab for a panel `width` columns wide.
pub fn tab_lines(state: &AppState, width: usize) -> Vec<Line<'static>> {
    let report = &state.report;
    let mut lines = Vec::new();

    match state.tab {
        Tab::Overview => {
            lines.push(heading("Nucleotide count"));
            if report.composition.is_empty() {
                lines.push(Line::from("  (empty sequence)"));
            }
            for (base, n) in &report.composition {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {}", base),
                        Style::default().fg(DnaColorScheme.get_color(*base)),
                    ),
                    Span::raw(format!(": {}", n)),
                ]));
            }
            lines.push(Line::from(""));
            lines.push(heading("Purine and pyrimidine count"));
            lines.push(Line::from(format!(
                "  purine: {}  pyrimidine: {}",
                report.purine_pyrimidine.purine, report.purine_pyrimidine.pyrimidine
            )));
            lines.push(heading("Percentages"));
            lines.push(Line::from(format!(
                "  purine: {:.2}%  pyrimidine: {:.2}%",
                report.percentages.purine_percentage, report.percentages.pyrimidine_percentage
            )));
            lines.push(Line::from(""));
            lines.push(heading(format!("DNA sequence ({} nt)", report.length)));
            lines.extend(sequence_lines(&state.sequence.data, width));
        }
        Tab::ReverseComplement => {
            let dropped = report.length - report.reverse_complement.chars().count();
            lines.push(heading("Reverse complement"));
            if dropped > 0 {
                lines.extend(note(
                    &format!("{} characters without a complement were dropped", dropped),
                    width,
                    Color::Yellow,
                ));
            }
            lines.extend(sequence_lines(&report.reverse_complement, width));
        }
        Tab::RestrictionSites => {
            let settings = &state.settings;
            lines.push(heading(format!(
                "Restriction sites: {} palindromes of length {}-{}",
                settings.palindrome_mode, settings.min_site_length, settings.max_site_length
            )));
            if settings.palindrome_mode == PalindromeMode::Literal {
                lines.extend(note(
                    "Literal palindromes are not biological recognition sites (press p to switch)",
                    width,
                    Color::DarkGray,
                ));
            }
            if report.restriction_sites.is_empty() {
                lines.push(Line::from("No restriction sites found"));
            } else {
                lines.push(Line::from(format!("Found {} restriction sites:", report.restriction_sites.len())));
                for site in &report.restriction_sites {
                    lines.push(Line::from(format!("Position {}: {}", site.position, site.site)));
                }
            }
        }
        Tab::GcContent => {}
        Tab::Snps => {
            lines.push(heading("SNP detection"));
            match &state.snps {
                SnpStatus::NotRequested => {
                    lines.push(Line::from(
                        "No reference/query pair loaded (use --reference <FILE> --query <FILE>)",
                    ));
                }
                SnpStatus::Done(Err(e)) => {
                    lines.push(colored(e.to_string(), Color::Red));
                }
                SnpStatus::Done(Ok(snps)) => {
                    if let Some(warning) = &snps.warning {
                        lines.push(colored(warning.to_string(), Color::Yellow));
                    }
                    if snps.is_empty() {
                        lines.push(Line::from("No SNPs detected."));
                    } else {
                        lines.push(Line::from(format!("SNPs found at {} positions:", snps.positions.len())));
                        for pos in &snps.positions {
                            lines.push(Line::from(format!("Position {}", pos)));
                        }
                    }
                }
            }
        }
        Tab::Mrna => {
            lines.push(heading("mRNA sequence"));
            lines.extend(sequence_lines(&report.mrna, width));
        }
    }

    lines
}

/// Renders the header line.
fn render_header(frame: &mut Frame, state: &AppState, area: Rect) {
    let header = Line::from(vec![
        Span::styled(
            " DNA Sequence Analysis ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" {} ({} nt)", state.sequence.name, state.report.length)),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Renders the tab bar.
fn render_tabs(frame: &mut Frame, state: &AppState, area: Rect) {
    let titles: Vec<String> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| format!("{} {}", i + 1, tab.title()))
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .select(state.tab.index())
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

/// Renders a scrollable text tab.
fn render_text_panel(frame: &mut Frame, state: &AppState, area: Rect) {
    let width = area.width.saturating_sub(2) as usize;
    let lines = tab_lines(state, width);
    let total = lines.len();

    let title = format!(
        "{} [{}-{}/{}]",
        state.tab.title(),
        (state.scroll + 1).min(total),
        (state.scroll + area.height.saturating_sub(2) as usize).min(total),
        total
    );
    let block = Block::default().borders(Borders::ALL).title(title);

    let scroll = u16::try_from(state.scroll).unwrap_or(u16::MAX);
    let paragraph = Paragraph::new(lines).block(block).scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

/// Renders the GC content chart.
fn render_gc_chart(frame: &mut Frame, state: &AppState, area: Rect) {
    let window = state.settings.window_size;
    let title = format!("GC content across the DNA sequence (window {})", window);
    let block = Block::default().borders(Borders::ALL).title(title);

    let profile = &state.report.gc_profile;
    if profile.is_empty() {
        let message = format!(
            "Sequence ({} nt) is shorter than the window size ({}): no GC profile",
            state.report.length, window
        );
        frame.render_widget(Paragraph::new(message).block(block), area);
        return;
    }

    let points = profile.points();
    let x_max = profile.positions.last().copied().unwrap_or(0).max(1) as f64;

    let dataset = Dataset::default()
        .name("GC %")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&points);

    let x_axis = Axis::default()
        .title("Window position")
        .style(Style::default().fg(Color::Gray))
        .bounds([0.0, x_max])
        .labels(vec![
            Span::raw("0"),
            Span::raw(format!("{}", (x_max / 2.0).round() as usize)),
            Span::raw(format!("{}", x_max as usize)),
        ]);

    let y_axis = Axis::default()
        .title("GC percentage")
        .style(Style::default().fg(Color::Gray))
        .bounds([0.0, 100.0])
        .labels(vec![Span::raw("0"), Span::raw("50"), Span::raw("100")]);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);
    frame.render_widget(chart, area);
}

/// Renders the status bar at the bottom.
fn render_status_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let (mode_str, command_str) = match &state.mode {
        AppMode::Normal => ("NORMAL", String::new()),
        AppMode::Command(cmd) => ("COMMAND", format!(":{}", cmd)),
    };

    let settings = &state.settings;
    let parameter_info = format!(
        "Window {} | Sites {}-{} {} | Tab {}/{} ",
        settings.window_size,
        settings.min_site_length,
        settings.max_site_length,
        settings.palindrome_mode,
        state.tab.index() + 1,
        Tab::ALL.len()
    );

    // Show warning or status message if present
    let message = state.status_message.as_deref().unwrap_or(":h for help");

    let left_content = if command_str.is_empty() {
        format!(" {} | {} ", mode_str, message)
    } else {
        format!(" {} | {} ", mode_str, command_str)
    };

    let left_len = left_content.chars().count();
    let status_line = Line::from(vec![
        Span::styled(
            left_content,
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::styled(
            " ".repeat((area.width as usize).saturating_sub(left_len + parameter_info.len())),
            Style::default().bg(Color::Cyan),
        ),
        Span::styled(
            parameter_info,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Paragraph::new(status_line), area);
}

/// Help text shown by `:h`.
const HELP_LINES: &[&str] = &[
    "Tab / l / Right      next tab",
    "S-Tab / h / Left     previous tab",
    "1-6                  go to tab",
    "j / k / Down / Up    scroll",
    "PgDn / PgUp          scroll one page (also Ctrl-D / Ctrl-U)",
    "+ / -                GC window size (3-10)",
    "[ / ]                minimum restriction-site length",
    "{ / }                maximum restriction-site length",
    "p                    literal / reverse-complement palindromes",
    ":w <n>               set GC window size",
    ":<n>                 go to tab n",
    ":q                   quit",
    "",
    "Press any key to close",
];

/// Renders the help overlay.
fn render_help(frame: &mut Frame, area: Rect) {
    let width = HELP_LINES.iter().map(|l| l.len()).max().unwrap_or(0) as u16 + 4;
    let height = HELP_LINES.len() as u16 + 2;
    let popup = centered_rect(width, height, area);

    let lines: Vec<Line> = HELP_LINES.iter().map(|l| Line::from(*l)).collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Help")
        .style(Style::default().fg(Color::White).bg(Color::Black));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::snp::detect_snps;
    use crate::analysis::AnalysisSettings;
    use crate::model::LoadedSequence;

    fn state_with(data: &str, snps: SnpStatus) -> AppState {
        AppState::new(LoadedSequence::new("test", data), AnalysisSettings::default(), snps).unwrap()
    }

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_dna_colors() {
        let scheme = DnaColorScheme;
        assert_eq!(scheme.get_color('A'), Color::Red);
        assert_eq!(scheme.get_color('a'), Color::Red); // Case insensitive
        assert_eq!(scheme.get_color('C'), Color::Green);
        assert_eq!(scheme.get_color('G'), Color::Yellow);
        assert_eq!(scheme.get_color('T'), Color::Blue);
        assert_eq!(scheme.get_color('U'), Color::Blue);
        assert_eq!(scheme.get_color('N'), Color::DarkGray);
    }

    #[test]
    fn test_visible_dimensions() {
        let (rows, cols) = calculate_visible_dimensions(100, 50);
        // 50 - 1 (header) - 3 (tabs) - 1 (status) - 2 (borders) = 43 rows
        assert_eq!(rows, 43);
        assert_eq!(cols, 98);
    }

    #[test]
    fn test_wrap_sequence() {
        assert_eq!(wrap_sequence("ACGTACGTAC", 4), vec!["ACGT", "ACGT", "AC"]);
        assert_eq!(wrap_sequence("ACG", 10), vec!["ACG"]);
        assert!(wrap_sequence("", 10).is_empty());
    }

    #[test]
    fn test_wrap_sequence_keeps_gaps_and_spaces() {
        let seq = "ACGT-ACGTACG TACGT";
        let lines = wrap_sequence(seq, 8);
        assert_eq!(lines, vec!["ACGT-ACG", "TACG TAC", "GT"]);
        assert_eq!(lines.concat(), seq);
    }

    #[test]
    fn test_literal_note_wraps_to_panel_width() {
        let mut state = state_with("GATTACA", SnpStatus::NotRequested);
        state.select_tab(Tab::RestrictionSites);
        let text = plain(&tab_lines(&state, 30));
        assert!(text.iter().all(|line| line.chars().count() <= 30 || line.starts_with("Restriction sites")));
        assert!(text.iter().any(|line| line.contains("press p to")));
    }

    #[test]
    fn test_restriction_tab_lines() {
        let mut state = state_with("GATTACA", SnpStatus::NotRequested);
        state.select_tab(Tab::RestrictionSites);
        let text = plain(&tab_lines(&state, 80));
        assert!(text.contains(&"Position 1: ATTA".to_string()));

        let mut state = state_with("ACGT", SnpStatus::NotRequested);
        state.select_tab(Tab::RestrictionSites);
        let text = plain(&tab_lines(&state, 80));
        assert!(text.contains(&"No restriction sites found".to_string()));
    }

    #[test]
    fn test_snp_tab_lines() {
        let mut state = state_with("ACGT", SnpStatus::Done(detect_snps("ACGT", "ACGA")));
        state.select_tab(Tab::Snps);
        let text = plain(&tab_lines(&state, 80));
        assert!(text.contains(&"Position 3".to_string()));

        let mut state = state_with("ACGT", SnpStatus::Done(detect_snps("ACGT", "ACGT")));
        state.select_tab(Tab::Snps);
        let text = plain(&tab_lines(&state, 80));
        assert!(text.contains(&"No SNPs detected.".to_string()));

        let mut state = state_with("ACGT", SnpStatus::Done(detect_snps("ACGT", "")));
        state.select_tab(Tab::Snps);
        let text = plain(&tab_lines(&state, 80));
        assert!(text.contains(&"Query sequence is empty".to_string()));
    }

    #[test]
    fn test_reverse_complement_notes_dropped() {
        let mut state = state_with("ACNNGT", SnpStatus::NotRequested);
        state.select_tab(Tab::ReverseComplement);
        let text = plain(&tab_lines(&state, 80));
        assert!(text.contains(&"2 characters without a complement were dropped".to_string()));
        assert!(text.contains(&"ACGT".to_string()));
    }

    #[test]
    fn test_scroll_limit() {
        let mut state = state_with(&"ACGT".repeat(100), SnpStatus::NotRequested);
        state.select_tab(Tab::Mrna);
        // 400 nt in 38 columns -> 11 lines + heading, 5 visible rows
        assert_eq!(scroll_limit(&state, 40, 12), 7);

        state.select_tab(Tab::GcContent);
        assert_eq!(scroll_limit(&state, 40, 12), 0);
    }

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect(40, 4, area);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.y, 3);
    }
}
