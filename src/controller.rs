//! Dashboard controller.
//!
//! Owns the terminal for the lifetime of the dashboard and drives the
//! draw / poll / apply cycle over an [`AppState`].

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, info};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::event::{apply_action, handle_event, page_size, poll_event};
use crate::model::AppState;
use crate::ui::{calculate_visible_dimensions, render, scroll_limit};

type DashboardTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Switches stdout to raw mode on the alternate screen.
fn enter_dashboard_screen() -> Result<DashboardTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Gives the shell its screen back. Errors are ignored: this runs on drop.
fn leave_dashboard_screen(terminal: &mut DashboardTerminal) {
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();
}

/// The running dashboard.
pub struct App {
    terminal: DashboardTerminal,
    state: AppState,
    /// Event poll timeout
    tick_rate: Duration,
}

impl App {
    /// Takes over the terminal for `state`.
    pub fn new(state: AppState) -> Result<Self> {
        Ok(Self {
            terminal: enter_dashboard_screen()?,
            state,
            tick_rate: Duration::from_millis(50),
        })
    }

    /// Draws and handles keys until the user quits.
    pub fn run(&mut self) -> Result<()> {
        info!("Dashboard started on {}", self.state.sequence.name);

        loop {
            let page_lines = page_size(self.update_scroll_limit()?);

            self.terminal.draw(|frame| render(frame, &self.state))?;

            let Some(event) = poll_event(self.tick_rate) else {
                continue;
            };
            let action = handle_event(event, &self.state.mode, self.state.show_help);
            debug!("Action: {:?}", action);
            if !apply_action(&mut self.state, action, page_lines) {
                break;
            }
        }

        info!("Dashboard closed");
        Ok(())
    }

    /// Refreshes the scroll bound of the selected tab from the terminal size.
    ///
    /// Returns the number of panel rows.
    fn update_scroll_limit(&mut self) -> Result<usize> {
        let size = self.terminal.size()?;
        let (visible_rows, _) = calculate_visible_dimensions(size.width, size.height);
        let limit = scroll_limit(&self.state, size.width, size.height);
        self.state.set_scroll_limit(limit);
        Ok(visible_rows)
    }
}

impl Drop for App {
    fn drop(&mut self) {
        leave_dashboard_screen(&mut self.terminal);
    }
}

/// Opens the dashboard on a prepared state and blocks until it is closed.
pub fn run_app(state: AppState) -> Result<()> {
    App::new(state)?.run()
}
