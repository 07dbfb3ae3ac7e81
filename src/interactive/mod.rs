use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub mod app;
pub mod ui;

#[cfg(test)]
mod integration_tests;

pub use app::SiteApp;

use crate::timer::Clock;
use rand::Rng;

/// Longest wait between redraws, so the countdown keeps moving
const FRAME_INTERVAL: Duration = Duration::from_millis(250);

pub struct InteractiveSite<C: Clock + Clone, R: Rng> {
    app: SiteApp<C, R>,
}

impl<C: Clock + Clone, R: Rng> InteractiveSite<C, R> {
    pub fn new(app: SiteApp<C, R>) -> Self {
        Self { app }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;
        let result = self.run_app(&mut terminal);
        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            self.app.tick();

            terminal.draw(|f| {
                self.app.render(f, chrono::Utc::now());
            })?;

            if poll(self.poll_timeout())? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    let should_quit = self
                        .app
                        .handle_key(key)
                        .context("Failed to handle key event")?;
                    if should_quit {
                        tracing::info!("quit requested");
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Wake for the next controller timer or the next frame, whichever is first
    fn poll_timeout(&self) -> Duration {
        match self.app.next_deadline() {
            Some(deadline) => deadline
                .saturating_duration_since(Instant::now())
                .min(FRAME_INTERVAL),
            None => FRAME_INTERVAL,
        }
    }
}
