//! Terminal UI implementation using ratatui
//!
//! This module provides the concrete implementation of UIRenderer using
//! ratatui for a cross-platform terminal interface. It draws the retained
//! [`BoardView`] produced by the reveal sequence; it never mutates it.

use crate::error::Result;
use crate::render::{BoardView, RevealSurface, Rgb, SlotState};
use crate::ui::{UICommand, UIRenderer};
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Terminal UI with a ratatui backend.
///
/// Draws one bordered cell per slot, left to right in pick order. Revealed
/// cells carry their highlight color; the team logo renders as its
/// accessible label since a terminal cell cannot decode the PNG itself.
pub struct TerminalUI {
    terminal: Option<CrosstermTerminal>,
    round: u32,
}

impl TerminalUI {
    pub fn new(round: u32) -> Result<Self> {
        Ok(Self {
            terminal: None,
            round,
        })
    }

    /// Convert UI key events to UICommands
    fn key_to_command(&self, key: KeyCode, modifiers: KeyModifiers) -> Option<UICommand> {
        match (key, modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE)
            | (KeyCode::Esc, _)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(UICommand::Quit),
            _ => None,
        }
    }

    fn slot_style(slot: &SlotState) -> Style {
        match slot.background {
            Some(Rgb(r, g, b)) => Style::default().bg(Color::Rgb(r, g, b)).fg(Color::Black),
            None => Style::default(),
        }
    }

    /// Render one board cell (helper for closure)
    fn render_slot(frame: &mut Frame, area: Rect, slot: &SlotState) {
        let block = Block::default().borders(Borders::ALL);

        if !slot.is_revealed() {
            frame.render_widget(block, area);
            return;
        }

        let style = Self::slot_style(slot);
        let mut lines = vec![Line::from(slot.pick_number.clone())];
        // Latest appended logo wins the visible badge spot
        if let Some(logo) = slot.logos.last() {
            lines.push(Line::styled(
                logo.alt.clone(),
                style.add_modifier(Modifier::DIM),
            ));
        }
        lines.push(Line::styled(
            slot.first_name.clone(),
            style.add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::styled(
            slot.last_name.clone(),
            style.add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(slot.player_info.clone()));

        let cell = Paragraph::new(lines).style(style).block(block);
        frame.render_widget(cell, area);
    }

    /// Render the slot row (helper for closure)
    fn render_board(frame: &mut Frame, area: Rect, view: &BoardView) {
        let slot_count = view.slot_count().max(1) as u32;
        let constraints: Vec<Constraint> = (0..slot_count)
            .map(|_| Constraint::Ratio(1, slot_count))
            .collect();
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (slot, cell_area) in view.slots().iter().zip(cells.iter()) {
            Self::render_slot(frame, *cell_area, slot);
        }
    }

    /// Render the status line (helper for closure)
    fn render_status(frame: &mut Frame, area: Rect, view: &BoardView, round: u32) {
        let status_text = format!(
            "Round {} | revealed {}/{} | q to quit",
            round,
            view.revealed_count(),
            view.slot_count()
        );
        let status_style = Style::default().bg(Color::Blue).fg(Color::White);
        frame.render_widget(Paragraph::new(status_text).style(status_style), area);
    }
}

impl UIRenderer for TerminalUI {
    fn render(&mut self, view: &BoardView) -> Result<()> {
        if let Some(ref mut terminal) = self.terminal {
            let round = self.round;
            terminal.draw(move |frame| {
                let size = frame.size();

                // Split screen: board area and status line
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
                    .split(size);

                Self::render_board(frame, chunks[0], view);
                Self::render_status(frame, chunks[1], view, round);
            })?;
        }
        Ok(())
    }

    fn handle_input(&mut self, timeout: Option<Duration>) -> Result<Option<UICommand>> {
        let timeout_duration = timeout.unwrap_or(Duration::from_millis(100));

        if event::poll(timeout_duration)? {
            if let Event::Key(key_event) = event::read()? {
                return Ok(self.key_to_command(key_event.code, key_event.modifiers));
            }
        }

        Ok(None)
    }

    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        self.terminal = Some(terminal);

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen)?;
            self.terminal = None;
        }
        Ok(())
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::WR_HIGHLIGHT;

    #[test]
    fn test_terminal_ui_creation() {
        let ui = TerminalUI::new(1);
        assert!(ui.is_ok());
        assert!(ui.unwrap().terminal.is_none());
    }

    #[test]
    fn test_key_to_command_quit() {
        let ui = TerminalUI::new(1).unwrap();

        assert_eq!(
            ui.key_to_command(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(UICommand::Quit)
        );
        assert_eq!(
            ui.key_to_command(KeyCode::Esc, KeyModifiers::NONE),
            Some(UICommand::Quit)
        );
        assert_eq!(
            ui.key_to_command(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(UICommand::Quit)
        );
        assert_eq!(
            ui.key_to_command(KeyCode::Char('x'), KeyModifiers::NONE),
            None
        );
    }

    #[test]
    fn test_slot_style_uses_highlight_background() {
        let mut slot = SlotState::default();
        assert_eq!(TerminalUI::slot_style(&slot), Style::default());

        slot.background = Some(WR_HIGHLIGHT);
        let style = TerminalUI::slot_style(&slot);
        assert_eq!(style.bg, Some(Color::Rgb(0x6f, 0xff, 0x71)));
        assert_eq!(style.fg, Some(Color::Black));
    }
}
