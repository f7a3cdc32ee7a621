//! UI renderer trait and input commands
//!
//! This module defines the UIRenderer trait for drawing the board view and
//! translating user input into commands.

use crate::error::Result;
use crate::render::BoardView;
use std::time::Duration;

/// Commands a renderer can produce from user input.
///
/// The reveal sequence itself takes no input; it runs on its own timer and
/// self-cancels when the board is exhausted. The only thing the user can do
/// is leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UICommand {
    Quit,
}

/// Core trait for board rendering and input handling
pub trait UIRenderer {
    /// Render the current board view to the terminal
    ///
    /// Called once per loop iteration; must redraw every slot from the
    /// retained view state, revealed or not.
    fn render(&mut self, view: &BoardView) -> Result<()>;

    /// Handle user input and return the next command
    ///
    /// Blocks for at most `timeout` (renderer default when None) and returns
    /// None when no input arrived.
    fn handle_input(&mut self, timeout: Option<Duration>) -> Result<Option<UICommand>>;

    /// Set up the terminal (raw mode, alternate screen)
    fn initialize(&mut self) -> Result<()>;

    /// Restore the terminal to its original state
    fn cleanup(&mut self) -> Result<()>;
}
