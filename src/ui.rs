//! Terminal UI module with ratatui
//!
//! This module provides the terminal front end for the draft board using the
//! ratatui library. It follows a trait-based architecture so the reveal loop
//! can be driven against a mock renderer in tests.

pub mod renderer;
pub mod terminal;

// Re-export public API
pub use renderer::{UICommand, UIRenderer};
pub use terminal::TerminalUI;

#[cfg(test)]
pub use renderer::tests::MockUIRenderer;
