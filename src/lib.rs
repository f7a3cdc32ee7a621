//! # draftboard - Timed Draft Pick Reveal Board
//!
//! A terminal draft board that reveals one pick every few seconds: highlight
//! color by position, team logo reference derived from the college name, and
//! formatted pick-number / name / college text, until the board is exhausted
//! and the timer cancels itself.
//!
//! ## Architecture
//!
//! The library is organized into focused modules:
//!
//! - [`error`] - Centralized error types and handling
//! - [`board`] - Pick records and board formatting rules
//! - [`render`] - Render-target traits decoupling reveals from the substrate
//! - [`reveal`] - The sequential reveal scheduler and its timer
//! - [`config`] - TOML board files
//! - [`ui`] - ratatui terminal front end
//! - [`app`] - Application wiring and run loop
//!
//! The reveal scheduler runs on tokio time, so every timing property is
//! testable under a paused clock instead of wall-clock sleeps.

// Core modules
pub mod board;
pub mod error;
pub mod render;
pub mod reveal;

// Input and presentation
pub mod config;
pub mod ui;

// Application core
pub mod app;

// Re-export commonly used types for convenience
pub use error::{DraftboardError, Result};

// Public API surface for external usage
pub use app::Application;
pub use board::{Board, Pick, Position};
pub use config::BoardConfig;
pub use render::{BoardView, RevealSurface, SlotRenderer};
pub use reveal::{RevealStep, RevealTimer, Revealer};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
