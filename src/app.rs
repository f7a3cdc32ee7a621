//! Application orchestration layer
//!
//! Wires the revealer, the retained board view, and the UI renderer
//! together. The run loop owns the reveal timer: each fire renders one pick
//! into the view, the fire after the last pick cancels the timer, and the
//! board then sits on screen until the user quits.

use crate::config::BoardConfig;
use crate::error::Result;
use crate::render::BoardView;
use crate::reveal::{RevealStep, RevealTimer, Revealer};
use crate::ui::{UICommand, UIRenderer};
use std::time::Duration;

/// How often the run loop polls for user input between timer fires
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Application orchestrator - coordinates the reveal sequence and the UI
pub struct Application {
    revealer: Revealer,
    view: BoardView,
    period: Duration,
    ui_renderer: Box<dyn UIRenderer>,
}

impl Application {
    /// Create application by wiring components from a board config.
    ///
    /// The view gets one slot per pick, so the well-formed sequence never
    /// runs out of slots.
    pub fn new(config: BoardConfig, ui_renderer: Box<dyn UIRenderer>) -> Self {
        let period = config.interval();
        let logo_base = config.logo_base.clone();
        let board = config.into_board();
        let view = BoardView::new(board.len());

        Self {
            revealer: Revealer::new(board, logo_base),
            view,
            period,
            ui_renderer,
        }
    }

    pub fn view(&self) -> &BoardView {
        &self.view
    }

    /// Run the application until the user quits.
    pub async fn run(&mut self) -> Result<()> {
        self.ui_renderer.initialize()?;
        let result = self.run_loop().await;
        self.ui_renderer.cleanup()?;
        result
    }

    async fn run_loop(&mut self) -> Result<()> {
        // First reveal lands one full period after startup, never sooner
        let mut timer = RevealTimer::new(self.period);
        self.ui_renderer.render(&self.view)?;

        loop {
            tokio::select! {
                _ = timer.tick() => {
                    if let RevealStep::Exhausted = self.revealer.reveal_next(&mut self.view)? {
                        timer.cancel();
                    }
                }
                _ = tokio::time::sleep(INPUT_POLL_INTERVAL) => {
                    if let Some(UICommand::Quit) =
                        self.ui_renderer.handle_input(Some(Duration::ZERO))?
                    {
                        return Ok(());
                    }
                }
            }

            self.ui_renderer.render(&self.view)?;
        }
    }
}
