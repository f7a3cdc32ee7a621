//! Sequential reveal scheduler
//!
//! [`Revealer`] walks the board's pick list with a monotonic cursor and
//! renders exactly one pick per call into the matching surface slot.
//! [`RevealTimer`] is the repeating-timer abstraction that drives it: first
//! fire one full period after creation, self-cancelled once the board is
//! exhausted. Both run entirely on tokio time, so tests drive them with a
//! paused clock instead of waiting on wall time.

use crate::board::Board;
use crate::error::Result;
use crate::render::{logo_url, position_highlight, RevealSurface, TextField};
use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

/// Default delay between reveals
pub const DEFAULT_REVEAL_INTERVAL: Duration = Duration::from_millis(3000);

/// Default base path for team logo assets
pub const DEFAULT_LOGO_BASE: &str = "static/images/teams";

/// Outcome of one reveal tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    /// The pick at `slot` was rendered into its slot
    Revealed { slot: usize },
    /// The surface had no slot for this index; the pick was skipped and the
    /// cursor advanced so the rest of the sequence still runs
    SkippedMissingSlot { slot: usize },
    /// Every pick has been consumed; nothing was rendered
    Exhausted,
}

/// Walks an ordered pick list, rendering one pick per tick.
///
/// The cursor only ever moves forward, and a slot is written at most once:
/// slot `k` is rendered exactly when `k < cursor` and slot `k` exists.
pub struct Revealer {
    board: Board,
    cursor: usize,
    logo_base: String,
}

impl Revealer {
    pub fn new(board: Board, logo_base: impl Into<String>) -> Self {
        Self {
            board,
            cursor: 0,
            logo_base: logo_base.into(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Index of the next pick to reveal
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.board.len()
    }

    /// Reveal the pick at the cursor into the matching slot.
    ///
    /// Runs the whole per-pick contract before returning: highlight color by
    /// position (skipped for positions without a mapping), appended team
    /// logo, pick-number label, stacked first/last name, and the
    /// position-college info line. The cursor advances by exactly one on
    /// every consumed tick, including skips.
    pub fn reveal_next(&mut self, surface: &mut dyn RevealSurface) -> Result<RevealStep> {
        if self.is_exhausted() {
            return Ok(RevealStep::Exhausted);
        }

        let index = self.cursor;
        let pick = &self.board.picks[index];

        let Some(slot) = surface.slot_mut(index) else {
            log::warn!(
                "no slot for pick {} ({}); skipping",
                self.board.pick_label(index),
                pick.name
            );
            self.cursor += 1;
            return Ok(RevealStep::SkippedMissingSlot { slot: index });
        };

        if let Some(color) = position_highlight(&pick.position) {
            slot.set_background(color)?;
        }

        slot.append_logo(&logo_url(&self.logo_base, &pick.logo_slug()), &pick.logo_alt())?;
        slot.set_text(TextField::PickNumber, &self.board.pick_label(index))?;
        slot.set_text(TextField::FirstName, pick.first_name())?;
        slot.set_text(TextField::LastName, &pick.last_name())?;
        slot.set_text(TextField::PlayerInfo, &pick.info_line())?;

        log::debug!("revealed {} {}", self.board.pick_label(index), pick.name);
        self.cursor += 1;
        Ok(RevealStep::Revealed { slot: index })
    }
}

/// Repeating timer with a cancel handle.
///
/// The first fire happens one full period after construction, never
/// synchronously. Once cancelled, `tick` never completes again, which makes
/// a cancelled timer inert inside a `select!` loop.
pub struct RevealTimer {
    interval: Option<Interval>,
}

impl RevealTimer {
    pub fn new(period: Duration) -> Self {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self {
            interval: Some(interval),
        }
    }

    /// Wait for the next fire; pends forever after cancellation
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }

    pub fn cancel(&mut self) {
        self.interval = None;
    }

    pub fn is_cancelled(&self) -> bool {
        self.interval.is_none()
    }
}

/// Drive a revealer to completion on a repeating timer.
///
/// Each fire performs exactly one reveal. The fire that finds the board
/// exhausted cancels the timer instead of revealing, so the last reveal and
/// the cancellation always land on separate ticks; an empty board cancels on
/// the very first fire with zero reveals.
pub async fn run_schedule(
    revealer: &mut Revealer,
    surface: &mut (dyn RevealSurface + Send),
    period: Duration,
) -> Result<()> {
    let mut timer = RevealTimer::new(period);
    loop {
        timer.tick().await;
        if let RevealStep::Exhausted = revealer.reveal_next(surface)? {
            timer.cancel();
            return Ok(());
        }
    }
}
