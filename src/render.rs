//! Render-target seam between the reveal sequence and the display substrate
//!
//! The reveal algorithm only ever talks to [`SlotRenderer`] and
//! [`RevealSurface`], so the same sequencing logic drives the ratatui board,
//! an image-capable front end, or a plain in-memory surface in tests. The
//! standard in-memory implementation ([`BoardView`]) is what the terminal UI
//! draws from.

use crate::board::Position;
use crate::error::Result;

/// 24-bit color value, substrate-neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Highlight for wide receivers (#6fff71)
pub const WR_HIGHLIGHT: Rgb = Rgb(0x6f, 0xff, 0x71);
/// Highlight for running backs (#6fe3ff)
pub const RB_HIGHLIGHT: Rgb = Rgb(0x6f, 0xe3, 0xff);

/// Background highlight for a position, if the board defines one.
///
/// Positions without a mapping keep the slot's default background; that is
/// expected for any position outside WR/RB, not an error.
pub fn position_highlight(position: &Position) -> Option<Rgb> {
    match position {
        Position::Wr => Some(WR_HIGHLIGHT),
        Position::Rb => Some(RB_HIGHLIGHT),
        _ => None,
    }
}

/// Image reference for a team logo: `<base>/<slug>.png`.
///
/// Whether the asset actually exists is the substrate's problem; a missing
/// file renders as a broken image, never a functional error.
pub fn logo_url(base: &str, slug: &str) -> String {
    format!("{}/{}.png", base.trim_end_matches('/'), slug)
}

/// Addressable text regions inside a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    PickNumber,
    FirstName,
    LastName,
    PlayerInfo,
}

/// One rendering target for one pick.
///
/// Text fields overwrite; logos append. Implementations must not reorder or
/// defer mutations, the reveal sequence relies on a slot being fully drawn
/// when a reveal call returns.
pub trait SlotRenderer {
    /// Fill the slot background with a highlight color
    fn set_background(&mut self, color: Rgb) -> Result<()>;

    /// Append a logo image to the slot's logo region (does not clear prior logos)
    fn append_logo(&mut self, url: &str, alt: &str) -> Result<()>;

    /// Overwrite one text field
    fn set_text(&mut self, field: TextField, value: &str) -> Result<()>;
}

/// An ordered collection of slots, matched to picks by index.
pub trait RevealSurface {
    fn slot_count(&self) -> usize;

    /// Mutable access to the slot at `index`, or None when the surface has
    /// fewer slots than the board has picks
    fn slot_mut(&mut self, index: usize) -> Option<&mut dyn SlotRenderer>;
}

/// A logo reference appended to a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo {
    pub url: String,
    pub alt: String,
}

/// Retained state of one board cell.
#[derive(Debug, Clone, Default)]
pub struct SlotState {
    pub background: Option<Rgb>,
    pub logos: Vec<Logo>,
    pub pick_number: String,
    pub first_name: String,
    pub last_name: String,
    pub player_info: String,
}

impl SlotState {
    /// A slot counts as revealed once its pick number has been written;
    /// that field is set exactly once per reveal.
    pub fn is_revealed(&self) -> bool {
        !self.pick_number.is_empty()
    }
}

impl SlotRenderer for SlotState {
    fn set_background(&mut self, color: Rgb) -> Result<()> {
        self.background = Some(color);
        Ok(())
    }

    fn append_logo(&mut self, url: &str, alt: &str) -> Result<()> {
        self.logos.push(Logo {
            url: url.to_string(),
            alt: alt.to_string(),
        });
        Ok(())
    }

    fn set_text(&mut self, field: TextField, value: &str) -> Result<()> {
        let target = match field {
            TextField::PickNumber => &mut self.pick_number,
            TextField::FirstName => &mut self.first_name,
            TextField::LastName => &mut self.last_name,
            TextField::PlayerInfo => &mut self.player_info,
        };
        *target = value.to_string();
        Ok(())
    }
}

/// The standard in-memory surface: one [`SlotState`] per expected pick.
///
/// The terminal UI renders this retained state every frame; tests inspect it
/// directly.
#[derive(Debug, Clone, Default)]
pub struct BoardView {
    slots: Vec<SlotState>,
}

impl BoardView {
    /// Create a view with `slot_count` empty slots
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: vec![SlotState::default(); slot_count],
        }
    }

    pub fn slots(&self) -> &[SlotState] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&SlotState> {
        self.slots.get(index)
    }

    /// Number of slots that have been revealed so far
    pub fn revealed_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_revealed()).count()
    }
}

impl RevealSurface for BoardView {
    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut dyn SlotRenderer> {
        self.slots
            .get_mut(index)
            .map(|slot| slot as &mut dyn SlotRenderer)
    }
}
