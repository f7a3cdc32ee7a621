//! Draft board data model
//!
//! A board is an ordered list of picks for one round. Picks are immutable
//! records; all formatting used by the reveal sequence (name splitting, logo
//! slugs, pick-number labels) lives here so render targets never re-derive it.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Draft positions recognized by the scouting data.
///
/// Unknown abbreviations are preserved in `Other` rather than rejected; they
/// render normally but receive no highlight color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Position {
    Qb,
    Rb,
    Wr,
    Te,
    K,
    Other(String),
}

impl Position {
    /// Scouting abbreviation as displayed on the board ("WR - Ohio State")
    pub fn abbreviation(&self) -> &str {
        match self {
            Position::Qb => "QB",
            Position::Rb => "RB",
            Position::Wr => "WR",
            Position::Te => "TE",
            Position::K => "K",
            Position::Other(s) => s,
        }
    }
}

impl FromStr for Position {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "QB" => Position::Qb,
            "RB" => Position::Rb,
            "WR" => Position::Wr,
            "TE" => Position::Te,
            "K" => Position::K,
            other => Position::Other(other.to_string()),
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap_or(Position::Other(s)))
    }
}

/// One draft-selection record: who was picked, at what position, from where.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pick {
    pub name: String,
    pub position: Position,
    pub college: String,
}

impl Pick {
    pub fn new(
        name: impl Into<String>,
        position: Position,
        college: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            college: college.into(),
        }
    }

    /// First whitespace-separated token of the player name
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }

    /// Everything after the first token, joined with single spaces.
    ///
    /// Empty for single-token names, matching how the board displays them
    /// (a blank second line rather than a repeated first name).
    pub fn last_name(&self) -> String {
        let mut tokens = self.name.split_whitespace();
        tokens.next();
        tokens.collect::<Vec<_>>().join(" ")
    }

    /// College name lowercased with runs of whitespace collapsed to one
    /// underscore: "Ohio State" -> "ohio_state"
    pub fn logo_slug(&self) -> String {
        self.college
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
    }

    /// Info line shown under the name: "WR - Ohio State"
    pub fn info_line(&self) -> String {
        format!("{} - {}", self.position, self.college)
    }

    /// Accessible label for the team logo image
    pub fn logo_alt(&self) -> String {
        format!("{} logo", self.college)
    }
}

/// The ordered pick list for one round.
#[derive(Debug, Clone)]
pub struct Board {
    pub round: u32,
    pub picks: Vec<Pick>,
}

impl Board {
    pub fn new(round: u32, picks: Vec<Pick>) -> Self {
        Self { round, picks }
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Pick-number label for the slot at `index`, 1-indexed within the round:
    /// round 1, index 0 -> "1.1"
    pub fn pick_label(&self, index: usize) -> String {
        format!("{}.{}", self.round, index + 1)
    }
}

impl Default for Board {
    /// The built-in round 1 board used when no board file is given.
    fn default() -> Self {
        Self::new(
            1,
            vec![
                Pick::new("Jeremiah Smith", Position::Wr, "Ohio State"),
                Pick::new("Darius Taylor", Position::Rb, "Minnesota"),
                Pick::new("Desmond Reid", Position::Rb, "Pittsburgh"),
                Pick::new("Makhi Hughes", Position::Rb, "Oregon"),
                Pick::new("Jordyn Tyson", Position::Wr, "Arizona State"),
                Pick::new("Bryson Washington", Position::Rb, "Baylor"),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_name_splitting() {
        let pick = Pick::new("Jeremiah Smith", Position::Wr, "Ohio State");
        assert_eq!(pick.first_name(), "Jeremiah");
        assert_eq!(pick.last_name(), "Smith");

        let pick = Pick::new("Bryson Washington", Position::Rb, "Baylor");
        assert_eq!(pick.first_name(), "Bryson");
        assert_eq!(pick.last_name(), "Washington");
    }

    #[test]
    fn test_name_splitting_three_tokens() {
        let pick = Pick::new("A B C", Position::Rb, "Baylor");
        assert_eq!(pick.first_name(), "A");
        assert_eq!(pick.last_name(), "B C");
    }

    #[test]
    fn test_name_splitting_single_token() {
        let pick = Pick::new("Neo", Position::Qb, "Zion");
        assert_eq!(pick.first_name(), "Neo");
        assert_eq!(pick.last_name(), "");
    }

    #[test]
    fn test_logo_slug() {
        let pick = Pick::new("Jeremiah Smith", Position::Wr, "Ohio State");
        assert_eq!(pick.logo_slug(), "ohio_state");

        let pick = Pick::new("Jordyn Tyson", Position::Wr, "Arizona State");
        assert_eq!(pick.logo_slug(), "arizona_state");

        let pick = Pick::new("Desmond Reid", Position::Rb, "Pittsburgh");
        assert_eq!(pick.logo_slug(), "pittsburgh");
    }

    #[test]
    fn test_logo_slug_collapses_whitespace_runs() {
        let pick = Pick::new("X Y", Position::Te, "Texas  A&M");
        assert_eq!(pick.logo_slug(), "texas_a&m");
    }

    #[test]
    fn test_info_line_and_alt() {
        let pick = Pick::new("Jeremiah Smith", Position::Wr, "Ohio State");
        assert_eq!(pick.info_line(), "WR - Ohio State");
        assert_eq!(pick.logo_alt(), "Ohio State logo");
    }

    #[test]
    fn test_position_parsing() {
        assert_eq!("WR".parse::<Position>().unwrap(), Position::Wr);
        assert_eq!("RB".parse::<Position>().unwrap(), Position::Rb);
        assert_eq!("K".parse::<Position>().unwrap(), Position::K);
        assert_eq!(
            "LS".parse::<Position>().unwrap(),
            Position::Other("LS".to_string())
        );
        assert_eq!(Position::Other("LS".to_string()).to_string(), "LS");
    }

    #[test]
    fn test_pick_labels() {
        let board = Board::default();
        assert_eq!(board.pick_label(0), "1.1");
        assert_eq!(board.pick_label(5), "1.6");

        let board = Board::new(2, vec![]);
        assert_eq!(board.pick_label(0), "2.1");
    }

    #[test]
    fn test_default_board() {
        let board = Board::default();
        assert_eq!(board.round, 1);
        assert_eq!(board.len(), 6);
        assert_eq!(board.picks[0].name, "Jeremiah Smith");
        assert_eq!(board.picks[5].college, "Baylor");
        assert!(!board.is_empty());
    }

    proptest! {
        #[test]
        fn prop_slug_never_contains_whitespace_or_uppercase(college in "[A-Za-z ]{1,40}") {
            let pick = Pick::new("A B", Position::Wr, college);
            let slug = pick.logo_slug();
            prop_assert!(!slug.chars().any(char::is_whitespace));
            prop_assert!(!slug.chars().any(|c| c.is_ascii_uppercase()));
        }

        #[test]
        fn prop_name_split_loses_no_tokens(name in "[A-Za-z]{1,10}( [A-Za-z]{1,10}){0,4}") {
            let pick = Pick::new(name.clone(), Position::Rb, "Baylor");
            let rejoined = if pick.last_name().is_empty() {
                pick.first_name().to_string()
            } else {
                format!("{} {}", pick.first_name(), pick.last_name())
            };
            let normalized = name.split_whitespace().collect::<Vec<_>>().join(" ");
            prop_assert_eq!(rejoined, normalized);
        }
    }
}
