// Lineup positions and position-list parsing.

use serde::Serialize;
use std::fmt;

/// The nine lineup positions a batter can cover.
///
/// Roster position coverage is checked against this set; pitchers are
/// accounted for separately through the roster's pitcher-count bounds and
/// never appear in a batter's position list. Positions serialize by variant
/// name; pool files never carry them directly, only raw position-list
/// strings, so there is no `Deserialize` here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Position {
    Catcher,
    FirstBase,
    SecondBase,
    ThirdBase,
    ShortStop,
    LeftField,
    CenterField,
    RightField,
    DesignatedHitter,
}

/// All nine required positions in canonical display order.
pub const REQUIRED_POSITIONS: [Position; 9] = [
    Position::Catcher,
    Position::FirstBase,
    Position::SecondBase,
    Position::ThirdBase,
    Position::ShortStop,
    Position::LeftField,
    Position::CenterField,
    Position::RightField,
    Position::DesignatedHitter,
];

impl Position {
    /// Parse a single position token.
    ///
    /// Handles the common abbreviations case-insensitively:
    /// - "1B" -> FirstBase, "2B" -> SecondBase, "3B" -> ThirdBase
    /// - "SS" -> ShortStop, "LF"/"CF"/"RF" -> the outfield spots
    /// - "DH" -> DesignatedHitter
    ///
    /// The generic token "OF" is handled by [`expand_token`], not here,
    /// since it names three positions at once.
    pub fn from_token(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "C" => Some(Position::Catcher),
            "1B" => Some(Position::FirstBase),
            "2B" => Some(Position::SecondBase),
            "3B" => Some(Position::ThirdBase),
            "SS" => Some(Position::ShortStop),
            "LF" => Some(Position::LeftField),
            "CF" => Some(Position::CenterField),
            "RF" => Some(Position::RightField),
            "DH" => Some(Position::DesignatedHitter),
            _ => None,
        }
    }

    /// Return the display string for this position.
    pub fn display_str(&self) -> &'static str {
        match self {
            Position::Catcher => "C",
            Position::FirstBase => "1B",
            Position::SecondBase => "2B",
            Position::ThirdBase => "3B",
            Position::ShortStop => "SS",
            Position::LeftField => "LF",
            Position::CenterField => "CF",
            Position::RightField => "RF",
            Position::DesignatedHitter => "DH",
        }
    }

    /// Deterministic ordering index for report display.
    pub fn sort_order(&self) -> u8 {
        match self {
            Position::Catcher => 0,
            Position::FirstBase => 1,
            Position::SecondBase => 2,
            Position::ThirdBase => 3,
            Position::ShortStop => 4,
            Position::LeftField => 5,
            Position::CenterField => 6,
            Position::RightField => 7,
            Position::DesignatedHitter => 8,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

/// Expand a single token into the concrete positions it names.
///
/// "OF" covers all three outfield spots at once; every other recognized
/// token names exactly one position. Unrecognized tokens expand to nothing,
/// so junk in a position list degrades silently instead of failing a parse.
pub fn expand_token(token: &str) -> Vec<Position> {
    if token.eq_ignore_ascii_case("OF") {
        return vec![Position::LeftField, Position::CenterField, Position::RightField];
    }
    Position::from_token(token).into_iter().collect()
}

/// Parse a raw position list into the positions it covers.
///
/// Lists arrive as free-form strings ("C", "SS/2B", "lf, cf", "1B 3B");
/// tokens are split on whitespace, commas, and slashes, parsed
/// case-insensitively, and deduplicated preserving first-seen order.
pub fn parse_position_list(list: &str) -> Vec<Position> {
    let mut seen: Vec<Position> = Vec::new();
    for token in list.split(|c: char| c.is_whitespace() || c == ',' || c == '/') {
        if token.is_empty() {
            continue;
        }
        for pos in expand_token(token) {
            if !seen.contains(&pos) {
                seen.push(pos);
            }
        }
    }
    seen
}

/// Whether a raw position list covers the given position.
pub fn list_covers(list: &str, position: Position) -> bool {
    parse_position_list(list).contains(&position)
}
