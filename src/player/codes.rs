// Platoon balance and endurance code parsing.
//
// Player records carry two string-encoded fields from the source data: a
// platoon "balance" code ("3R" = favors right-handed pitching at strength 3,
// "E" = even) and a pitcher "endurance" code whose capability letters give
// roles ("S8" = starter with stamina 8, "R2C1" = reliever and closer). Both
// are parsed exactly once, at the record boundary, into the tagged structs
// below; scoring code never touches the raw strings. Malformed codes degrade
// to neutral/no-role rather than failing, so dirty input stays rankable.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

// ---------------------------------------------------------------------------
// Platoon balance
// ---------------------------------------------------------------------------

/// Which pitching hand a batter's platoon balance favors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatoonSide {
    Left,
    Right,
    Neutral,
}

/// Parsed platoon balance: a side and a strength level 0-9.
///
/// Neutral balances always carry level 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PlatoonBalance {
    pub side: PlatoonSide,
    pub level: u8,
}

impl PlatoonBalance {
    pub fn neutral() -> Self {
        PlatoonBalance { side: PlatoonSide::Neutral, level: 0 }
    }

    /// Parse a balance code like "3R", "5L", or "E".
    ///
    /// The level is the first decimal digit in the code and the side the
    /// first 'L' or 'R', in either order ("3R" and "R3" both parse). "E",
    /// the empty string, and anything missing a digit or a side letter all
    /// yield a neutral balance; nothing here can fail.
    pub fn parse(code: &str) -> Self {
        let trimmed = code.trim();
        let mut level: Option<u8> = None;
        let mut side: Option<PlatoonSide> = None;
        for c in trimmed.chars() {
            match c {
                '0'..='9' if level.is_none() => level = Some(c as u8 - b'0'),
                'L' | 'l' if side.is_none() => side = Some(PlatoonSide::Left),
                'R' | 'r' if side.is_none() => side = Some(PlatoonSide::Right),
                _ => {}
            }
        }
        match (level, side) {
            (Some(level), Some(side)) => PlatoonBalance { side, level },
            _ => {
                if !trimmed.is_empty() && !trimmed.eq_ignore_ascii_case("E") {
                    debug!(code = trimmed, "unrecognized balance code, treating as neutral");
                }
                PlatoonBalance::neutral()
            }
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.side == PlatoonSide::Neutral
    }
}

impl Default for PlatoonBalance {
    fn default() -> Self {
        PlatoonBalance::neutral()
    }
}

impl fmt::Display for PlatoonBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.side {
            PlatoonSide::Neutral => write!(f, "E"),
            PlatoonSide::Left => write!(f, "{}L", self.level),
            PlatoonSide::Right => write!(f, "{}R", self.level),
        }
    }
}

impl From<String> for PlatoonBalance {
    fn from(code: String) -> Self {
        PlatoonBalance::parse(&code)
    }
}

impl From<PlatoonBalance> for String {
    fn from(balance: PlatoonBalance) -> Self {
        balance.to_string()
    }
}

// ---------------------------------------------------------------------------
// Pitching roles
// ---------------------------------------------------------------------------

/// Role capabilities parsed from a pitcher's endurance code.
///
/// 'S' marks a pitcher who can start, 'R' one who can relieve, and 'C' a
/// closer (which implies relieving). Stamina digits following each letter
/// are not used by the engine and are dropped during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PitchingRoles {
    pub can_start: bool,
    pub can_relieve: bool,
    pub closer: bool,
}

impl PitchingRoles {
    pub fn none() -> Self {
        PitchingRoles { can_start: false, can_relieve: false, closer: false }
    }

    /// Parse an endurance code like "S8", "R2", "C1", or "S6R3".
    ///
    /// Capability letters may appear in any order and any number of times;
    /// unknown characters are skipped. A code with no capability letters
    /// yields no roles; nothing here can fail.
    pub fn parse(code: &str) -> Self {
        let trimmed = code.trim();
        let mut roles = PitchingRoles::none();
        for c in trimmed.chars() {
            match c {
                'S' | 's' => roles.can_start = true,
                'R' | 'r' => roles.can_relieve = true,
                'C' | 'c' => {
                    roles.can_relieve = true;
                    roles.closer = true;
                }
                _ => {}
            }
        }
        if roles == PitchingRoles::none() && !trimmed.is_empty() {
            debug!(code = trimmed, "endurance code carries no role letters");
        }
        roles
    }

    /// Can relieve but cannot start.
    pub fn is_pure_reliever(&self) -> bool {
        self.can_relieve && !self.can_start
    }
}

impl Default for PitchingRoles {
    fn default() -> Self {
        PitchingRoles::none()
    }
}

impl fmt::Display for PitchingRoles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.can_start {
            write!(f, "S")?;
        }
        if self.closer {
            write!(f, "C")?;
        } else if self.can_relieve {
            write!(f, "R")?;
        }
        Ok(())
    }
}

impl From<String> for PitchingRoles {
    fn from(code: String) -> Self {
        PitchingRoles::parse(&code)
    }
}

impl From<PitchingRoles> for String {
    fn from(roles: PitchingRoles) -> Self {
        roles.to_string()
    }
}
