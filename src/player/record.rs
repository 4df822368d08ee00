// Player records: the immutable stat-line snapshots the engine consumes.
//
// Batters and pitchers are kept as separate types since the two domains have
// disjoint schemas; both share the identity contract (stable id, display
// name, season label, salary in the smallest currency unit). Records are
// plain data; the engine never mutates them and always returns derived
// results as new objects.

use serde::{Deserialize, Serialize};

use crate::player::codes::{PitchingRoles, PlatoonBalance};

/// One defensive rating entry: where a batter can field and how well.
///
/// Range is rated 1 (best) to 5 (worst). The first entry in a batter's
/// defensive profile is the primary rating used for scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefenseRating {
    /// Position token, e.g. "SS" or "CF".
    pub position: String,
    pub range: u8,
    pub errors: u32,
    /// Arm rating, present only for positions where it matters.
    #[serde(default)]
    pub arm: Option<u8>,
}

/// A batter's season stat line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batter {
    /// Stable unique id.
    pub id: String,
    pub name: String,
    /// Season label, e.g. "2025".
    pub season: String,
    /// Salary in the smallest currency unit.
    pub salary: u32,
    /// Position list, e.g. "C" or "SS/2B".
    pub positions: String,
    #[serde(default)]
    pub games: u32,
    #[serde(default)]
    pub plate_appearances: u32,
    #[serde(default)]
    pub at_bats: u32,
    #[serde(default)]
    pub hits: u32,
    #[serde(default)]
    pub doubles: u32,
    #[serde(default)]
    pub triples: u32,
    #[serde(default)]
    pub home_runs: u32,
    #[serde(default)]
    pub walks: u32,
    #[serde(default)]
    pub hit_by_pitch: u32,
    #[serde(default)]
    pub stolen_bases: u32,
    #[serde(default)]
    pub caught_stealing: u32,
    /// Platoon balance, parsed from codes like "3R" or "E".
    #[serde(default)]
    pub balance: PlatoonBalance,
    /// Defensive profile; first entry is the primary rating.
    #[serde(default)]
    pub defense: Vec<DefenseRating>,
}

impl Batter {
    /// Singles, derived from hits minus extra-base hits.
    ///
    /// Saturating: a dirty stat line with more extra-base hits than hits
    /// yields zero singles instead of underflowing.
    pub fn singles(&self) -> u32 {
        self.hits
            .saturating_sub(self.doubles)
            .saturating_sub(self.triples)
            .saturating_sub(self.home_runs)
    }

    /// Outs made, derived from at-bats minus hits. Saturating.
    pub fn outs(&self) -> u32 {
        self.at_bats.saturating_sub(self.hits)
    }

    /// Primary defensive rating, when the batter has one at all.
    pub fn primary_defense(&self) -> Option<&DefenseRating> {
        self.defense.first()
    }
}

/// A pitcher's season stat line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pitcher {
    /// Stable unique id.
    pub id: String,
    pub name: String,
    /// Season label, e.g. "2025".
    pub season: String,
    /// Salary in the smallest currency unit.
    pub salary: u32,
    #[serde(default)]
    pub games: u32,
    #[serde(default)]
    pub games_started: u32,
    #[serde(default)]
    pub innings: f64,
    #[serde(default)]
    pub strikeouts: u32,
    #[serde(default)]
    pub walks_allowed: u32,
    #[serde(default)]
    pub hits_allowed: u32,
    #[serde(default)]
    pub home_runs_allowed: u32,
    #[serde(default)]
    pub earned_runs: u32,
    /// Role capabilities, parsed from endurance codes like "S8" or "R2C1".
    #[serde(default)]
    pub endurance: PitchingRoles,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::codes::PlatoonSide;

    #[test]
    fn batter_singles_and_outs() {
        let batter = Batter {
            id: "b1".to_string(),
            name: "Test Batter".to_string(),
            season: "2025".to_string(),
            salary: 900,
            positions: "LF".to_string(),
            games: 140,
            plate_appearances: 600,
            at_bats: 500,
            hits: 150,
            doubles: 20,
            triples: 5,
            home_runs: 25,
            walks: 50,
            hit_by_pitch: 5,
            stolen_bases: 10,
            caught_stealing: 3,
            balance: PlatoonBalance::neutral(),
            defense: vec![],
        };
        assert_eq!(batter.singles(), 100);
        assert_eq!(batter.outs(), 350);
    }

    #[test]
    fn batter_singles_saturate_on_dirty_lines() {
        let batter = Batter {
            id: "b2".to_string(),
            name: "Dirty Line".to_string(),
            season: "2025".to_string(),
            salary: 100,
            positions: "DH".to_string(),
            games: 10,
            plate_appearances: 30,
            at_bats: 20,
            hits: 3,
            doubles: 2,
            triples: 0,
            home_runs: 4, // more extra-base hits than hits
            walks: 1,
            hit_by_pitch: 0,
            stolen_bases: 0,
            caught_stealing: 0,
            balance: PlatoonBalance::neutral(),
            defense: vec![],
        };
        assert_eq!(batter.singles(), 0);
        assert_eq!(batter.outs(), 17);
    }

    #[test]
    fn batter_primary_defense_is_first_entry() {
        let batter = Batter {
            id: "b3".to_string(),
            name: "Two Gloves".to_string(),
            season: "2025".to_string(),
            salary: 700,
            positions: "SS/2B".to_string(),
            games: 150,
            plate_appearances: 620,
            at_bats: 550,
            hits: 140,
            doubles: 25,
            triples: 3,
            home_runs: 12,
            walks: 45,
            hit_by_pitch: 2,
            stolen_bases: 20,
            caught_stealing: 6,
            balance: PlatoonBalance::parse("2L"),
            defense: vec![
                DefenseRating { position: "SS".to_string(), range: 2, errors: 8, arm: Some(3) },
                DefenseRating { position: "2B".to_string(), range: 1, errors: 2, arm: None },
            ],
        };
        let primary = batter.primary_defense().unwrap();
        assert_eq!(primary.position, "SS");
        assert_eq!(primary.range, 2);
    }

    #[test]
    fn batter_deserializes_from_snapshot_json() {
        let json = r#"{
            "id": "b-100",
            "name": "Lead Off",
            "season": "2025",
            "salary": 1200,
            "positions": "CF",
            "games": 155,
            "plate_appearances": 680,
            "at_bats": 600,
            "hits": 180,
            "doubles": 30,
            "triples": 8,
            "home_runs": 12,
            "walks": 60,
            "hit_by_pitch": 4,
            "stolen_bases": 40,
            "caught_stealing": 9,
            "balance": "3L",
            "defense": [{ "position": "CF", "range": 1, "errors": 3, "arm": 4 }]
        }"#;
        let batter: Batter = serde_json::from_str(json).expect("batter should deserialize");
        assert_eq!(batter.balance.side, PlatoonSide::Left);
        assert_eq!(batter.balance.level, 3);
        assert_eq!(batter.defense.len(), 1);
        assert_eq!(batter.defense[0].arm, Some(4));
    }

    #[test]
    fn batter_missing_stats_default_to_zero() {
        let json = r#"{
            "id": "b-101",
            "name": "Sparse Line",
            "season": "2025",
            "salary": 100,
            "positions": "1B"
        }"#;
        let batter: Batter = serde_json::from_str(json).expect("sparse batter should deserialize");
        assert_eq!(batter.at_bats, 0);
        assert_eq!(batter.hits, 0);
        assert!(batter.balance.is_neutral());
        assert!(batter.defense.is_empty());
    }

    #[test]
    fn pitcher_deserializes_with_endurance_code() {
        let json = r#"{
            "id": "p-1",
            "name": "Swing Man",
            "season": "2025",
            "salary": 800,
            "games": 40,
            "games_started": 12,
            "innings": 120.0,
            "strikeouts": 110,
            "walks_allowed": 35,
            "hits_allowed": 105,
            "home_runs_allowed": 11,
            "earned_runs": 48,
            "endurance": "S6R3"
        }"#;
        let pitcher: Pitcher = serde_json::from_str(json).expect("pitcher should deserialize");
        assert!(pitcher.endurance.can_start);
        assert!(pitcher.endurance.can_relieve);
        assert!(!pitcher.endurance.closer);
        assert!(!pitcher.endurance.is_pure_reliever());
    }

    #[test]
    fn pitcher_missing_endurance_has_no_roles() {
        let json = r#"{
            "id": "p-2",
            "name": "No Code",
            "season": "2025",
            "salary": 300
        }"#;
        let pitcher: Pitcher = serde_json::from_str(json).expect("pitcher should deserialize");
        assert!(!pitcher.endurance.can_start);
        assert!(!pitcher.endurance.can_relieve);
        assert_eq!(pitcher.innings, 0.0);
    }
}
