use serde::{Deserialize, Serialize};

use super::designation::{Role, TeamSide, WinnerDesignation};
use super::errors::RecordError;

/// Hole count used when a round definition does not give one
pub const DEFAULT_HOLE_COUNT: u8 = 18;

/// Trims a player name. Names that are blank after trimming are rejected.
pub fn normalize_player_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRosters {
    #[serde(default)]
    pub team_a: Vec<String>,
    #[serde(default)]
    pub team_b: Vec<String>,
}

impl TeamRosters {
    pub fn members(&self, side: TeamSide) -> &[String] {
        match side {
            TeamSide::A => &self.team_a,
            TeamSide::B => &self.team_b,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.team_a.is_empty() && self.team_b.is_empty()
    }
}

/// One scored outing on one course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub id: String,
    pub day: String,
    pub round_number: u32,
    pub course: String,
    pub challenger: Option<String>,
    pub hunter: Option<String>,
    pub teams: Option<TeamRosters>,
    #[serde(default = "default_hole_count")]
    pub holes: u8,
}

fn default_hole_count() -> u8 {
    DEFAULT_HOLE_COUNT
}

impl Round {
    /// Builds the conventional identifier, e.g. `D1R2` for day 1 round 2
    pub fn derive_id(day_number: u32, round_number: u32) -> String {
        format!("D{}R{}", day_number, round_number)
    }

    /// Validates a definition and turns it into a round
    pub fn from_definition(definition: RoundDefinition) -> Result<Self, RecordError> {
        if definition.round_number == 0 {
            return Err(RecordError::InvalidRoundNumber);
        }

        let holes = definition.holes.unwrap_or(DEFAULT_HOLE_COUNT);
        if holes == 0 {
            return Err(RecordError::InvalidHoleCount);
        }

        let id = match definition
            .round_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
        {
            Some(id) => id.to_string(),
            None => {
                let day_number = day_number_from_label(&definition.day)
                    .ok_or_else(|| RecordError::UnderivableRoundId(definition.day.clone()))?;
                Self::derive_id(day_number, definition.round_number)
            }
        };

        let roster = |names: Vec<String>| -> Vec<String> {
            let mut members: Vec<String> = Vec::new();
            for name in names.iter().filter_map(|n| normalize_player_name(n)) {
                if !members.contains(&name) {
                    members.push(name);
                }
            }
            members
        };

        let teams = TeamRosters {
            team_a: roster(definition.team_a),
            team_b: roster(definition.team_b),
        };

        Ok(Self {
            id,
            day: definition.day.trim().to_string(),
            round_number: definition.round_number,
            course: definition.course.trim().to_string(),
            challenger: definition
                .challenger
                .as_deref()
                .and_then(normalize_player_name),
            hunter: definition.hunter.as_deref().and_then(normalize_player_name),
            teams: (!teams.is_empty()).then_some(teams),
            holes,
        })
    }

    /// The player holding `role` in this round, if one was assigned
    pub fn role_holder(&self, role: Role) -> Option<&str> {
        match role {
            Role::Challenger => self.challenger.as_deref(),
            Role::Hunter => self.hunter.as_deref(),
        }
    }

    pub fn team_members(&self, side: TeamSide) -> &[String] {
        self.teams
            .as_ref()
            .map(|teams| teams.members(side))
            .unwrap_or_default()
    }

    /// Every player named by this round: challenger, hunter, then rosters
    pub fn named_players(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        let candidates = self
            .challenger
            .iter()
            .chain(self.hunter.iter())
            .chain(self.team_members(TeamSide::A))
            .chain(self.team_members(TeamSide::B));

        for name in candidates {
            if !names.contains(&name.as_str()) {
                names.push(name);
            }
        }
        names
    }

    pub fn contains_hole(&self, hole: u8) -> bool {
        (1..=self.holes).contains(&hole)
    }
}

/// Extracts the day number from labels like "1", "Day 2" or "D3"
fn day_number_from_label(day: &str) -> Option<u32> {
    let digits: String = day
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok().filter(|n| *n > 0)
}

/// Raw round definition as entered by a user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundDefinition {
    #[serde(default)]
    pub round_id: Option<String>,
    #[serde(default)]
    pub day: String,
    pub round_number: u32,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub challenger: Option<String>,
    #[serde(default)]
    pub hunter: Option<String>,
    #[serde(default)]
    pub team_a: Vec<String>,
    #[serde(default)]
    pub team_b: Vec<String>,
    #[serde(default)]
    pub holes: Option<u8>,
}

/// Total strokes for one player in one round.
///
/// `round_id` is `None` for single-round uploads that never named a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokeRecord {
    pub round_id: Option<String>,
    pub player: String,
    pub total_strokes: u32,
}

impl StrokeRecord {
    pub fn new(round_id: Option<&str>, player: &str, total_strokes: u32) -> Self {
        Self {
            round_id: round_id.map(str::to_string),
            player: player.to_string(),
            total_strokes,
        }
    }

    pub fn same_key(&self, other: &StrokeRecord) -> bool {
        self.round_id == other.round_id && self.player == other.player
    }
}

/// Winner of one hole of one round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinsResult {
    pub round_id: String,
    pub hole: u8,
    pub winner: WinnerDesignation,
}

impl SkinsResult {
    pub fn new(round_id: &str, hole: u8, winner: WinnerDesignation) -> Self {
        Self {
            round_id: round_id.to_string(),
            hole,
            winner,
        }
    }

    pub fn same_key(&self, other: &SkinsResult) -> bool {
        self.round_id == other.round_id && self.hole == other.hole
    }
}

/// Raw hole result as entered by a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkinsEntry {
    pub round_id: String,
    pub hole: u8,
    pub winner: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn definition(day: &str, round_number: u32) -> RoundDefinition {
        RoundDefinition {
            day: day.to_string(),
            round_number,
            course: "Maple Hill".to_string(),
            ..RoundDefinition::default()
        }
    }

    #[rstest]
    #[case("1", 1, "D1R1")]
    #[case("Day 2", 3, "D2R3")]
    #[case("D3", 1, "D3R1")]
    fn derives_round_id_from_day_label(
        #[case] day: &str,
        #[case] round_number: u32,
        #[case] expected: &str,
    ) {
        let round = Round::from_definition(definition(day, round_number)).unwrap();
        assert_eq!(round.id, expected);
        assert_eq!(round.holes, DEFAULT_HOLE_COUNT);
    }

    #[test]
    fn explicit_round_id_wins_over_derivation() {
        let mut def = definition("Day 1", 1);
        def.round_id = Some("  finals ".to_string());

        let round = Round::from_definition(def).unwrap();
        assert_eq!(round.id, "finals");
    }

    #[test]
    fn rejects_round_without_derivable_id() {
        let result = Round::from_definition(definition("Saturday", 1));
        assert!(matches!(result, Err(RecordError::UnderivableRoundId(_))));
    }

    #[test]
    fn rejects_zero_round_number_and_hole_count() {
        let result = Round::from_definition(definition("1", 0));
        assert!(matches!(result, Err(RecordError::InvalidRoundNumber)));

        let mut def = definition("1", 1);
        def.holes = Some(0);
        let result = Round::from_definition(def);
        assert!(matches!(result, Err(RecordError::InvalidHoleCount)));
    }

    #[test]
    fn blank_roles_and_roster_entries_are_dropped() {
        let mut def = definition("1", 1);
        def.challenger = Some(" Alice ".to_string());
        def.hunter = Some("   ".to_string());
        def.team_a = vec!["Bob".into(), " ".into(), "Bob".into()];

        let round = Round::from_definition(def).unwrap();
        assert_eq!(round.challenger.as_deref(), Some("Alice"));
        assert_eq!(round.hunter, None);
        assert_eq!(round.team_members(TeamSide::A), ["Bob".to_string()]);
        assert!(round.team_members(TeamSide::B).is_empty());
        assert_eq!(round.named_players(), vec!["Alice", "Bob"]);
    }

    #[test]
    fn empty_rosters_are_stored_as_no_teams() {
        let round = Round::from_definition(definition("1", 1)).unwrap();
        assert!(round.teams.is_none());
    }

    #[test]
    fn hole_range_follows_hole_count() {
        let mut def = definition("1", 1);
        def.holes = Some(9);
        let round = Round::from_definition(def).unwrap();

        assert!(round.contains_hole(1));
        assert!(round.contains_hole(9));
        assert!(!round.contains_hole(0));
        assert!(!round.contains_hole(10));
    }
}
