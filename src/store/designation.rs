use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

/// Per-round roles that can be named as a hole winner instead of a player
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Role {
    Challenger,
    Hunter,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
pub enum TeamSide {
    A,
    B,
}

/// Which naming convention a team label was entered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamStyle {
    Lag,
    Team,
}

/// A team/lag label such as "Lag A" or "Team B"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamLabel {
    pub style: TeamStyle,
    pub side: TeamSide,
}

impl TeamLabel {
    pub fn new(style: TeamStyle, side: TeamSide) -> Self {
        Self { style, side }
    }

    /// Parses "lag a", "Team B", "lag-b", "TEAMA" and similar spellings
    pub fn parse(label: &str) -> Option<Self> {
        let compact: String = label
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        let (style, side) = if let Some(side) = compact.strip_prefix("lag") {
            (TeamStyle::Lag, side)
        } else if let Some(side) = compact.strip_prefix("team") {
            (TeamStyle::Team, side)
        } else {
            return None;
        };

        let side = match side {
            "a" => TeamSide::A,
            "b" => TeamSide::B,
            _ => return None,
        };

        Some(Self { style, side })
    }
}

impl fmt::Display for TeamLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = match self.style {
            TeamStyle::Lag => "Lag",
            TeamStyle::Team => "Team",
        };
        let side = match self.side {
            TeamSide::A => "A",
            TeamSide::B => "B",
        };
        write!(f, "{} {}", style, side)
    }
}

/// Who won a hole, as recorded. Roles and teams are resolved against the
/// round definition when credit is computed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum WinnerDesignation {
    Role(Role),
    Team(TeamLabel),
    Player(String),
}

impl WinnerDesignation {
    /// Parses a free-text winner label. Returns `None` for blank input.
    ///
    /// Role keywords and team labels are matched case-insensitively; any other
    /// text is taken as a player name.
    pub fn parse(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Ok(role) = trimmed.parse::<Role>() {
            return Some(Self::Role(role));
        }

        if let Some(team) = TeamLabel::parse(trimmed) {
            return Some(Self::Team(team));
        }

        Some(Self::Player(trimmed.to_string()))
    }
}

impl fmt::Display for WinnerDesignation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinnerDesignation::Role(role) => write!(f, "{}", role),
            WinnerDesignation::Team(team) => write!(f, "{}", team),
            WinnerDesignation::Player(name) => write!(f, "{}", name),
        }
    }
}
