//! Test setup helpers - fluent API for building tournaments
#![allow(dead_code)] // Test utilities may not all be used in every test

use skinsboard::{
    InMemoryRecordStore, RoundDefinition, SkinsEntry, Table, TeamCreditPolicy, TournamentService,
    WinnerKind,
};

// ============================================================================
// Entry Helpers
// ============================================================================

/// Round definition with an explicit id and optional roles
pub fn round(id: &str, challenger: Option<&str>, hunter: Option<&str>) -> RoundDefinition {
    RoundDefinition {
        round_id: Some(id.to_string()),
        day: "1".to_string(),
        round_number: 1,
        course: "Maple Hill".to_string(),
        challenger: challenger.map(str::to_string),
        hunter: hunter.map(str::to_string),
        ..RoundDefinition::default()
    }
}

pub fn skins(round_id: &str, hole: u8, winner: &str) -> SkinsEntry {
    SkinsEntry {
        round_id: round_id.to_string(),
        hole,
        winner: winner.to_string(),
    }
}

// ============================================================================
// Tournament Builder
// ============================================================================

pub struct TournamentBuilder {
    weights: Vec<(WinnerKind, f64)>,
    team_policy: TeamCreditPolicy,
    rounds: Vec<RoundDefinition>,
    uploads: Vec<(Option<String>, Table)>,
    skins: Vec<SkinsEntry>,
}

impl TournamentBuilder {
    pub fn new() -> Self {
        Self {
            weights: vec![],
            team_policy: TeamCreditPolicy::Label,
            rounds: vec![],
            uploads: vec![],
            skins: vec![],
        }
    }

    pub fn with_weight(mut self, kind: WinnerKind, weight: f64) -> Self {
        self.weights.push((kind, weight));
        self
    }

    /// challenger 1.0, hunter 1.5, team 1.0
    pub fn with_standard_weights(self) -> Self {
        self.with_weight(WinnerKind::Challenger, 1.0)
            .with_weight(WinnerKind::Hunter, 1.5)
            .with_weight(WinnerKind::Team, 1.0)
    }

    pub fn with_team_policy(mut self, team_policy: TeamCreditPolicy) -> Self {
        self.team_policy = team_policy;
        self
    }

    pub fn with_round(mut self, definition: RoundDefinition) -> Self {
        self.rounds.push(definition);
        self
    }

    /// Minimal `Player, Total` upload for one round
    pub fn with_totals(mut self, round_id: &str, totals: &[(&str, u32)]) -> Self {
        let table = totals.iter().fold(Table::new(["Player", "Total"]), |table, (player, total)| {
            table.with_row([player.to_string(), total.to_string()])
        });
        self.uploads.push((Some(round_id.to_string()), table));
        self
    }

    pub fn with_upload(mut self, round_id: Option<&str>, table: Table) -> Self {
        self.uploads.push((round_id.map(str::to_string), table));
        self
    }

    pub fn with_skins(mut self, round_id: &str, hole: u8, winner: &str) -> Self {
        self.skins.push(skins(round_id, hole, winner));
        self
    }

    pub fn build(self) -> (TournamentService, InMemoryRecordStore) {
        let service = self
            .weights
            .into_iter()
            .fold(TournamentService::builder(), |builder, (kind, weight)| {
                builder.with_weight(kind, weight)
            })
            .with_team_policy(self.team_policy)
            .build()
            .expect("test weights should be valid");

        let mut store = InMemoryRecordStore::new();

        for definition in self.rounds {
            service
                .define_round(&mut store, definition)
                .expect("test round should be valid");
        }
        for (round_id, table) in &self.uploads {
            service
                .upload_strokes(&mut store, table, round_id.as_deref())
                .expect("test upload should match a schema");
        }
        for entry in self.skins {
            service
                .record_skins(&mut store, entry)
                .expect("test hole result should be valid");
        }

        (service, store)
    }
}
