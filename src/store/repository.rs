use serde::{Deserialize, Serialize};
use tracing::debug;

use super::models::{normalize_player_name, Round, SkinsResult, StrokeRecord};

/// Storage for the four tournament tables.
///
/// Implementations hold no locks; callers serialize writers per tournament.
pub trait RecordStore {
    /// Players in the order they were first seen
    fn players(&self) -> &[String];

    /// Registers a player. Returns `true` when the name was not known yet.
    fn add_player(&mut self, name: &str) -> bool;

    fn rounds(&self) -> &[Round];

    fn round(&self, round_id: &str) -> Option<&Round> {
        self.rounds().iter().find(|round| round.id == round_id)
    }

    /// Inserts a round or replaces the one with the same identifier
    fn upsert_round(&mut self, round: Round);

    fn strokes(&self) -> &[StrokeRecord];

    /// Deletes any record for the same (round, player) and appends `record`
    fn upsert_stroke(&mut self, record: StrokeRecord);

    fn skins(&self) -> &[SkinsResult];

    /// Deletes any result for the same (round, hole) and appends `result`
    fn upsert_skins(&mut self, result: SkinsResult);
}

/// The four logical tables in the shape an external persistence adapter
/// stores and loads
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TournamentSnapshot {
    #[serde(default)]
    pub players: Vec<String>,
    #[serde(default)]
    pub rounds: Vec<Round>,
    #[serde(default)]
    pub strokes: Vec<StrokeRecord>,
    #[serde(default)]
    pub skins: Vec<SkinsResult>,
}

/// In-memory implementation of RecordStore
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    players: Vec<String>,
    rounds: Vec<Round>,
    strokes: Vec<StrokeRecord>,
    skins: Vec<SkinsResult>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a snapshot by replaying it through the upsert rules, so
    /// duplicate keys in the input collapse to their last occurrence.
    /// Players named only by rounds or strokes are registered after the
    /// listed ones, in the order they appear.
    pub fn from_snapshot(snapshot: TournamentSnapshot) -> Self {
        let mut store = Self::new();

        for player in &snapshot.players {
            store.add_player(player);
        }
        for round in snapshot.rounds {
            for player in round.named_players() {
                store.add_player(player);
            }
            store.upsert_round(round);
        }
        for record in snapshot.strokes {
            store.add_player(&record.player);
            store.upsert_stroke(record);
        }
        for result in snapshot.skins {
            store.upsert_skins(result);
        }

        debug!(
            players = store.players.len(),
            rounds = store.rounds.len(),
            strokes = store.strokes.len(),
            skins = store.skins.len(),
            "Loaded record store from snapshot"
        );

        store
    }

    pub fn snapshot(&self) -> TournamentSnapshot {
        TournamentSnapshot {
            players: self.players.clone(),
            rounds: self.rounds.clone(),
            strokes: self.strokes.clone(),
            skins: self.skins.clone(),
        }
    }
}

impl RecordStore for InMemoryRecordStore {
    fn players(&self) -> &[String] {
        &self.players
    }

    fn add_player(&mut self, name: &str) -> bool {
        let Some(name) = normalize_player_name(name) else {
            return false;
        };
        if self.players.contains(&name) {
            return false;
        }

        debug!(player = %name, "Registering new player");
        self.players.push(name);
        true
    }

    fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    fn upsert_round(&mut self, round: Round) {
        match self.rounds.iter_mut().find(|r| r.id == round.id) {
            Some(existing) => {
                debug!(round_id = %round.id, "Replacing round definition");
                *existing = round;
            }
            None => {
                debug!(round_id = %round.id, "Adding round definition");
                self.rounds.push(round);
            }
        }
    }

    fn strokes(&self) -> &[StrokeRecord] {
        &self.strokes
    }

    fn upsert_stroke(&mut self, record: StrokeRecord) {
        self.strokes.retain(|existing| !existing.same_key(&record));
        self.strokes.push(record);
    }

    fn skins(&self) -> &[SkinsResult] {
        &self.skins
    }

    fn upsert_skins(&mut self, result: SkinsResult) {
        self.skins.retain(|existing| !existing.same_key(&result));
        self.skins.push(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{RoundDefinition, WinnerDesignation};

    fn round(id: &str, course: &str) -> Round {
        Round::from_definition(RoundDefinition {
            round_id: Some(id.to_string()),
            day: "1".to_string(),
            round_number: 1,
            course: course.to_string(),
            ..RoundDefinition::default()
        })
        .unwrap()
    }

    #[test]
    fn players_are_unique_trimmed_and_ordered() {
        let mut store = InMemoryRecordStore::new();

        assert!(store.add_player("Alice"));
        assert!(store.add_player(" Bob "));
        assert!(!store.add_player("Alice "));
        assert!(!store.add_player("   "));

        assert_eq!(store.players(), ["Alice".to_string(), "Bob".to_string()]);
    }

    #[test]
    fn stroke_upsert_replaces_same_round_and_player() {
        let mut store = InMemoryRecordStore::new();
        store.upsert_stroke(StrokeRecord::new(Some("R1"), "Alice", 70));
        store.upsert_stroke(StrokeRecord::new(Some("R2"), "Alice", 66));
        store.upsert_stroke(StrokeRecord::new(Some("R1"), "Alice", 68));

        assert_eq!(store.strokes().len(), 2);
        assert_eq!(
            store.strokes().last(),
            Some(&StrokeRecord::new(Some("R1"), "Alice", 68))
        );
    }

    #[test]
    fn implicit_round_records_are_keyed_separately() {
        let mut store = InMemoryRecordStore::new();
        store.upsert_stroke(StrokeRecord::new(None, "Alice", 54));
        store.upsert_stroke(StrokeRecord::new(Some("R1"), "Alice", 60));
        store.upsert_stroke(StrokeRecord::new(None, "Alice", 52));

        assert_eq!(store.strokes().len(), 2);
        assert!(store
            .strokes()
            .contains(&StrokeRecord::new(None, "Alice", 52)));
    }

    #[test]
    fn skins_upsert_keeps_latest_winner_last() {
        let mut store = InMemoryRecordStore::new();
        store.upsert_skins(SkinsResult::new(
            "R1",
            1,
            WinnerDesignation::Player("Alice".into()),
        ));
        store.upsert_skins(SkinsResult::new(
            "R1",
            2,
            WinnerDesignation::Player("Bob".into()),
        ));
        store.upsert_skins(SkinsResult::new(
            "R1",
            1,
            WinnerDesignation::Player("Carol".into()),
        ));

        assert_eq!(store.skins().len(), 2);
        assert_eq!(store.skins()[1].hole, 1);
        assert_eq!(
            store.skins()[1].winner,
            WinnerDesignation::Player("Carol".into())
        );
    }

    #[test]
    fn round_redefinition_replaces_in_place() {
        let mut store = InMemoryRecordStore::new();
        store.upsert_round(round("D1R1", "Maple Hill"));
        store.upsert_round(round("D1R2", "Highbridge"));
        store.upsert_round(round("D1R1", "Blue Ribbon Pines"));

        assert_eq!(store.rounds().len(), 2);
        assert_eq!(store.rounds()[0].course, "Blue Ribbon Pines");
        assert_eq!(
            store.round("D1R2").map(|r| r.course.as_str()),
            Some("Highbridge")
        );
        assert!(store.round("D9R9").is_none());
    }

    #[test]
    fn snapshot_import_collapses_duplicate_keys() {
        let snapshot = TournamentSnapshot {
            players: vec!["Alice".into(), "Alice".into(), "Bob".into()],
            rounds: vec![round("D1R1", "Maple Hill")],
            strokes: vec![
                StrokeRecord::new(Some("D1R1"), "Alice", 70),
                StrokeRecord::new(Some("D1R1"), "Alice", 71),
            ],
            skins: vec![],
        };

        let store = InMemoryRecordStore::from_snapshot(snapshot);
        let exported = store.snapshot();

        assert_eq!(exported.players, vec!["Alice".to_string(), "Bob".to_string()]);
        assert_eq!(
            exported.strokes,
            vec![StrokeRecord::new(Some("D1R1"), "Alice", 71)]
        );
        assert_eq!(exported.rounds.len(), 1);
    }

    #[test]
    fn snapshot_import_registers_unlisted_players() {
        let r1 = Round::from_definition(RoundDefinition {
            round_id: Some("D1R1".to_string()),
            day: "1".to_string(),
            round_number: 1,
            course: "Maple Hill".to_string(),
            challenger: Some("Dana".to_string()),
            ..RoundDefinition::default()
        })
        .unwrap();
        let snapshot = TournamentSnapshot {
            players: vec!["Alice".into()],
            rounds: vec![r1],
            strokes: vec![
                StrokeRecord::new(Some("D1R1"), "Carol", 60),
                StrokeRecord::new(Some("D1R1"), "Alice", 60),
            ],
            skins: vec![],
        };

        let store = InMemoryRecordStore::from_snapshot(snapshot);

        assert_eq!(
            store.players(),
            ["Alice".to_string(), "Dana".to_string(), "Carol".to_string()]
        );
    }
}
