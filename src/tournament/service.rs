use tracing::{info, instrument};

use crate::{
    bonus::{
        BonusRulesEngine, BonusSummary, ConfigurationError, TeamCreditPolicy, WeightTable,
        WinnerKind,
    },
    ingest::{ingest_strokes, IngestReport, SchemaError, Table},
    leaderboard::{aggregate, Leaderboard},
    store::{
        RecordError, RecordStore, Round, RoundDefinition, SkinsEntry, SkinsResult,
        WinnerDesignation,
    },
};

/// Runs the scoring operations of one tournament against a caller-owned
/// record store
#[derive(Debug, Clone, PartialEq)]
pub struct TournamentService {
    engine: BonusRulesEngine,
}

impl TournamentService {
    pub fn builder() -> TournamentServiceBuilder {
        TournamentServiceBuilder::new()
    }

    pub fn weights(&self) -> &WeightTable {
        self.engine.weights()
    }

    pub fn team_policy(&self) -> TeamCreditPolicy {
        self.engine.team_policy()
    }

    /// Imports a stroke export. `round_id` overrides the derived round.
    pub fn upload_strokes<S: RecordStore>(
        &self,
        store: &mut S,
        table: &Table,
        round_id: Option<&str>,
    ) -> Result<IngestReport, SchemaError> {
        ingest_strokes(store, table, round_id)
    }

    /// Saves a round, replacing any earlier definition with the same id, and
    /// registers every player it names
    #[instrument(skip(self, store, definition))]
    pub fn define_round<S: RecordStore>(
        &self,
        store: &mut S,
        definition: RoundDefinition,
    ) -> Result<Round, RecordError> {
        let round = Round::from_definition(definition)?;

        for player in round.named_players() {
            store.add_player(player);
        }
        store.upsert_round(round.clone());

        info!(round_id = %round.id, course = %round.course, "Round saved");
        Ok(round)
    }

    /// Records who won a hole, replacing an earlier result for the same hole
    #[instrument(skip(self, store, entry), fields(round_id = %entry.round_id, hole = entry.hole))]
    pub fn record_skins<S: RecordStore>(
        &self,
        store: &mut S,
        entry: SkinsEntry,
    ) -> Result<SkinsResult, RecordError> {
        let round = store
            .round(&entry.round_id)
            .ok_or_else(|| RecordError::UnknownRound(entry.round_id.clone()))?;

        if !round.contains_hole(entry.hole) {
            return Err(RecordError::HoleOutOfRange {
                round_id: entry.round_id,
                hole: entry.hole,
                holes: round.holes,
            });
        }

        let winner = WinnerDesignation::parse(&entry.winner).ok_or(RecordError::BlankWinner)?;
        let result = SkinsResult::new(&entry.round_id, entry.hole, winner);
        store.upsert_skins(result.clone());

        info!(winner = %result.winner, "Hole result recorded");
        Ok(result)
    }

    pub fn bonus_credits<S: RecordStore>(&self, store: &S) -> BonusSummary {
        self.engine
            .tournament_credits(store.rounds(), store.skins())
    }

    /// Recomputes credits and the ranked table from the store's current state
    #[instrument(skip(self, store))]
    pub fn leaderboard<S: RecordStore>(&self, store: &S) -> Leaderboard {
        let BonusSummary { credits, issues } = self.bonus_credits(store);
        let rows = aggregate(store.players(), store.strokes(), &credits);

        Leaderboard { rows, issues }
    }
}

/// Collects scoring configuration; weight problems surface from `build`
pub struct TournamentServiceBuilder {
    weights: Result<WeightTable, ConfigurationError>,
    team_policy: TeamCreditPolicy,
}

impl TournamentServiceBuilder {
    fn new() -> Self {
        Self {
            weights: Ok(WeightTable::new()),
            team_policy: TeamCreditPolicy::default(),
        }
    }

    pub fn with_weights(mut self, weights: WeightTable) -> Self {
        self.weights = Ok(weights);
        self
    }

    pub fn with_weight(mut self, kind: WinnerKind, weight: f64) -> Self {
        self.weights = self.weights.and_then(|table| table.with_weight(kind, weight));
        self
    }

    pub fn with_team_policy(mut self, team_policy: TeamCreditPolicy) -> Self {
        self.team_policy = team_policy;
        self
    }

    pub fn build(self) -> Result<TournamentService, ConfigurationError> {
        Ok(TournamentService {
            engine: BonusRulesEngine::new(self.weights?, self.team_policy),
        })
    }
}
