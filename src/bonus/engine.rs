use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use super::{
    errors::{UnresolvedReason, UnresolvedRoleError},
    ledger::CreditLedger,
    weights::{WeightTable, WinnerKind},
};
use crate::store::{Round, SkinsResult, WinnerDesignation};

/// Who receives the credit for a hole won by a team or lag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamCreditPolicy {
    /// The label itself ("Lag A") is credited as a pseudo-player
    #[default]
    Label,
    /// The weight is divided equally among the round's roster for that side.
    /// Falls back to the label when the roster is empty.
    SplitAmongMembers,
}

/// Credits plus the role references that could not be resolved
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BonusSummary {
    pub credits: CreditLedger,
    pub issues: Vec<UnresolvedRoleError>,
}

impl BonusSummary {
    fn absorb(&mut self, other: BonusSummary) {
        self.credits.merge(&other.credits);
        self.issues.extend(other.issues);
    }
}

/// Turns hole results into bonus credit using a weight table
#[derive(Debug, Clone, PartialEq)]
pub struct BonusRulesEngine {
    weights: WeightTable,
    team_policy: TeamCreditPolicy,
}

impl BonusRulesEngine {
    pub fn new(weights: WeightTable, team_policy: TeamCreditPolicy) -> Self {
        Self {
            weights,
            team_policy,
        }
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    pub fn team_policy(&self) -> TeamCreditPolicy {
        self.team_policy
    }

    /// Credit earned in a single round.
    ///
    /// Only results for `round_id` are considered. When a hole appears more
    /// than once the last result wins. Holes outside a defined round's range
    /// earn nothing. `round` is `None` when the round was never defined;
    /// role winners then cannot be resolved.
    pub fn round_credits(
        &self,
        round_id: &str,
        round: Option<&Round>,
        results: &[SkinsResult],
    ) -> BonusSummary {
        let mut by_hole: BTreeMap<u8, &SkinsResult> = BTreeMap::new();
        for result in results.iter().filter(|r| r.round_id == round_id) {
            by_hole.insert(result.hole, result);
        }

        let mut summary = BonusSummary::default();

        for (hole, result) in by_hole {
            if let Some(round) = round.filter(|r| !r.contains_hole(hole)) {
                warn!(
                    round_id,
                    hole,
                    holes = round.holes,
                    "Ignoring hole result outside the round"
                );
                continue;
            }

            let kind = WinnerKind::from(&result.winner);
            if !self.weights.is_set(kind) {
                debug!(round_id, hole, %kind, "No weight set for winner type, hole earns no credit");
            }
            let weight = self.weights.weight(kind);

            match &result.winner {
                WinnerDesignation::Role(role) => {
                    match round.and_then(|r| r.role_holder(*role)) {
                        Some(player) => summary.credits.credit(player, weight),
                        None => {
                            let reason = if round.is_some() {
                                UnresolvedReason::RoleUnset
                            } else {
                                UnresolvedReason::RoundMissing
                            };
                            warn!(round_id, hole, %role, ?reason, "Unresolved role in hole result");
                            summary.issues.push(UnresolvedRoleError {
                                round_id: round_id.to_string(),
                                hole,
                                role: *role,
                                reason,
                            });
                        }
                    }
                }
                WinnerDesignation::Team(label) => {
                    let members = round
                        .map(|r| r.team_members(label.side))
                        .unwrap_or_default();

                    match self.team_policy {
                        TeamCreditPolicy::SplitAmongMembers if !members.is_empty() => {
                            let share = weight / members.len() as f64;
                            for member in members {
                                summary.credits.credit(member, share);
                            }
                        }
                        _ => summary.credits.credit(&label.to_string(), weight),
                    }
                }
                WinnerDesignation::Player(player) => summary.credits.credit(player, weight),
            }
        }

        summary
    }

    /// Credit across every round, defined rounds first in store order, then
    /// any round only referenced by hole results
    pub fn tournament_credits(&self, rounds: &[Round], results: &[SkinsResult]) -> BonusSummary {
        let mut round_ids: Vec<&str> = rounds.iter().map(|r| r.id.as_str()).collect();
        for result in results {
            if !round_ids.contains(&result.round_id.as_str()) {
                round_ids.push(result.round_id.as_str());
            }
        }

        let mut summary = BonusSummary::default();
        for round_id in round_ids {
            let round = rounds.iter().find(|r| r.id == round_id);
            summary.absorb(self.round_credits(round_id, round, results));
        }

        debug!(
            entities = summary.credits.len(),
            total_credit = summary.credits.total(),
            issues = summary.issues.len(),
            "Computed tournament bonus credits"
        );

        summary
    }
}
