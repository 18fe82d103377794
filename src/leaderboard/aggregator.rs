use std::collections::HashMap;
use tracing::debug;

use super::models::LeaderboardRow;
use crate::bonus::CreditLedger;
use crate::store::StrokeRecord;

/// Adjusted scores are compared at this resolution so that float noise from
/// fractional weights does not break ties
const SCORE_SCALE: f64 = 1_000_000.0;

fn score_key(score: f64) -> i64 {
    (score * SCORE_SCALE).round() as i64
}

#[derive(Default)]
struct Tally {
    total_strokes: u32,
    rounds_played: usize,
}

/// Ranks everyone with strokes or credit by adjusted score, lowest first.
///
/// Ties keep `players` order; entities missing from `players` (team labels,
/// unregistered winners) follow in the order they were first seen.
pub fn aggregate(
    players: &[String],
    strokes: &[StrokeRecord],
    credits: &CreditLedger,
) -> Vec<LeaderboardRow> {
    let mut tallies: HashMap<&str, Tally> = HashMap::new();
    for record in strokes {
        let tally = tallies.entry(record.player.as_str()).or_default();
        tally.total_strokes = tally.total_strokes.saturating_add(record.total_strokes);
        tally.rounds_played += 1;
    }

    let mut order: Vec<&str> = Vec::new();
    let candidates = players
        .iter()
        .map(String::as_str)
        .chain(strokes.iter().map(|record| record.player.as_str()))
        .chain(credits.iter().map(|(entity, _)| entity));

    for name in candidates {
        let present = tallies.contains_key(name) || credits.contains(name);
        if present && !order.contains(&name) {
            order.push(name);
        }
    }

    let mut rows: Vec<LeaderboardRow> = order
        .into_iter()
        .map(|name| {
            let (total_strokes, rounds_played) = tallies
                .get(name)
                .map(|t| (t.total_strokes, t.rounds_played))
                .unwrap_or_default();
            let bonus = credits.get(name);

            LeaderboardRow {
                position: 0,
                player: name.to_string(),
                total_strokes,
                rounds_played,
                bonus,
                adjusted_score: f64::from(total_strokes) - bonus,
            }
        })
        .collect();

    // stable: equal scores keep first-seen order
    rows.sort_by_key(|row| score_key(row.adjusted_score));

    let mut previous: Option<(i64, usize)> = None;
    for (index, row) in rows.iter_mut().enumerate() {
        let key = score_key(row.adjusted_score);
        row.position = match previous {
            Some((prev_key, prev_position)) if prev_key == key => prev_position,
            _ => index + 1,
        };
        previous = Some((key, row.position));
    }

    debug!(rows = rows.len(), "Aggregated leaderboard");
    rows
}
