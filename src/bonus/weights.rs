use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::{Display, EnumIter, EnumString};

use super::errors::ConfigurationError;
use crate::store::{Role, WinnerDesignation};

/// Weight slots of the bonus table, one per resolved winner type
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
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WinnerKind {
    Challenger,
    Hunter,
    #[strum(to_string = "team", serialize = "lag")]
    Team,
    Player,
}

impl From<&WinnerDesignation> for WinnerKind {
    fn from(designation: &WinnerDesignation) -> Self {
        match designation {
            WinnerDesignation::Role(Role::Challenger) => WinnerKind::Challenger,
            WinnerDesignation::Role(Role::Hunter) => WinnerKind::Hunter,
            WinnerDesignation::Team(_) => WinnerKind::Team,
            WinnerDesignation::Player(_) => WinnerKind::Player,
        }
    }
}

/// Credit earned per hole won, by winner type.
///
/// There is no built-in default: the host supplies every weight it wants to
/// award. Slots left unset award nothing. Weights are never negative; the
/// leaderboard subtracts credit from strokes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct WeightTable {
    weights: BTreeMap<WinnerKind, f64>,
}

impl WeightTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weight(mut self, kind: WinnerKind, weight: f64) -> Result<Self, ConfigurationError> {
        if self.weights.contains_key(&kind) {
            return Err(ConfigurationError::DuplicateWeight { kind });
        }
        self.weights.insert(kind, validate_weight(kind, weight)?);
        Ok(self)
    }

    /// Builds a table from named slots such as `("hunter", 1.5)`
    pub fn from_entries<I, K>(entries: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        entries.into_iter().try_fold(Self::new(), |table, (name, weight)| {
            let name = name.as_ref().trim();
            let kind = name
                .parse::<WinnerKind>()
                .map_err(|_| ConfigurationError::UnknownWinnerType(name.to_string()))?;
            table.with_weight(kind, weight)
        })
    }

    /// Weight for `kind`, zero when the slot is unset
    pub fn weight(&self, kind: WinnerKind) -> f64 {
        self.weights.get(&kind).copied().unwrap_or_default()
    }

    pub fn is_set(&self, kind: WinnerKind) -> bool {
        self.weights.contains_key(&kind)
    }
}

fn validate_weight(kind: WinnerKind, weight: f64) -> Result<f64, ConfigurationError> {
    if !weight.is_finite() {
        return Err(ConfigurationError::NonFiniteWeight { kind });
    }
    if weight < 0.0 {
        return Err(ConfigurationError::NegativeWeight { kind, weight });
    }
    Ok(weight)
}

impl TryFrom<BTreeMap<String, f64>> for WeightTable {
    type Error = ConfigurationError;

    fn try_from(entries: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl From<WeightTable> for BTreeMap<String, f64> {
    fn from(table: WeightTable) -> Self {
        table
            .weights
            .into_iter()
            .map(|(kind, weight)| (kind.to_string(), weight))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn builds_table_from_named_slots() {
        let table =
            WeightTable::from_entries([("challenger", 1.0), ("Hunter", 1.5), ("lag", 1.0)]).unwrap();

        assert_eq!(table.weight(WinnerKind::Challenger), 1.0);
        assert_eq!(table.weight(WinnerKind::Hunter), 1.5);
        assert_eq!(table.weight(WinnerKind::Team), 1.0);
        assert!(!table.is_set(WinnerKind::Player));
        assert_eq!(table.weight(WinnerKind::Player), 0.0);
    }

    #[rstest]
    #[case(vec![("hunter", -1.5)])]
    #[case(vec![("birdie", 1.0)])]
    #[case(vec![("team", f64::NAN)])]
    #[case(vec![("team", 1.0), ("lag", 0.5)])]
    fn rejects_invalid_tables(#[case] entries: Vec<(&str, f64)>) {
        assert!(WeightTable::from_entries(entries).is_err());
    }

    #[test]
    fn reports_the_offending_slot() {
        let err = WeightTable::from_entries([("hunter", -1.5)]).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::NegativeWeight {
                kind: WinnerKind::Hunter,
                weight: -1.5
            }
        );

        let err = WeightTable::from_entries([("birdie", 1.0)]).unwrap_err();
        assert_eq!(err, ConfigurationError::UnknownWinnerType("birdie".into()));
    }

    #[test]
    fn deserializes_with_validation() {
        let table: WeightTable =
            serde_json::from_str(r#"{"challenger": 1.0, "hunter": 1.5}"#).unwrap();
        assert_eq!(table.weight(WinnerKind::Hunter), 1.5);

        let result: Result<WeightTable, _> = serde_json::from_str(r#"{"hunter": -1.5}"#);
        assert!(result.is_err());

        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json, serde_json::json!({"challenger": 1.0, "hunter": 1.5}));
    }
}
