use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::collections::HashMap;

/// Accumulated credit per entity (player or team label), in first-credited
/// order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreditLedger {
    order: Vec<String>,
    totals: HashMap<String, f64>,
}

impl CreditLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn credit(&mut self, entity: &str, amount: f64) {
        match self.totals.get_mut(entity) {
            Some(total) => *total += amount,
            None => {
                self.order.push(entity.to_string());
                self.totals.insert(entity.to_string(), amount);
            }
        }
    }

    /// Credit for `entity`, zero when it never earned any
    pub fn get(&self, entity: &str) -> f64 {
        self.totals.get(entity).copied().unwrap_or_default()
    }

    pub fn contains(&self, entity: &str) -> bool {
        self.totals.contains_key(entity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.order
            .iter()
            .map(|entity| (entity.as_str(), self.get(entity)))
    }

    pub fn total(&self) -> f64 {
        self.totals.values().sum()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn merge(&mut self, other: &CreditLedger) {
        for (entity, amount) in other.iter() {
            self.credit(entity, amount);
        }
    }
}

#[derive(serde::Serialize)]
struct CreditEntry<'a> {
    entity: &'a str,
    credit: f64,
}

impl Serialize for CreditLedger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for (entity, credit) in self.iter() {
            seq.serialize_element(&CreditEntry { entity, credit })?;
        }
        seq.end()
    }
}
