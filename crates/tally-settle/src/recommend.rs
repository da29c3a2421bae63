use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One historic settlement similar to the queried one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarTransaction {
    pub place: String,
    pub datetime: String,
    pub amount: i64,
    pub participants: Vec<String>,
    pub similarity: f64,
    pub distance: f64,
}

/// Participant suggestion for a settlement. Field names form the
/// interchange contract with whatever engine produced the data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub recommended_participants: Vec<String>,
    pub confidence_scores: BTreeMap<String, f64>,
    pub similar_transactions: Vec<SimilarTransaction>,
    pub explanation: String,
}

/// Participant recommendation lookup. Injected at the call sites
/// so a real engine can replace the table stub without touching
/// settlement logic.
pub trait Recommender {
    fn recommend(&self, place: &str, hour: u32, amount: i64) -> Option<Recommendation>;
}

/// Table backed recommender over precomputed results keyed by
/// `"{place}_{hour}_{amount}"`.
#[derive(Debug, Default, Clone)]
pub struct TableRecommender {
    table: BTreeMap<String, Recommendation>,
}

impl TableRecommender {
    pub fn new(table: BTreeMap<String, Recommendation>) -> Self {
        TableRecommender { table }
    }

    /// Load precomputed recommendations from a JSON file.
    /// A malformed file is an error here, never during lookup.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading recommendations from {}", path.display()))?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self> {
        let table: BTreeMap<String, Recommendation> =
            serde_json::from_str(data).context("decoding recommendation table")?;
        Ok(TableRecommender { table })
    }

    fn key(place: &str, hour: u32, amount: i64) -> String {
        format!("{}_{}_{}", place, hour, amount)
    }
}

impl Recommender for TableRecommender {
    /// Lookup order: exact key, then the first entry whose place
    /// component matches the query place as a substring in either
    /// direction, then the first entry as a fallback. An empty
    /// table recommends nothing.
    fn recommend(&self, place: &str, hour: u32, amount: i64) -> Option<Recommendation> {
        let key = Self::key(place, hour, amount);
        if let Some(exact) = self.table.get(&key) {
            return Some(exact.clone());
        }

        let similar = self.table.iter().find(|(key, _)| {
            let key_place = key.split('_').next().unwrap_or(key);
            place.contains(key_place) || key_place.contains(place)
        });
        if let Some((_, recommendation)) = similar {
            return Some(recommendation.clone());
        }

        self.table.values().next().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recommendation(names: &[&str]) -> Recommendation {
        Recommendation {
            recommended_participants: names.iter().map(|n| n.to_string()).collect(),
            confidence_scores: names
                .iter()
                .map(|n| (n.to_string(), 0.9))
                .collect(),
            similar_transactions: vec![],
            explanation: "seen together before".to_string(),
        }
    }

    fn table() -> TableRecommender {
        let mut table = BTreeMap::new();
        table.insert(
            "Galbi House_19_48000".to_string(),
            recommendation(&["Bo", "Cy"]),
        );
        table.insert(
            "Standing Coffee_9_4500".to_string(),
            recommendation(&["Dee"]),
        );
        TableRecommender::new(table)
    }

    #[test]
    fn test_exact_match() {
        let hit = table().recommend("Galbi House", 19, 48000).unwrap();
        assert_eq!(hit.recommended_participants, vec!["Bo", "Cy"]);
    }

    #[test]
    fn test_similar_place_match() {
        // Different hour and amount, place matches by substring.
        let hit = table().recommend("Standing Coffee Gangnam", 14, 9000).unwrap();
        assert_eq!(hit.recommended_participants, vec!["Dee"]);
    }

    #[test]
    fn test_default_fallback() {
        let hit = table().recommend("Noodle Bar", 12, 11000).unwrap();
        // First table entry wins when nothing is similar.
        assert_eq!(hit.recommended_participants, vec!["Bo", "Cy"]);
    }

    #[test]
    fn test_empty_table() {
        let empty = TableRecommender::default();
        assert!(empty.recommend("Galbi House", 19, 48000).is_none());
    }

    #[test]
    fn test_from_json() {
        let data = r#"{
            "Galbi House_19_48000": {
                "recommended_participants": ["Bo"],
                "confidence_scores": {"Bo": 0.81},
                "similar_transactions": [{
                    "place": "Galbi House",
                    "datetime": "2025-07-12 19:24",
                    "amount": 48000,
                    "participants": ["Ann", "Bo"],
                    "similarity": 0.93,
                    "distance": 0.3
                }],
                "explanation": "same place, same evening hour"
            }
        }"#;
        let recommender = TableRecommender::from_json(data).unwrap();
        let hit = recommender.recommend("Galbi House", 19, 48000).unwrap();
        assert_eq!(hit.similar_transactions.len(), 1);
        assert_eq!(hit.similar_transactions[0].amount, 48000);

        assert!(TableRecommender::from_json("not json").is_err());
    }
}
