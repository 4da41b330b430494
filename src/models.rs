//! Persisted records and their JSON representations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// A question before it has been assigned an id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// Category id -> type, the shape the front-end reads categories in.
pub type CategoryMap = BTreeMap<i64, String>;

/// Later entries win when ids repeat.
pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_type_field() {
        let c = Category {
            id: 1,
            kind: "Science".into(),
        };
        assert_eq!(
            serde_json::to_value(&c).unwrap(),
            serde_json::json!({"id": 1, "type": "Science"})
        );
    }

    #[test]
    fn category_map_keys_are_strings_and_last_wins() {
        let map = category_map(vec![
            Category { id: 2, kind: "Art".into() },
            Category { id: 1, kind: "Science".into() },
            Category { id: 2, kind: "Arts".into() },
        ]);
        assert_eq!(map.len(), 2);
        assert_eq!(
            serde_json::to_value(&map).unwrap(),
            serde_json::json!({"1": "Science", "2": "Arts"})
        );
    }
}
