use serde::{Deserialize, Serialize};

/// Category — a named grouping that products belong to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Storage-generated identifier.
    pub id: i64,

    /// Display name, required, at most 100 characters.
    pub name: String,

    pub created_at: String,
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_json_roundtrip() {
        let c = Category {
            id: 1,
            name: "Electronics".into(),
            created_at: "2026-01-01T00:00:00+00:00".into(),
            updated_at: "2026-01-01T00:00:00+00:00".into(),
        };
        let json = serde_json::to_string(&c).unwrap();
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
