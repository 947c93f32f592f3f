use serde::{Deserialize, Serialize};

/// A regulation passage whose embedding fell within the configured distance
/// threshold of the input text.
///
/// `distance` is the index's native metric (cosine distance, `[0, 2]`).
/// Lists of violations are ordered ascending by distance, best match first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViolationRecord {
    pub article: Option<String>,
    pub recital: Option<String>,
    pub category: Option<String>,
    pub distance: f64,
    pub source_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_json() {
        let v = ViolationRecord {
            article: Some("Art. 9".to_string()),
            recital: None,
            category: Some("health".to_string()),
            distance: 0.27,
            source_text: "processing of data concerning health".to_string(),
        };
        let json = serde_json::to_string(&v).unwrap();
        let back: ViolationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
