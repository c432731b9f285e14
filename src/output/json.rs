//! JSON serialization of trait results.

use crate::result::TraitResult;

/// Serialize a trait result to compact JSON.
pub fn to_json(result: &TraitResult) -> Result<String, serde_json::Error> {
    serde_json::to_string(result)
}

/// Serialize a trait result to pretty-printed JSON.
pub fn to_json_pretty(result: &TraitResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{CoarseLabel, FineLabel};
    use crate::result::SummaryRow;

    fn sample_result() -> TraitResult {
        TraitResult {
            key: "Diet".to_string(),
            credible_level: 0.95,
            summary: vec![SummaryRow {
                level_a: "Mono".to_string(),
                level_b: None,
                median: -0.31,
                lower: -0.42,
                upper: -0.21,
                fine: FineLabel::StrongDecrease,
                coarse: CoarseLabel::Decrease,
                certain: true,
                n_species: 28,
            }],
            draws: vec![],
        }
    }

    #[test]
    fn test_json_round_trips_fields() {
        let json = to_json(&sample_result()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["key"], "Diet");
        assert_eq!(value["credible_level"], 0.95);
        assert_eq!(value["summary"][0]["level_a"], "Mono");
        assert_eq!(value["summary"][0]["fine"], "StrongDecrease");
        assert_eq!(value["summary"][0]["n_species"], 28);
    }

    #[test]
    fn test_pretty_json_is_multiline() {
        let json = to_json_pretty(&sample_result()).unwrap();
        assert!(json.lines().count() > 1);
    }
}
