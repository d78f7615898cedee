//! Relevance-threshold keyword selection.

use seoscope_core::types::ScoredItem;

/// Keys of all items scoring at or above `threshold`, in input order.
///
/// Input order is assumed score-descending (established when the NLU
/// response is mapped). No bounds check on the threshold: a value above 1.0
/// yields an empty set, a negative one yields every key; both are valid.
pub fn recommend(items: &[ScoredItem], threshold: f64) -> Vec<String> {
    items
        .iter()
        .filter(|item| item.score >= threshold)
        .map(|item| item.key.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<ScoredItem> {
        vec![
            ScoredItem::new("rust", 0.9),
            ScoredItem::new("tokio", 0.5),
            ScoredItem::new("axum", 0.2),
            ScoredItem::new("serde", 0.05),
        ]
    }

    #[test]
    fn filters_below_threshold() {
        assert_eq!(recommend(&items(), 0.2), vec!["rust", "tokio", "axum"]);
    }

    #[test]
    fn threshold_is_inclusive() {
        assert!(recommend(&items(), 0.2).contains(&"axum".to_string()));
        assert!(!recommend(&items(), 0.21).contains(&"axum".to_string()));
    }

    #[test]
    fn preserves_input_order() {
        assert_eq!(recommend(&items(), 0.0), vec!["rust", "tokio", "axum", "serde"]);
    }

    #[test]
    fn empty_input_yields_empty_set() {
        assert!(recommend(&[], 0.2).is_empty());
    }

    #[test]
    fn out_of_range_thresholds_are_valid() {
        assert!(recommend(&items(), 1.5).is_empty());
        assert_eq!(recommend(&items(), -1.0).len(), 4);
    }

    #[test]
    fn threshold_monotonicity() {
        // For t1 <= t2, select(S, t2) is a subset of select(S, t1).
        let s = items();
        let thresholds = [0.0, 0.05, 0.2, 0.5, 0.9, 1.0];
        for (i, &t1) in thresholds.iter().enumerate() {
            for &t2 in &thresholds[i..] {
                let lower = recommend(&s, t1);
                for key in recommend(&s, t2) {
                    assert!(lower.contains(&key), "{key} selected at {t2} but not {t1}");
                }
            }
        }
    }
}
