use std::collections::HashMap;

use crate::core::tables::{GOAL_LABELS, OCCASION_LABELS};

/// Normalize survey occasion labels to canonical tokens
///
/// Labels found in the table map to their token; anything else passes
/// through lowercased so the caller still sees it echoed in the output.
/// Order is preserved and duplicates are kept.
pub fn normalize_occasions(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|label| normalize_label(label, &OCCASION_LABELS))
        .collect()
}

/// Normalize survey goal labels to canonical tokens
pub fn normalize_goals(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|label| normalize_label(label, &GOAL_LABELS))
        .collect()
}

#[inline]
fn normalize_label(label: &str, table: &HashMap<&'static str, &'static str>) -> String {
    table
        .get(label)
        .copied()
        .unwrap_or(label)
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_known_occasions_map_to_tokens() {
        let normalized = normalize_occasions(&strings(&["Work", "Nights Out", "Travel"]));
        assert_eq!(normalized, vec!["work", "nights_out", "travel"]);
    }

    #[test]
    fn test_known_goals_map_to_tokens() {
        let normalized = normalize_goals(&strings(&["Look taller", "More professional"]));
        assert_eq!(normalized, vec!["look_taller", "professional"]);
    }

    #[test]
    fn test_unknown_labels_pass_through_lowercased() {
        let normalized = normalize_occasions(&strings(&["Underwater Basket Weaving"]));
        assert_eq!(normalized, vec!["underwater basket weaving"]);
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let normalized = normalize_occasions(&strings(&["Work", "Work", "Dates"]));
        assert_eq!(normalized, vec!["work", "work", "dates"]);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(normalize_occasions(&[]).is_empty());
        assert!(normalize_goals(&[]).is_empty());
    }
}
