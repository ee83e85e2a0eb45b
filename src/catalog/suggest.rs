use strsim::jaro_winkler;

use crate::catalog::constants::SUGGESTION_THRESHOLD;

/// Closest known category label to `input`, if any is similar enough.
///
/// Only used for user feedback; filtering itself stays exact.
pub fn suggest_category<'a>(categories: &'a [String], input: &str) -> Option<&'a str> {
    let input = input.trim().to_lowercase();

    categories
        .iter()
        .map(|c| (c.as_str(), jaro_winkler(&c.to_lowercase(), &input)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(c, _)| c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<String> {
        ["All", "Dosa", "Beverages", "Desserts"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_suggests_case_mismatch() {
        assert_eq!(suggest_category(&categories(), "beverages"), Some("Beverages"));
    }

    #[test]
    fn test_suggests_typo() {
        assert_eq!(suggest_category(&categories(), "Desserst"), Some("Desserts"));
    }

    #[test]
    fn test_no_suggestion_for_unrelated() {
        assert_eq!(suggest_category(&categories(), "xyzzy"), None);
    }
}
