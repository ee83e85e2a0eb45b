/// Category label that disables category filtering. Always listed first.
pub const ALL_CATEGORIES: &str = "All";

/// Bucket for items that carry no category of their own.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Minimum Jaro-Winkler similarity for a category suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;
