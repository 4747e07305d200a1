use serde::{Deserialize, Serialize};

/// A marketplace category. `name` is the only reliable match key; `id` may
/// be synthesized upstream and is never read by the matcher.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

/// A subcategory scoped under a parent [`Category`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Subcategory {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Canonical product record fed to the matcher. The description is expected
/// to already be plain text (HTML stripped by the feed layer).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Raw value of the source's category column, kept for the naive
    /// fallback when the matcher's confidence is below threshold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_category: Option<String>,
}

/// Outcome of classifying one product against a taxonomy.
///
/// Empty strings with confidence 0 mean "no match" — callers fall back to
/// their own strategy. A resolved `sub_category` may name a subcategory the
/// taxonomy does not actually contain (direct term matches trust the term
/// table over the taxonomy); callers must tolerate this.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub main_category: String,
    pub sub_category: String,
    /// Heuristic certainty in 0–100. Not a calibrated probability.
    pub confidence: u8,
}

impl MatchResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_match(&self) -> bool {
        !self.main_category.is_empty()
    }
}
