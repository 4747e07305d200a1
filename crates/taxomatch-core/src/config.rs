use serde::{Deserialize, Serialize};
use taxomatch_parse::Gender;

/// Minimum confidence (0–100) below which callers should discard a match in
/// favor of their naive fallback. Historically this drifted between call
/// sites (60 in the converter, 70 in the upload path); 60 is canonical.
pub const DEFAULT_MIN_CONFIDENCE: u8 = 60;

/// Matcher configuration. Injected, never read from disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Threshold applied by batch callers; the matcher itself always returns
    /// the raw result.
    pub min_confidence: u8,
    /// Gender assumed when listing text gives no signal. `None` leaves the
    /// gender unknown, which keeps gender-gated override rules from firing.
    pub default_gender: Option<Gender>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            default_gender: None,
        }
    }
}
