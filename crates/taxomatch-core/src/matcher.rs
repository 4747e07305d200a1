//! The match resolver: overrides → direct term matches → weighted scoring.

use taxomatch_parse::{extract_attributes, match_tokens, strip_html, tokenize_for_matching};

use crate::config::MatcherConfig;
use crate::confidence::confidence;
use crate::models::{Category, MatchResult, Subcategory};
use crate::overrides::{apply_overrides, OverrideRule, OVERRIDE_RULES};
use crate::scorer::score_categories;
use crate::terms::{TermEntry, TermTable};

/// Direct term matches at or above this weight are trusted without scoring.
const DIRECT_MATCH_WEIGHT: u32 = 90;

/// Confidence when a direct match resolves both category and subcategory in
/// the taxonomy.
const DIRECT_FULL_CONFIDENCE: u8 = 95;

/// Confidence when a direct match resolves the category but the taxonomy
/// lacks the target subcategory (the raw term subcategory is returned).
const DIRECT_PARTIAL_CONFIDENCE: u8 = 85;

/// Confidence of the post-scoring iPad correction.
const IPAD_CONFIDENCE: u8 = 90;

/// Product→category matcher. Pure, synchronous and stateless: safe to share
/// across threads and call once per row of a batch without coordination.
#[derive(Debug, Clone)]
pub struct Matcher {
    config: MatcherConfig,
    terms: TermTable,
    rules: Vec<OverrideRule>,
}

impl Default for Matcher {
    /// Built-in term table, built-in override rules, default config.
    fn default() -> Self {
        Self::with_config(MatcherConfig::default())
    }
}

impl Matcher {
    pub fn new(config: MatcherConfig, terms: TermTable, rules: Vec<OverrideRule>) -> Self {
        Self {
            config,
            terms,
            rules,
        }
    }

    /// Built-in term table and override rules with the given config.
    pub fn with_config(config: MatcherConfig) -> Self {
        Self::new(config, TermTable::builtin(), OVERRIDE_RULES.to_vec())
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Classify one product against a taxonomy.
    ///
    /// Resolution order, first success wins:
    /// 1. override rules (gender-gated, taxonomy-validated)
    /// 2. direct multi-word term match, longest key first
    /// 3. direct single-word term match over title tokens
    /// 4. weighted keyword scoring across the whole taxonomy
    ///
    /// Never fails: malformed categories are skipped, no match is the zero
    /// result. Deterministic for fixed inputs.
    #[tracing::instrument(name = "match_product", skip_all, fields(product = %product_name))]
    pub fn match_product(
        &self,
        product_name: &str,
        product_description: &str,
        taxonomy: &[Category],
    ) -> MatchResult {
        if product_name.trim().is_empty() || taxonomy.is_empty() {
            return MatchResult::none();
        }

        let description = strip_html(product_description);
        let attributes = extract_attributes(product_name, &description);
        let gender = attributes.gender.or(self.config.default_gender);

        // 1. Special-case overrides.
        let name_lower = product_name.to_lowercase();
        if let Some(result) = apply_overrides(&self.rules, &name_lower, gender, taxonomy) {
            tracing::debug!(method = "override", category = %result.main_category, "Match hit");
            return result;
        }

        let normalized_name = tokenize_for_matching(product_name);
        let search_text = if description.is_empty() {
            normalized_name.clone()
        } else {
            format!("{} {}", normalized_name, tokenize_for_matching(&description))
        };
        let tokens = match_tokens(product_name);

        // 2–3. Direct term matches.
        if let Some(entry) = self.direct_match(&search_text, &tokens) {
            if entry.weight >= DIRECT_MATCH_WEIGHT {
                if let Some(result) = resolve_direct(entry, taxonomy) {
                    tracing::debug!(
                        method = "direct",
                        term = %entry.key,
                        category = %result.main_category,
                        "Match hit"
                    );
                    return result;
                }
            }
        }

        // 4. Weighted scoring over the full taxonomy.
        let scores = score_categories(&normalized_name, &search_text, &tokens, taxonomy, &self.terms);

        // Post-hoc correction: "ipad" loses to generic tablet/electronics
        // categories under pure keyword scoring often enough to special-case.
        let winner = scores.first().filter(|s| s.score > 0);
        let winner_is_tablets = winner.is_some_and(|s| s.category_name == "Tablets");
        if normalized_name.contains("ipad") && !winner_is_tablets {
            if scores.iter().any(|s| s.category_name == "Tablets") {
                tracing::debug!(method = "ipad_correction", "Match hit");
                return MatchResult {
                    main_category: "Tablets".into(),
                    sub_category: "iPad".into(),
                    confidence: IPAD_CONFIDENCE,
                };
            }
        }

        match winner {
            Some(top) => {
                let result = MatchResult {
                    main_category: top.category_name.clone(),
                    sub_category: top.best_subcategory.clone(),
                    confidence: confidence(top.score, product_name.len()),
                };
                tracing::debug!(
                    method = "scored",
                    category = %result.main_category,
                    confidence = result.confidence,
                    "Match hit"
                );
                result
            }
            None => {
                tracing::debug!("No match");
                MatchResult::none()
            }
        }
    }

    /// Multi-word containment in search text (longest key first), then
    /// single-word lookup over title tokens in token order.
    fn direct_match(&self, search_text: &str, tokens: &[String]) -> Option<&TermEntry> {
        if let Some(entry) = self
            .terms
            .multi_word()
            .iter()
            .find(|e| search_text.contains(&e.key))
        {
            return Some(entry);
        }
        tokens
            .iter()
            .find_map(|token| self.terms.single_word().iter().find(|e| &e.key == token))
    }
}

/// Resolve a strong direct match against the taxonomy. Returns `None` when
/// the taxonomy lacks the target category (resolution falls through to
/// scoring).
fn resolve_direct(entry: &TermEntry, taxonomy: &[Category]) -> Option<MatchResult> {
    let category = taxonomy
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(&entry.category))?;

    let target_sub = entry.subcategory.as_deref().unwrap_or("");
    match find_subcategory(category, target_sub) {
        Some(sub) => Some(MatchResult {
            main_category: category.name.clone(),
            sub_category: sub.name.clone(),
            confidence: DIRECT_FULL_CONFIDENCE,
        }),
        // The term table is trusted over the taxonomy here: the raw
        // subcategory name is returned even though the taxonomy lacks it.
        None => Some(MatchResult {
            main_category: category.name.clone(),
            sub_category: target_sub.to_string(),
            confidence: DIRECT_PARTIAL_CONFIDENCE,
        }),
    }
}

fn find_subcategory<'a>(category: &'a Category, name: &str) -> Option<&'a Subcategory> {
    if name.is_empty() {
        return None;
    }
    category
        .subcategories
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxomatch_parse::Gender;

    fn category(name: &str, subs: &[&str]) -> Category {
        Category {
            id: format!("id-{name}"),
            name: name.into(),
            subcategories: subs
                .iter()
                .enumerate()
                .map(|(i, s)| Subcategory {
                    id: format!("id-{name}-{i}"),
                    name: (*s).into(),
                })
                .collect(),
        }
    }

    fn electronics_taxonomy() -> Vec<Category> {
        vec![
            category("Electronics", &["Chargers", "Cables"]),
            category("Tablets", &["iPad", "Samsung", "E-Readers"]),
            category("Wearable Tech", &["Apple", "Samsung"]),
            category("Accessories", &["Bags", "Wallets"]),
        ]
    }

    #[test]
    fn test_empty_taxonomy_zero_confidence() {
        let matcher = Matcher::default();
        let result = matcher.match_product("iPhone 14 case", "", &[]);
        assert_eq!(result, MatchResult::none());
    }

    #[test]
    fn test_empty_name_zero_confidence() {
        let matcher = Matcher::default();
        let result = matcher.match_product("", "", &electronics_taxonomy());
        assert_eq!(result.confidence, 0);
        assert!(result.main_category.is_empty());
    }

    #[test]
    fn test_determinism() {
        let matcher = Matcher::default();
        let taxonomy = electronics_taxonomy();
        let first = matcher.match_product("Apple Watch Series 8", "great watch", &taxonomy);
        for _ in 0..10 {
            assert_eq!(
                matcher.match_product("Apple Watch Series 8", "great watch", &taxonomy),
                first
            );
        }
    }

    #[test]
    fn test_longest_match_first_apple_watch() {
        // "apple watch" must win over the looser single-word "watch" entry
        // and over generic Accessories.
        let matcher = Matcher::default();
        let result = matcher.match_product("Apple Watch Series 8", "", &electronics_taxonomy());
        assert_eq!(result.main_category, "Wearable Tech");
        assert_eq!(result.sub_category, "Apple");
        assert!(result.confidence >= 95);
    }

    #[test]
    fn test_direct_match_without_subcategory_in_taxonomy() {
        // Category resolves, target subcategory not in the taxonomy: the
        // raw term subcategory name comes back at partial confidence.
        let taxonomy = vec![category("Tablets", &["Samsung"])];
        let matcher = Matcher::default();
        let result = matcher.match_product("Apple iPad 10th Gen 64GB", "", &taxonomy);
        assert_eq!(result.main_category, "Tablets");
        assert_eq!(result.sub_category, "iPad");
        assert_eq!(result.confidence, 85);
    }

    #[test]
    fn test_direct_match_full_resolution() {
        let matcher = Matcher::default();
        let result =
            matcher.match_product("Apple iPad 10th Gen 64GB", "", &electronics_taxonomy());
        assert_eq!(result.main_category, "Tablets");
        assert_eq!(result.sub_category, "iPad");
        assert_eq!(result.confidence, 95);
    }

    #[test]
    fn test_ipad_correction_without_term_entry() {
        // A custom table with no "ipad" entry: scoring alone would hand the
        // win to Electronics, but the correction rescues Tablets.
        let terms = TermTable::from_entries(vec![TermEntry {
            key: "electronics".into(),
            category: "Electronics".into(),
            subcategory: None,
            weight: 80,
        }]);
        let matcher = Matcher::new(MatcherConfig::default(), terms, vec![]);
        let result = matcher.match_product(
            "Apple iPad 10th Gen 64GB",
            "electronics for the whole family",
            &electronics_taxonomy(),
        );
        assert_eq!(result.main_category, "Tablets");
        assert_eq!(result.sub_category, "iPad");
        assert_eq!(result.confidence, 90);
    }

    #[test]
    fn test_ipad_correction_requires_tablets_category() {
        let terms = TermTable::from_entries(vec![]);
        let matcher = Matcher::new(MatcherConfig::default(), terms, vec![]);
        let taxonomy = vec![category("Phones", &[])];
        let result = matcher.match_product("Apple iPad 10th Gen", "", &taxonomy);
        assert_eq!(result, MatchResult::none());
    }

    #[test]
    fn test_direct_match_falls_through_when_category_absent() {
        // "macbook" targets Computers; this taxonomy has no Computers, so
        // resolution drops to scoring and finds Laptop Bags by keyword.
        let taxonomy = vec![category("Laptop Bags", &[])];
        let matcher = Matcher::default();
        let result = matcher.match_product("MacBook Laptop Sleeve Bags", "", &taxonomy);
        assert_eq!(result.main_category, "Laptop Bags");
        assert!(result.confidence > 0);
    }

    #[test]
    fn test_id_swap_invariance() {
        let matcher = Matcher::default();
        let taxonomy = electronics_taxonomy();
        let mut swapped = taxonomy.clone();
        for (i, cat) in swapped.iter_mut().enumerate() {
            cat.id = format!("swapped-{i}");
            for (j, sub) in cat.subcategories.iter_mut().enumerate() {
                sub.id = format!("swapped-{i}-{j}");
            }
        }
        assert_eq!(
            matcher.match_product("Apple Watch Series 8", "", &taxonomy),
            matcher.match_product("Apple Watch Series 8", "", &swapped)
        );
    }

    #[test]
    fn test_html_description_normalized() {
        let taxonomy = vec![category("Silk Scarves", &[])];
        let matcher = Matcher::new(MatcherConfig::default(), TermTable::from_entries(vec![]), vec![]);
        // "silk" reaches the matcher only if tags are stripped and &amp;
        // decoding doesn't mangle surrounding words.
        let with_html =
            matcher.match_product("Red Scarf", "<p>100% <b>silk</b> &amp; soft</p>", &taxonomy);
        let plain = matcher.match_product("Red Scarf", "100% silk & soft", &taxonomy);
        assert_eq!(with_html, plain);
        assert!(with_html.confidence > 0);
    }

    #[test]
    fn test_confidence_bounded_for_pathological_names() {
        let matcher = Matcher::default();
        let taxonomy = electronics_taxonomy();
        let long_name = "tablets ".repeat(500);
        let result = matcher.match_product(&long_name, "", &taxonomy);
        assert!(result.confidence <= 100);
        let result = matcher.match_product("ta", "", &taxonomy);
        assert!(result.confidence <= 100);
    }

    #[test]
    fn test_override_beats_direct_match() {
        // "duckbill cap" is both an override needle and a term entry; the
        // override wins and carries its own confidence.
        let taxonomy = vec![category("Men's Fashion", &["Hats", "Shirts"])];
        let matcher = Matcher::default();
        let result = matcher.match_product("Men's Duckbill Cap", "", &taxonomy);
        assert_eq!(result.main_category, "Men's Fashion");
        assert_eq!(result.sub_category, "Hats");
        assert_eq!(result.confidence, 96);
    }

    #[test]
    fn test_default_gender_enables_gated_override() {
        // No gender signal in the text: the rule fires only when the
        // config supplies a default.
        let taxonomy = vec![category("Men's Fashion", &["Hats"])];
        let ungendered_name = "Vintage Duckbill Flat Brim";

        let matcher = Matcher::default();
        let result = matcher.match_product(ungendered_name, "", &taxonomy);
        assert_ne!(result.confidence, 96);

        let matcher = Matcher::with_config(MatcherConfig {
            default_gender: Some(Gender::Men),
            ..MatcherConfig::default()
        });
        let result = matcher.match_product(ungendered_name, "", &taxonomy);
        assert_eq!(result.confidence, 96);
    }

    #[test]
    fn test_no_match_is_zero_result() {
        let matcher = Matcher::default();
        let taxonomy = vec![category("Garden Furniture", &[])];
        let result = matcher.match_product("Quantum Flux Capacitor", "", &taxonomy);
        assert_eq!(result, MatchResult::none());
    }

    #[test]
    fn test_unnamed_categories_skipped() {
        let mut taxonomy = electronics_taxonomy();
        taxonomy.insert(0, Category::default());
        let matcher = Matcher::default();
        let result = matcher.match_product("Apple Watch Series 8", "", &taxonomy);
        assert_eq!(result.main_category, "Wearable Tech");
    }
}
