//! Special-case override rules: an ordered data table of high-precision
//! matches checked before any scoring.
//!
//! These exist because generic keyword scoring systematically misclassifies
//! a small set of high-frequency, high-ambiguity listings. Rules are data,
//! not branches: adding one is a table edit, and the table is injectable so
//! tests and tenants can carry their own.

use taxomatch_parse::Gender;

use crate::models::{Category, MatchResult};

/// One override rule. Fires when `needle` is a substring of the lowercased
/// product name and the inferred gender satisfies `required_gender`.
#[derive(Debug, Clone)]
pub struct OverrideRule {
    pub needle: &'static str,
    pub required_gender: Option<Gender>,
    pub category: &'static str,
    pub subcategory: &'static str,
    pub confidence: u8,
}

/// Built-in rules, evaluated in order. First hit wins.
pub const OVERRIDE_RULES: &[OverrideRule] = &[
    OverrideRule {
        needle: "duckbill",
        required_gender: Some(Gender::Men),
        category: "Men's Fashion",
        subcategory: "Hats",
        confidence: 96,
    },
    OverrideRule {
        needle: "cadet cap",
        required_gender: Some(Gender::Men),
        category: "Men's Fashion",
        subcategory: "Hats",
        confidence: 96,
    },
    OverrideRule {
        needle: "asos dress",
        required_gender: Some(Gender::Women),
        category: "Women's Fashion",
        subcategory: "Dresses",
        confidence: 95,
    },
    OverrideRule {
        needle: "long sleeve shirt",
        required_gender: Some(Gender::Men),
        category: "Men's Fashion",
        subcategory: "Shirts",
        confidence: 92,
    },
    OverrideRule {
        needle: "apple pencil",
        required_gender: None,
        category: "Tablets",
        subcategory: "Accessories",
        confidence: 94,
    },
];

/// Evaluate rules against a lowercased product name. The target category
/// must exist in the supplied taxonomy (exact name first, case-insensitive
/// fallback) or the rule is skipped and resolution falls through.
pub fn apply_overrides(
    rules: &[OverrideRule],
    name_lower: &str,
    gender: Option<Gender>,
    taxonomy: &[Category],
) -> Option<MatchResult> {
    for rule in rules {
        if !name_lower.contains(rule.needle) {
            continue;
        }
        if let Some(required) = rule.required_gender {
            if gender != Some(required) {
                continue;
            }
        }
        let Some(category) = find_category(taxonomy, rule.category) else {
            tracing::debug!(
                needle = rule.needle,
                target = rule.category,
                "Override target missing from taxonomy, skipping rule"
            );
            continue;
        };
        let sub_category = category
            .subcategories
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(rule.subcategory))
            .map(|s| s.name.clone())
            .unwrap_or_else(|| rule.subcategory.to_string());
        return Some(MatchResult {
            main_category: category.name.clone(),
            sub_category,
            confidence: rule.confidence,
        });
    }
    None
}

/// Exact name match preferred, case-insensitive as fallback.
fn find_category<'a>(taxonomy: &'a [Category], name: &str) -> Option<&'a Category> {
    taxonomy
        .iter()
        .find(|c| c.name == name)
        .or_else(|| taxonomy.iter().find(|c| c.name.eq_ignore_ascii_case(name)))
}
