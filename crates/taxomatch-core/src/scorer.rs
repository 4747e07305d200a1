//! Weighted category scoring: the general-purpose fallback when no override
//! or direct term match resolves a product.
//!
//! Longer, more specific keywords are worth more than short generic ones
//! (score contributions scale with keyword length), and a keyword found in
//! the product title is worth three times one found only in the description.

use crate::models::Category;
use crate::terms::TermTable;

/// Title matches contribute keyword length times this factor.
pub const TITLE_WEIGHT: u32 = 3;

/// Category-name tokens at or below this length are ignored ("of", "a").
const MIN_KEYWORD_LEN: usize = 2;

/// Per-category scoring outcome.
#[derive(Debug, Clone)]
pub struct CategoryScore {
    pub category_name: String,
    pub score: u32,
    /// Highest-scoring subcategory name, empty when none scored above zero.
    pub best_subcategory: String,
    pub subcategory_score: u32,
}

/// Score every category (and its subcategories) in the taxonomy against a
/// product.
///
/// `normalized_name` is the tokenized product title, `search_text` the
/// tokenized title + description, `tokens` the individual title tokens.
///
/// Results are sorted descending by score. The sort is stable, so equal
/// scores keep taxonomy input order — the first-listed category wins ties.
/// Categories without a name are skipped.
pub fn score_categories(
    normalized_name: &str,
    search_text: &str,
    tokens: &[String],
    taxonomy: &[Category],
    terms: &TermTable,
) -> Vec<CategoryScore> {
    let mut scores: Vec<CategoryScore> = taxonomy
        .iter()
        .filter(|c| !c.name.is_empty())
        .map(|category| score_category(normalized_name, search_text, tokens, category, terms))
        .collect();

    scores.sort_by(|a, b| b.score.cmp(&a.score));
    scores
}

fn score_category(
    normalized_name: &str,
    search_text: &str,
    tokens: &[String],
    category: &Category,
    terms: &TermTable,
) -> CategoryScore {
    let mut score = keyword_overlap(&category.name, normalized_name, search_text);
    score += term_boost(tokens, terms, |e| {
        e.category.eq_ignore_ascii_case(&category.name)
    });

    let mut best_subcategory = String::new();
    let mut subcategory_score = 0u32;
    for sub in &category.subcategories {
        if sub.name.is_empty() {
            continue;
        }
        let mut sub_score = keyword_overlap(&sub.name, normalized_name, search_text);
        sub_score += term_boost(tokens, terms, |e| {
            e.subcategory
                .as_deref()
                .is_some_and(|s| s.eq_ignore_ascii_case(&sub.name))
        });
        // Strictly greater: equal-scoring subcategories keep input order.
        if sub_score > subcategory_score {
            subcategory_score = sub_score;
            best_subcategory = sub.name.clone();
        }
    }

    CategoryScore {
        category_name: category.name.clone(),
        score,
        best_subcategory,
        subcategory_score,
    }
}

/// Length-weighted keyword overlap between a category/subcategory name and
/// the product text. Title hits score 3× description-only hits.
///
/// The name goes through the same tokenization as product text so that
/// punctuated names ("Men's Fashion", "TV & AV") split into comparable
/// keywords.
fn keyword_overlap(name: &str, normalized_name: &str, search_text: &str) -> u32 {
    let mut score = 0u32;
    for keyword in taxomatch_parse::tokenize_for_matching(name).split_whitespace() {
        if keyword.len() <= MIN_KEYWORD_LEN {
            continue;
        }
        if normalized_name.contains(keyword) {
            score += keyword.len() as u32 * TITLE_WEIGHT;
        } else if search_text.contains(keyword) {
            score += keyword.len() as u32;
        }
    }
    score
}

/// Half-weight boost from term entries whose target matches `target_matches`
/// and whose key overlaps a product token (substring either direction).
/// Lets informal brand terms reinforce formal category names without exact
/// equality.
fn term_boost<F>(tokens: &[String], terms: &TermTable, target_matches: F) -> u32
where
    F: Fn(&crate::terms::TermEntry) -> bool,
{
    let mut boost = 0u32;
    for token in tokens {
        for entry in terms.entries() {
            if !target_matches(entry) {
                continue;
            }
            if entry.key.contains(token.as_str()) || token.contains(&entry.key) {
                boost += entry.weight / 2;
            }
        }
    }
    boost
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Subcategory;
    use crate::terms::TermEntry;

    fn category(name: &str, subs: &[&str]) -> Category {
        Category {
            id: String::new(),
            name: name.into(),
            subcategories: subs
                .iter()
                .map(|s| Subcategory {
                    id: String::new(),
                    name: (*s).into(),
                })
                .collect(),
        }
    }

    fn empty_terms() -> TermTable {
        TermTable::from_entries(vec![])
    }

    #[test]
    fn test_title_hit_scores_triple() {
        let taxonomy = vec![category("Scarves", &[])];
        // "scarves" (7 chars) in title → 21; in description only → 7.
        let in_title = score_categories("red scarves", "red scarves", &[], &taxonomy, &empty_terms());
        let in_desc = score_categories("red thing", "red thing soft scarves", &[], &taxonomy, &empty_terms());
        assert_eq!(in_title[0].score, 21);
        assert_eq!(in_desc[0].score, 7);
        assert_eq!(in_title[0].score, in_desc[0].score * TITLE_WEIGHT);
    }

    #[test]
    fn test_title_match_outranks_description_match() {
        let taxonomy = vec![
            category("Bottles", &[]),
            category("Candles", &[]),
        ];
        // Equal-length keywords; "candles" only in description.
        let scores = score_categories(
            "steel bottles",
            "steel bottles ships with candles",
            &[],
            &taxonomy,
            &empty_terms(),
        );
        assert_eq!(scores[0].category_name, "Bottles");
        assert!(scores[0].score >= scores[1].score * 3);
    }

    #[test]
    fn test_short_keywords_ignored() {
        let taxonomy = vec![category("TV & AV", &[])];
        // "tv", "av" and "&"-derived tokens are all length ≤ 2 → score 0.
        let scores = score_categories("tv stand", "tv stand", &[], &taxonomy, &empty_terms());
        assert_eq!(scores[0].score, 0);
    }

    #[test]
    fn test_unnamed_category_skipped() {
        let taxonomy = vec![Category::default(), category("Shoes", &[])];
        let scores = score_categories("running shoes", "running shoes", &[], &taxonomy, &empty_terms());
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].category_name, "Shoes");
    }

    #[test]
    fn test_tie_keeps_taxonomy_order() {
        // Neither keyword appears anywhere: both score 0 and the
        // first-listed category stays first.
        let taxonomy = vec![category("Alpha", &[]), category("Bravo", &[])];
        let scores = score_categories("unrelated", "unrelated", &[], &taxonomy, &empty_terms());
        assert_eq!(scores[0].category_name, "Alpha");
        assert_eq!(scores[1].category_name, "Bravo");
    }

    #[test]
    fn test_term_boost_reinforces_category() {
        let terms = TermTable::from_entries(vec![TermEntry {
            key: "chino".into(),
            category: "Men's Fashion".into(),
            subcategory: Some("Pants".into()),
            weight: 80,
        }]);
        let taxonomy = vec![category("Men's Fashion", &["Pants", "Shirts"])];
        let tokens = vec!["slim".to_string(), "chino".to_string()];
        let scores = score_categories("slim chino", "slim chino", &tokens, &taxonomy, &terms);
        // "fashion" keyword absent from text; only the boost contributes.
        assert_eq!(scores[0].score, 40);
        assert_eq!(scores[0].best_subcategory, "Pants");
        assert_eq!(scores[0].subcategory_score, 40);
    }

    #[test]
    fn test_substring_boost_both_directions() {
        let terms = TermTable::from_entries(vec![TermEntry {
            key: "apple watch".into(),
            category: "Wearable Tech".into(),
            subcategory: None,
            weight: 90,
        }]);
        let taxonomy = vec![category("Wearable Tech", &[])];
        // Token "apple" is a substring of the key "apple watch".
        let tokens = vec!["apple".to_string()];
        let scores = score_categories("apple", "apple", &tokens, &taxonomy, &terms);
        assert_eq!(scores[0].score, 45);
    }

    #[test]
    fn test_best_subcategory_retained() {
        let taxonomy = vec![category("Footwear", &["Heels", "Sneakers"])];
        let scores = score_categories(
            "white sneakers",
            "white sneakers",
            &[],
            &taxonomy,
            &empty_terms(),
        );
        assert_eq!(scores[0].best_subcategory, "Sneakers");
    }
}
