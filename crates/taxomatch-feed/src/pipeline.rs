//! Batch classification: adapt each row, match it, and apply the
//! confidence threshold with the naive-category fallback.
//!
//! Rows are independent given the shared read-only taxonomy, so callers may
//! shard this loop however they like; the engine itself stays synchronous.
//! A row that cannot be adapted is recorded and skipped — one malformed row
//! never aborts a conversion job.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use taxomatch_core::{Category, MatchResult, Matcher, ProductInput};

use crate::records::{adapt_record, naive_category, Platform};

/// Outcome of classifying one CSV row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RowOutcome {
    /// The matcher's result met the confidence threshold.
    Matched {
        product: ProductInput,
        result: MatchResult,
    },
    /// Below threshold (or no match): fell back to the raw category column.
    FellBack {
        product: ProductInput,
        result: MatchResult,
        rejected_confidence: u8,
    },
    /// The row had no resolvable product name.
    Skipped { row_index: usize },
}

/// Classify a batch of parsed CSV rows against one taxonomy snapshot.
pub fn classify_rows(
    matcher: &Matcher,
    taxonomy: &[Category],
    platform: Platform,
    rows: &[HashMap<String, String>],
) -> Vec<RowOutcome> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| classify_row(matcher, taxonomy, platform, index, row))
        .collect()
}

fn classify_row(
    matcher: &Matcher,
    taxonomy: &[Category],
    platform: Platform,
    index: usize,
    row: &HashMap<String, String>,
) -> RowOutcome {
    let Some(product) = adapt_record(platform, row) else {
        tracing::warn!(row = index, "Skipping row without a product name");
        return RowOutcome::Skipped { row_index: index };
    };

    let result = matcher.match_product(&product.name, &product.description, taxonomy);

    if result.is_match() && result.confidence >= matcher.config().min_confidence {
        return RowOutcome::Matched { product, result };
    }

    let rejected_confidence = result.confidence;
    let (main, sub) = product
        .raw_category
        .as_deref()
        .map(naive_category)
        .unwrap_or_default();
    RowOutcome::FellBack {
        product,
        result: MatchResult {
            main_category: main,
            sub_category: sub,
            confidence: 0,
        },
        rejected_confidence,
    }
}
