//! Adapters from parsed CSV rows to the canonical [`ProductInput`].
//!
//! Shopify and WooCommerce exports disagree on column names, and real-world
//! files drift further (hand-edited headers, lowercased exports). Every
//! fallback chain lives here, in one place per platform, instead of being
//! scattered through matching logic.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use taxomatch_core::ProductInput;
use taxomatch_parse::strip_html;

/// Source platform of a product CSV export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Shopify,
    WooCommerce,
}

impl Platform {
    /// Name columns in priority order.
    fn name_columns(&self) -> &'static [&'static str] {
        match self {
            Platform::Shopify => &["Title", "title", "Name", "name", "product_name"],
            Platform::WooCommerce => &["Name", "name", "Title", "title", "post_title"],
        }
    }

    /// Description columns in priority order. All are HTML-flavored.
    fn description_columns(&self) -> &'static [&'static str] {
        match self {
            Platform::Shopify => &["Body (HTML)", "Body", "Description", "description"],
            Platform::WooCommerce => &["Description", "description", "Short description"],
        }
    }

    /// Raw category columns in priority order, kept for the naive fallback.
    fn category_columns(&self) -> &'static [&'static str] {
        match self {
            Platform::Shopify => &["Product Category", "Type", "Custom Product Type"],
            Platform::WooCommerce => &["Categories", "Category", "product_cat"],
        }
    }
}

/// Adapt one parsed CSV row into a [`ProductInput`].
///
/// Returns `None` when no name column resolves — such rows cannot be
/// matched and are skipped by the batch pipeline, never treated as errors.
pub fn adapt_record(platform: Platform, row: &HashMap<String, String>) -> Option<ProductInput> {
    let name = first_nonempty(row, platform.name_columns())?;
    let description = first_nonempty(row, platform.description_columns())
        .map(|html| strip_html(&html))
        .unwrap_or_default();
    let raw_category = first_nonempty(row, platform.category_columns());

    Some(ProductInput {
        name,
        description,
        raw_category,
    })
}

fn first_nonempty(row: &HashMap<String, String>, columns: &[&str]) -> Option<String> {
    columns
        .iter()
        .filter_map(|col| row.get(*col))
        .map(|v| v.trim())
        .find(|v| !v.is_empty())
        .map(str::to_string)
}

/// Naive category extraction from a raw "Product Category" style column:
/// the first segment becomes the main category, the second (when present)
/// the subcategory. Segments split on `>`, `/`, or `,`.
pub fn naive_category(raw: &str) -> (String, String) {
    let mut segments = raw
        .split(['>', '/', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let main = segments.next().unwrap_or("").to_string();
    let sub = segments.next().unwrap_or("").to_string();
    (main, sub)
}
