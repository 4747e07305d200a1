//! Tolerant decoding of the upstream category taxonomy.
//!
//! The taxonomy arrives as JSON from a public endpoint whose payload shape
//! has drifted over time: entries may lack ids, names, or carry a malformed
//! `subcategories` value. One bad entry must never fail a batch, so
//! everything decodable is kept and the rest is skipped with a warning.

use serde_json::Value;
use taxomatch_core::{Category, Subcategory, TaxomatchError};

/// Decode a taxonomy JSON document into categories.
///
/// Accepts either a bare array or an object wrapping one under a
/// `categories` key. Entries without a `name` are skipped; a missing `id`
/// is synthesized from the entry's index (deterministic — ids never affect
/// matching, but round-trips should be stable). Malformed `subcategories`
/// degrade to an empty list.
pub fn load_taxonomy(json: &str) -> Result<Vec<Category>, TaxomatchError> {
    let value: Value = serde_json::from_str(json)?;

    let entries = match &value {
        Value::Array(entries) => entries.as_slice(),
        Value::Object(map) => map
            .get("categories")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .ok_or_else(|| {
                TaxomatchError::Taxonomy("expected an array or {\"categories\": [...]}".into())
            })?,
        _ => {
            return Err(TaxomatchError::Taxonomy(
                "expected an array or {\"categories\": [...]}".into(),
            ))
        }
    };

    let mut categories = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let Some(name) = entry.get("name").and_then(Value::as_str).filter(|n| !n.is_empty())
        else {
            tracing::warn!(index, "Skipping taxonomy entry without a name");
            continue;
        };

        let id = entry
            .get("id")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("cat-{index}"));

        let subcategories = entry
            .get("subcategories")
            .and_then(Value::as_array)
            .map(|subs| decode_subcategories(subs, &id))
            .unwrap_or_default();

        categories.push(Category {
            id,
            name: name.to_string(),
            subcategories,
        });
    }

    Ok(categories)
}

fn decode_subcategories(subs: &[Value], parent_id: &str) -> Vec<Subcategory> {
    subs.iter()
        .enumerate()
        .filter_map(|(index, sub)| {
            let name = sub.get("name").and_then(Value::as_str).filter(|n| !n.is_empty())?;
            let id = sub
                .get("id")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("{parent_id}-{index}"));
            Some(Subcategory {
                id,
                name: name.to_string(),
            })
        })
        .collect()
}
