//! Text normalization pipeline for product title and description matching.
//!
//! Merchant CSV exports carry HTML-flavored descriptions and inconsistently
//! cased titles; everything is reduced to plain lowercase text before any
//! scoring happens.

use unicode_normalization::UnicodeNormalization;

/// Strip HTML tags and decode the common entities found in Shopify and
/// WooCommerce description fields, collapsing whitespace afterwards.
///
/// An unterminated tag swallows the rest of the input, matching how lenient
/// storefront renderers treat broken markup.
pub fn strip_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;

    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                // Tag boundaries act as word boundaries ("<p>Red</p>silk").
                out.push(' ');
            }
            _ if in_tag => {}
            _ => out.push(c),
        }
    }

    collapse_whitespace(&decode_entities(&out))
}

/// Entity pairs handled in description fields. `&nbsp;` becomes a plain
/// space so it participates in word splitting.
const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
];

fn decode_entities(s: &str) -> String {
    let mut out = s.to_string();
    for (entity, replacement) in ENTITIES {
        if out.contains(entity) {
            out = out.replace(entity, replacement);
        }
    }
    out
}

/// Normalize free text: NFKC (fullwidth → ASCII, compose diacritics),
/// lowercase, collapse whitespace.
pub fn normalize(text: &str) -> String {
    let s = text.nfkc().collect::<String>().to_lowercase();
    collapse_whitespace(&s)
}

/// Reduce text to a matchable form: lowercase with every non-alphanumeric
/// character replaced by a single space.
///
/// "Men's Slim-Fit Chino (Navy)" → "men s slim fit chino navy"
pub fn tokenize_for_matching(text: &str) -> String {
    let lowered = text.nfkc().collect::<String>().to_lowercase();
    let replaced: String = lowered
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    collapse_whitespace(&replaced)
}

/// The individual tokens of [`tokenize_for_matching`].
pub fn match_tokens(text: &str) -> Vec<String> {
    tokenize_for_matching(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Trim and collapse whitespace runs to a single space.
fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
