//! Attribute extraction from product titles and descriptions.
//!
//! Merchant listings rarely carry structured attributes, but the words they
//! use are predictable enough for an ordered pattern scan: the first pattern
//! that matches decides the attribute, later patterns never override it.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Broad product family inferred from listing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Pants,
    Shirt,
    Hat,
    Outerwear,
    Shoes,
    Dress,
    Accessory,
    Underwear,
    Swimwear,
    Sleepwear,
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProductType::Pants => "pants",
            ProductType::Shirt => "shirt",
            ProductType::Hat => "hat",
            ProductType::Outerwear => "outerwear",
            ProductType::Shoes => "shoes",
            ProductType::Dress => "dress",
            ProductType::Accessory => "accessory",
            ProductType::Underwear => "underwear",
            ProductType::Swimwear => "swimwear",
            ProductType::Sleepwear => "sleepwear",
        };
        f.write_str(s)
    }
}

/// Inferred target audience. Absent when the text signals both or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Men,
    Women,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Men => "men",
            Gender::Women => "women",
        })
    }
}

/// Attributes derived from listing text. All optional; never stored upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
}

// ── Product type patterns (ordered, first match wins) ─────────────────

static TYPE_PATTERNS: LazyLock<Vec<(Regex, ProductType)>> = LazyLock::new(|| {
    [
        (
            r"\b(?:pants?|jeans?|chinos?|trousers?|joggers?|leggings?|shorts?|cargos?)\b",
            ProductType::Pants,
        ),
        (
            r"\b(?:shirts?|t-?shirts?|tees?|polos?|blouses?|tops?|tanks?)\b",
            ProductType::Shirt,
        ),
        (
            r"\b(?:hats?|caps?|beanies?|snapbacks?|fedoras?|visors?)\b",
            ProductType::Hat,
        ),
        (
            r"\b(?:jackets?|coats?|hoodies?|sweaters?|cardigans?|blazers?|parkas?|vests?)\b",
            ProductType::Outerwear,
        ),
        (
            r"\b(?:shoes?|sneakers?|boots?|sandals?|loafers?|heels?|slippers?|trainers?)\b",
            ProductType::Shoes,
        ),
        (
            r"\b(?:dress(?:es)?|gowns?|skirts?|frocks?)\b",
            ProductType::Dress,
        ),
        (
            r"\b(?:bags?|backpacks?|wallets?|belts?|scar(?:f|ves)|gloves?|watch(?:es)?|sunglasses)\b",
            ProductType::Accessory,
        ),
        (
            r"\b(?:underwear|boxers?|briefs?|bras?|panties|socks?|lingerie)\b",
            ProductType::Underwear,
        ),
        (
            r"\b(?:swimwear|swimsuits?|bikinis?|trunks?|boardshorts?)\b",
            ProductType::Swimwear,
        ),
        (
            r"\b(?:pajamas?|pyjamas?|sleepwear|nightgowns?|nightwear|robes?)\b",
            ProductType::Sleepwear,
        ),
    ]
    .into_iter()
    .map(|(pat, kind)| (Regex::new(pat).expect("product type pattern is valid"), kind))
    .collect()
});

// ── Gender patterns ───────────────────────────────────────────────────

/// "women", "womens", "woman", "ladies", "female", "girls".
static RE_WOMEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:women'?s?|woman|ladies|lady|female|girls?)\b").unwrap());

/// "men", "mens", "man", "gents", "male", "boys". Written so "women" does
/// not also match as "men".
static RE_MEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:men'?s?|man|gents?|gentlemen|male|boys?)\b").unwrap());

// ── Color / size / material alternations ──────────────────────────────

static RE_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:black|white|red|blue|navy|green|olive|yellow|orange|purple|pink|brown|beige|tan|khaki|grey|gray|cream|maroon|burgundy|teal|gold|silver)\b",
    )
    .unwrap()
});

/// Bare "s"/"m"/"l" are deliberately absent: "men's" word-bounds an "s".
static RE_SIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:xx-?small|x-?small|small|medium|large|x-?large|xx-?large|xxs|xs|xl|xxl|xxxl|[2-5]xl)\b")
        .unwrap()
});

static RE_MATERIAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:cotton|polyester|wool|silk|linen|leather|suede|denim|nylon|spandex|cashmere|velvet|satin|fleece|canvas|rayon|viscose)\b",
    )
    .unwrap()
});

/// Extract attributes from a title and (already plain-text) description.
///
/// Pure and infallible: empty input yields all-`None`.
pub fn extract_attributes(title: &str, description: &str) -> Attributes {
    let combined = format!("{} {}", title, description).to_lowercase();
    if combined.trim().is_empty() {
        return Attributes::default();
    }

    let attrs = Attributes {
        product_type: extract_product_type(&combined),
        gender: extract_gender(&combined),
        color: RE_COLOR.find(&combined).map(|m| m.as_str().to_string()),
        size: RE_SIZE.find(&combined).map(|m| m.as_str().to_string()),
        material: RE_MATERIAL.find(&combined).map(|m| m.as_str().to_string()),
    };
    tracing::trace!(?attrs.product_type, ?attrs.gender, "Attributes extracted");
    attrs
}

/// First matching pattern in list order decides the type. No attempt is made
/// to detect multiple types in one listing.
fn extract_product_type(text: &str) -> Option<ProductType> {
    TYPE_PATTERNS
        .iter()
        .find(|(re, _)| re.is_match(text))
        .map(|&(_, kind)| kind)
}

/// Gender is only inferred when exactly one side matches. "Unisex" listings
/// naming both, and listings naming neither, stay unknown.
fn extract_gender(text: &str) -> Option<Gender> {
    let women = RE_WOMEN.is_match(text);
    let men = RE_MEN.is_match(text);
    match (women, men) {
        (true, false) => Some(Gender::Women),
        (false, true) => Some(Gender::Men),
        _ => None,
    }
}
