//! The term-weight table: domain keywords and phrases mapped to a target
//! category, optional subcategory, and a relevance weight.
//!
//! Weights run roughly 60–100. A direct hit at weight ≥ 90 is trusted
//! outright; everything contributes half its weight as a scoring boost.
//! Multi-word keys are scanned longest-first so "apple watch" is tested
//! before a looser bare "watch".

use phf::phf_map;

/// A built-in table entry.
#[derive(Debug, Clone, Copy)]
pub struct Term {
    pub category: &'static str,
    pub subcategory: Option<&'static str>,
    pub weight: u32,
}

impl Term {
    const fn new(category: &'static str, weight: u32) -> Self {
        Self {
            category,
            subcategory: None,
            weight,
        }
    }

    const fn sub(category: &'static str, subcategory: &'static str, weight: u32) -> Self {
        Self {
            category,
            subcategory: Some(subcategory),
            weight,
        }
    }
}

/// Compile-time term-weight table. All keys are lowercase.
pub static TERMS: phf::Map<&'static str, Term> = phf_map! {
    // ── Tablets & e-readers ──────────────────────────────────────
    "ipad" => Term::sub("Tablets", "iPad", 95),
    "ipad pro" => Term::sub("Tablets", "iPad", 96),
    "galaxy tab" => Term::sub("Tablets", "Samsung", 92),
    "kindle" => Term::sub("Tablets", "E-Readers", 90),
    "tablet" => Term::new("Tablets", 75),

    // ── Mobile phones ────────────────────────────────────────────
    "iphone" => Term::sub("Mobile Phones", "iPhone", 95),
    "samsung galaxy" => Term::sub("Mobile Phones", "Samsung", 92),
    "google pixel" => Term::sub("Mobile Phones", "Google", 92),
    "smartphone" => Term::new("Mobile Phones", 80),

    // ── Wearables ────────────────────────────────────────────────
    "apple watch" => Term::sub("Wearable Tech", "Apple", 95),
    "galaxy watch" => Term::sub("Wearable Tech", "Samsung", 92),
    "smartwatch" => Term::new("Wearable Tech", 85),
    "fitbit" => Term::sub("Wearable Tech", "Fitness Trackers", 90),
    "watch" => Term::new("Wearable Tech", 60),

    // ── Audio ────────────────────────────────────────────────────
    "airpods" => Term::sub("Audio", "Earbuds", 95),
    "earbuds" => Term::sub("Audio", "Earbuds", 82),
    "headphones" => Term::sub("Audio", "Headphones", 82),
    "soundbar" => Term::sub("Audio", "Speakers", 85),
    "bluetooth speaker" => Term::sub("Audio", "Speakers", 88),

    // ── Computers ────────────────────────────────────────────────
    "macbook" => Term::sub("Computers", "Laptops", 95),
    "chromebook" => Term::sub("Computers", "Laptops", 92),
    "laptop" => Term::sub("Computers", "Laptops", 85),
    "desktop pc" => Term::sub("Computers", "Desktops", 88),
    "monitor" => Term::sub("Computers", "Monitors", 78),

    // ── Gaming ───────────────────────────────────────────────────
    "playstation" => Term::sub("Gaming", "Consoles", 95),
    "ps5" => Term::sub("Gaming", "Consoles", 95),
    "xbox" => Term::sub("Gaming", "Consoles", 95),
    "nintendo switch" => Term::sub("Gaming", "Consoles", 95),
    "gaming chair" => Term::sub("Gaming", "Accessories", 88),

    // ── Men's fashion ────────────────────────────────────────────
    "chino" => Term::sub("Men's Fashion", "Pants", 85),
    "cargo pants" => Term::sub("Men's Fashion", "Pants", 85),
    "oxford shirt" => Term::sub("Men's Fashion", "Shirts", 90),
    "polo shirt" => Term::sub("Men's Fashion", "Shirts", 85),
    "long sleeve shirt" => Term::sub("Men's Fashion", "Shirts", 90),
    "duckbill cap" => Term::sub("Men's Fashion", "Hats", 95),
    "cadet cap" => Term::sub("Men's Fashion", "Hats", 95),
    "snapback" => Term::sub("Men's Fashion", "Hats", 85),
    "bomber jacket" => Term::sub("Men's Fashion", "Jackets", 88),

    // ── Women's fashion ──────────────────────────────────────────
    "maxi dress" => Term::sub("Women's Fashion", "Dresses", 90),
    "midi dress" => Term::sub("Women's Fashion", "Dresses", 90),
    "bodycon" => Term::sub("Women's Fashion", "Dresses", 85),
    "handbag" => Term::sub("Women's Fashion", "Bags", 85),
    "leggings" => Term::sub("Women's Fashion", "Activewear", 80),
    "blouse" => Term::sub("Women's Fashion", "Tops", 82),

    // ── Footwear ─────────────────────────────────────────────────
    "sneakers" => Term::sub("Footwear", "Sneakers", 85),
    "running shoes" => Term::sub("Footwear", "Sneakers", 88),
    "chelsea boots" => Term::sub("Footwear", "Boots", 90),
    "loafers" => Term::sub("Footwear", "Loafers", 85),
    "heels" => Term::sub("Footwear", "Heels", 80),

    // ── Home & accessories ───────────────────────────────────────
    "backpack" => Term::sub("Accessories", "Bags", 80),
    "wallet" => Term::sub("Accessories", "Wallets", 80),
    "sunglasses" => Term::sub("Accessories", "Eyewear", 82),
    "beard oil" => Term::sub("Grooming", "Beard Care", 90),
    "air fryer" => Term::sub("Home & Kitchen", "Appliances", 90),
    "blender" => Term::sub("Home & Kitchen", "Appliances", 82),
};

/// An owned term entry, used for injected/custom tables.
#[derive(Debug, Clone)]
pub struct TermEntry {
    pub key: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub weight: u32,
}

/// Immutable term-weight lookup passed into the matcher.
///
/// Holds multi-word keys pre-sorted by descending length for
/// longest-match-first scanning, and single-word keys for token lookup.
#[derive(Debug, Clone)]
pub struct TermTable {
    multi: Vec<TermEntry>,
    single: Vec<TermEntry>,
}

impl TermTable {
    /// Build from an arbitrary entry list (tests, per-tenant tables).
    pub fn from_entries(entries: Vec<TermEntry>) -> Self {
        let (mut multi, single): (Vec<_>, Vec<_>) =
            entries.into_iter().partition(|e| e.key.contains(' '));
        // Stable sort: equal-length phrases keep their given order.
        multi.sort_by(|a, b| b.key.len().cmp(&a.key.len()));
        Self { multi, single }
    }

    /// The built-in table.
    pub fn builtin() -> Self {
        let entries = TERMS
            .entries()
            .map(|(key, term)| TermEntry {
                key: (*key).to_string(),
                category: term.category.to_string(),
                subcategory: term.subcategory.map(str::to_string),
                weight: term.weight,
            })
            .collect();
        Self::from_entries(entries)
    }

    /// Multi-word keys, longest first.
    pub fn multi_word(&self) -> &[TermEntry] {
        &self.multi
    }

    /// Single-word keys, unordered.
    pub fn single_word(&self) -> &[TermEntry] {
        &self.single
    }

    /// Exact key lookup across both partitions.
    pub fn get(&self, key: &str) -> Option<&TermEntry> {
        self.single
            .iter()
            .chain(self.multi.iter())
            .find(|e| e.key == key)
    }

    /// All entries (single then multi), for boost scanning.
    pub fn entries(&self) -> impl Iterator<Item = &TermEntry> {
        self.single.iter().chain(self.multi.iter())
    }
}

impl Default for TermTable {
    fn default() -> Self {
        Self::builtin()
    }
}
