pub mod attributes;
pub mod normalize;

pub use attributes::{extract_attributes, Attributes, Gender, ProductType};
pub use normalize::{match_tokens, normalize, strip_html, tokenize_for_matching};
