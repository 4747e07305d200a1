pub mod config;
pub mod confidence;
pub mod error;
pub mod matcher;
pub mod models;
pub mod overrides;
pub mod scorer;
pub mod terms;

pub use config::MatcherConfig;
pub use error::TaxomatchError;
pub use matcher::Matcher;
pub use models::{Category, MatchResult, ProductInput, Subcategory};
pub use terms::TermTable;
