pub mod pipeline;
pub mod records;
pub mod taxonomy;

pub use pipeline::{classify_rows, RowOutcome};
pub use records::{adapt_record, naive_category, Platform};
pub use taxonomy::load_taxonomy;
