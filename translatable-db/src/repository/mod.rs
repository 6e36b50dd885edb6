pub mod find_by_translation_query;
pub mod load_translations;
pub mod save;

// Re-exports
pub use find_by_translation_query::*;
pub use load_translations::*;
pub use save::*;
