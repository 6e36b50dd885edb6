pub mod translation_query;
pub mod translation_scope;

// Re-exports
pub use translation_query::*;
pub use translation_scope::*;
