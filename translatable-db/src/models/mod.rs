pub mod locale;
pub mod locale_config;
pub mod locale_context;
pub mod record;
pub mod record_model;
pub mod translatable_definition;

// Re-exports
pub use locale::*;
pub use locale_config::*;
pub use locale_context::*;
pub use record::*;
pub use record_model::*;
pub use translatable_definition::*;
