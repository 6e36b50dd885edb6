pub mod models;
pub mod query;
pub mod repository;
pub mod translatable;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

pub use models::*;
pub use query::*;
pub use repository::*;
pub use translatable::Translatable;
