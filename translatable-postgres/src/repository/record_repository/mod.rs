pub mod repo_impl;
pub mod save;
pub mod load_translations;
pub mod find_by_translation_query;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::RecordRepositoryImpl;
