pub mod db_init;
pub mod record_repository;
pub mod scope_sql;

pub use record_repository::RecordRepositoryImpl;
