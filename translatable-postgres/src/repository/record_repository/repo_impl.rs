use crate::executor::Executor;

/// Stores [`translatable_db::RecordModel`]s of any table.
///
/// Entities and their translations go through the same repository. Rows
/// are read and written as `jsonb`, so no per-table mapping is needed.
pub struct RecordRepositoryImpl {
    pub executor: Executor,
}

impl RecordRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}
