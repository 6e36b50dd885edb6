use async_trait::async_trait;
use serde_json::{Map, Value};
use std::error::Error;
use translatable_db::{FindByTranslationQuery, RecordModel, TranslatableDefinition, TranslationQuery};

use super::repo_impl::RecordRepositoryImpl;
use crate::repository::scope_sql::build_find_query;
use crate::utils::TryFromRow;

impl RecordRepositoryImpl {
    pub(super) async fn find_by_translation_query_impl(
        repo: &RecordRepositoryImpl,
        definition: &TranslatableDefinition,
        query: &TranslationQuery,
    ) -> Result<Vec<RecordModel>, Box<dyn Error + Send + Sync>> {
        let mut builder = build_find_query(definition, query)?;
        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            builder.build().fetch_all(&mut **transaction).await?
        };

        let mut entities = Vec::with_capacity(rows.len());
        for row in rows {
            entities.push(
                RecordModel::from_attributes(definition.table(), Map::<String, Value>::try_from_row(&row)?)
                    .with_key_name(definition.key_name()),
            );
        }
        Ok(entities)
    }
}

#[async_trait]
impl FindByTranslationQuery<RecordModel> for RecordRepositoryImpl {
    async fn find_by_translation_query(
        &self,
        definition: &TranslatableDefinition,
        query: &TranslationQuery,
    ) -> Result<Vec<RecordModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_translation_query_impl(self, definition, query).await
    }
}
