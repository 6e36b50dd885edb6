use async_trait::async_trait;
use serde_json::{Map, Value};
use std::error::Error;
use translatable_db::{LoadTranslations, RecordModel, TranslatableDefinition, TranslationScope};

use super::repo_impl::RecordRepositoryImpl;
use crate::repository::scope_sql::build_load_translations_query;
use crate::utils::TryFromRow;

impl RecordRepositoryImpl {
    pub(super) async fn load_translations_impl(
        repo: &RecordRepositoryImpl,
        definition: &TranslatableDefinition,
        parent_key: &Value,
        scope: Option<&TranslationScope>,
    ) -> Result<Vec<RecordModel>, Box<dyn Error + Send + Sync>> {
        let mut builder = build_load_translations_query(definition, parent_key, scope)?;
        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            builder.build().fetch_all(&mut **transaction).await?
        };

        let mut translations = Vec::with_capacity(rows.len());
        for row in rows {
            translations.push(RecordModel::from_attributes(
                definition.translations_table(),
                Map::<String, Value>::try_from_row(&row)?,
            ));
        }
        Ok(translations)
    }
}

#[async_trait]
impl LoadTranslations<RecordModel> for RecordRepositoryImpl {
    async fn load_translations(
        &self,
        definition: &TranslatableDefinition,
        parent_key: &Value,
        scope: Option<&TranslationScope>,
    ) -> Result<Vec<RecordModel>, Box<dyn Error + Send + Sync>> {
        Self::load_translations_impl(self, definition, parent_key, scope).await
    }
}
