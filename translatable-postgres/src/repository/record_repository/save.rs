use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::{Postgres, QueryBuilder};
use std::error::Error;
use tracing::{debug, warn};
use translatable_db::{Record, RecordModel, Save};

use super::repo_impl::RecordRepositoryImpl;
use crate::utils::{quote_ident, text_value, TryFromRow, ROW_COLUMN};

const TARGET_ALIAS: &str = "target";

/// `INSERT ... SELECT ... FROM jsonb_populate_record(NULL::<table>, $1)`.
///
/// A missing or null key column is left out so the column default applies.
pub(crate) fn build_insert_query(
    table: &str,
    key_name: &str,
    attributes: &Map<String, Value>,
) -> Result<QueryBuilder<'static, Postgres>, Box<dyn Error + Send + Sync>> {
    let table = quote_ident(table)?;
    let values: Map<String, Value> = attributes
        .iter()
        .filter(|(column, value)| !(column.as_str() == key_name && value.is_null()))
        .map(|(column, value)| (column.clone(), value.clone()))
        .collect();

    if values.is_empty() {
        return Ok(QueryBuilder::new(format!(
            "INSERT INTO {table} AS {TARGET_ALIAS} DEFAULT VALUES RETURNING to_jsonb({TARGET_ALIAS}) AS {ROW_COLUMN}"
        )));
    }

    let columns = column_list(values.keys())?;
    let mut builder = QueryBuilder::new(format!(
        "INSERT INTO {table} AS {TARGET_ALIAS} ({columns}) SELECT {columns} FROM jsonb_populate_record(NULL::{table}, "
    ));
    builder.push_bind(Value::Object(values));
    builder.push(format!(") RETURNING to_jsonb({TARGET_ALIAS}) AS {ROW_COLUMN}"));
    Ok(builder)
}

/// `UPDATE ... SET (<dirty>) = (SELECT <dirty> FROM jsonb_populate_record(...))`
/// on the row whose key matches.
pub(crate) fn build_update_query(
    table: &str,
    key_name: &str,
    key: &Value,
    dirty: Map<String, Value>,
) -> Result<QueryBuilder<'static, Postgres>, Box<dyn Error + Send + Sync>> {
    let table = quote_ident(table)?;
    let columns = column_list(dirty.keys())?;
    let mut builder = QueryBuilder::new(format!(
        "UPDATE {table} AS {TARGET_ALIAS} SET ({columns}) = (SELECT {columns} FROM jsonb_populate_record(NULL::{table}, "
    ));
    builder.push_bind(Value::Object(dirty));
    builder.push(format!(
        ")) WHERE {TARGET_ALIAS}.{}::text = ",
        quote_ident(key_name)?
    ));
    builder.push_bind(text_value(key));
    builder.push(format!(" RETURNING to_jsonb({TARGET_ALIAS}) AS {ROW_COLUMN}"));
    Ok(builder)
}

fn column_list<'a>(
    columns: impl Iterator<Item = &'a String>,
) -> Result<String, Box<dyn Error + Send + Sync>> {
    let quoted = columns
        .map(|column| quote_ident(column))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(quoted.join(", "))
}

impl RecordRepositoryImpl {
    pub(super) async fn save_impl(
        repo: &RecordRepositoryImpl,
        item: &mut RecordModel,
    ) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let mut builder = if item.exists() {
            let dirty = item.dirty();
            if dirty.is_empty() {
                return Ok(true);
            }
            let key = item
                .key()
                .cloned()
                .ok_or_else(|| format!("Cannot update a '{}' row without a key", item.table()))?;
            build_update_query(item.table(), item.key_name(), &key, dirty)?
        } else {
            build_insert_query(item.table(), item.key_name(), item.attributes())?
        };

        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            builder.build().fetch_optional(&mut **transaction).await?
        };

        let Some(row) = row else {
            warn!(table = item.table(), "No row was written");
            return Ok(false);
        };

        for (column, value) in Map::<String, Value>::try_from_row(&row)? {
            item.set_attribute(&column, value);
        }
        item.mark_persisted();
        debug!(table = item.table(), key = ?item.key(), "Saved row");
        Ok(true)
    }
}

#[async_trait]
impl Save<RecordModel> for RecordRepositoryImpl {
    async fn save(&self, item: &mut RecordModel) -> Result<bool, Box<dyn Error + Send + Sync>> {
        Self::save_impl(self, item).await
    }
}
