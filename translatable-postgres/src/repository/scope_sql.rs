//! Rendering of translation scopes into PostgreSQL.
//!
//! Entity filters become one `EXISTS` sub-select per scope against the
//! translations table. Translated values are compared in their text form so
//! the same scope works for text, numeric and uuid columns.

use serde_json::Value;
use sqlx::{Postgres, QueryBuilder};
use std::error::Error;
use translatable_db::{TranslatableDefinition, TranslationQuery, TranslationScope, UNTRANSLATED_PLACEHOLDER};

use crate::utils::{quote_ident, text_value, ROW_COLUMN};

const PARENT_ALIAS: &str = "p";
const TRANSLATION_ALIAS: &str = "t";

/// Selects the entities matching every filter scope of `query`.
pub fn build_find_query(
    definition: &TranslatableDefinition,
    query: &TranslationQuery,
) -> Result<QueryBuilder<'static, Postgres>, Box<dyn Error + Send + Sync>> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT to_jsonb({PARENT_ALIAS}) AS {ROW_COLUMN} FROM {} AS {PARENT_ALIAS}",
        quote_ident(definition.table())?
    ));
    for (i, scope) in query.filters().enumerate() {
        builder.push(if i == 0 { " WHERE " } else { " AND " });
        push_translation_exists(&mut builder, definition, scope)?;
    }
    Ok(builder)
}

/// Selects the translations of one entity, restricted by an eager-load scope.
pub fn build_load_translations_query(
    definition: &TranslatableDefinition,
    parent_key: &Value,
    scope: Option<&TranslationScope>,
) -> Result<QueryBuilder<'static, Postgres>, Box<dyn Error + Send + Sync>> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT to_jsonb({TRANSLATION_ALIAS}) AS {ROW_COLUMN} FROM {} AS {TRANSLATION_ALIAS} WHERE {TRANSLATION_ALIAS}.{}::text = ",
        quote_ident(definition.translations_table())?,
        quote_ident(definition.foreign_key())?
    ));
    builder.push_bind(text_value(parent_key));
    if let Some(scope) = scope.filter(|s| s.is_eager_load()) {
        push_scope_conditions(&mut builder, definition, scope)?;
    }
    Ok(builder)
}

/// Pushes `EXISTS (SELECT 1 FROM <translations> AS t WHERE t.<fk> = p.<key> ...)`.
pub fn push_translation_exists(
    builder: &mut QueryBuilder<'static, Postgres>,
    definition: &TranslatableDefinition,
    scope: &TranslationScope,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    builder.push(format!(
        "EXISTS (SELECT 1 FROM {} AS {TRANSLATION_ALIAS} WHERE {TRANSLATION_ALIAS}.{} = {PARENT_ALIAS}.{}",
        quote_ident(definition.translations_table())?,
        quote_ident(definition.foreign_key())?,
        quote_ident(definition.key_name())?
    ));
    push_scope_conditions(builder, definition, scope)?;
    builder.push(")");
    Ok(())
}

fn push_scope_conditions(
    builder: &mut QueryBuilder<'static, Postgres>,
    definition: &TranslatableDefinition,
    scope: &TranslationScope,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let locale_column = format!("{TRANSLATION_ALIAS}.{}", quote_ident(definition.locale_key())?);
    match scope {
        TranslationScope::WithTranslation { locales } => {
            builder.push(format!(" AND {locale_column} = ANY("));
            builder.push_bind(locales.iter().map(|l| l.to_string()).collect::<Vec<String>>());
            builder.push(")");
        }
        TranslationScope::WhereTranslation { key, value, locale } => {
            builder.push(format!(" AND {TRANSLATION_ALIAS}.{}::text = ", quote_ident(key)?));
            builder.push_bind(text_value(value));
            if let Some(locale) = locale {
                builder.push(format!(" AND {locale_column} = "));
                builder.push_bind(locale.to_string());
            }
        }
        TranslationScope::WhereTranslationLike {
            key,
            pattern,
            locale,
        } => {
            builder.push(format!(" AND {TRANSLATION_ALIAS}.{}::text LIKE ", quote_ident(key)?));
            builder.push_bind(pattern.clone());
            if let Some(locale) = locale {
                builder.push(format!(" AND {locale_column}::text LIKE "));
                builder.push_bind(locale.clone());
            }
        }
        TranslationScope::TranslatedIn { locale, key } => {
            builder.push(format!(" AND {locale_column} = "));
            builder.push_bind(locale.to_string());
            if let Some(key) = key {
                builder.push(format!(" AND {TRANSLATION_ALIAS}.{}::text <> ", quote_ident(key)?));
                builder.push_bind(UNTRANSLATED_PLACEHOLDER.to_string());
            }
        }
        TranslationScope::Translated => {}
    }
    Ok(())
}
