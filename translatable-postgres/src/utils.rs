use serde_json::{Map, Value};
use sqlx::{postgres::PgRow, Row};
use std::error::Error;
pub use translatable_db::utils::text_value;
use translatable_db::utils::is_identifier;

/// Column every query in this crate selects the whole row into, as `jsonb`.
pub const ROW_COLUMN: &str = "row";

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

impl TryFromRow<PgRow> for Map<String, Value> {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let value: Value = row.try_get(ROW_COLUMN)?;
        match value {
            Value::Object(map) => Ok(map),
            other => Err(format!("Expected a JSON object in column '{ROW_COLUMN}', got {other}").into()),
        }
    }
}

/// Double-quotes a plain identifier; anything else is rejected.
pub fn quote_ident(name: &str) -> Result<String, Box<dyn Error + Send + Sync>> {
    if !is_identifier(name) {
        return Err(format!("Invalid column or table name: '{name}'").into());
    }
    Ok(format!("\"{name}\""))
}
