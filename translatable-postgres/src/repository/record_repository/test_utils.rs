#[cfg(test)]
pub mod test_utils {
    use serde_json::{json, Value};
    use std::error::Error;
    use std::sync::Arc;
    use translatable_db::{Locale, LocaleConfig, Record, RecordModel, Save, TranslatableDefinition};

    use crate::repository::record_repository::RecordRepositoryImpl;

    pub fn locale(s: &str) -> Locale {
        Locale::new(s).unwrap()
    }

    /// en, fr, de with fr → [en]
    pub fn test_config() -> LocaleConfig {
        LocaleConfig::new(vec![locale("en"), locale("fr"), locale("de")])
            .with_fallback(locale("fr"), vec![locale("en")])
            .with_use_fallback(true)
    }

    pub fn country_definition() -> Arc<TranslatableDefinition> {
        Arc::new(
            TranslatableDefinition::builder("Country")
                .base_fields(["code"])
                .translated_attributes(["name", "capital"])
                .build(&test_config())
                .unwrap(),
        )
    }

    /// A new, unsaved country.
    pub fn new_country(code: &str) -> RecordModel {
        let mut country = RecordModel::new("country").with_fillable(["code", "name", "capital"]);
        country.set_attribute("code", json!(code));
        country
    }

    pub async fn create_test_country(
        repo: &RecordRepositoryImpl,
        code: &str,
    ) -> Result<RecordModel, Box<dyn Error + Send + Sync>> {
        let mut country = new_country(code);
        repo.save(&mut country).await?;
        Ok(country)
    }

    pub async fn create_test_translation(
        repo: &RecordRepositoryImpl,
        country_key: &Value,
        locale: &str,
        name: &str,
    ) -> Result<RecordModel, Box<dyn Error + Send + Sync>> {
        let mut translation = RecordModel::new("country_translation");
        translation.set_attribute("country_id", country_key.clone());
        translation.set_attribute("locale", json!(locale));
        translation.set_attribute("name", json!(name));
        repo.save(&mut translation).await?;
        Ok(translation)
    }
}
