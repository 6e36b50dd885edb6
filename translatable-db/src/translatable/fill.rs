use serde_json::{Map, Value};
use translatable_api::{TranslatableError, TranslatableResult};

use super::Translatable;
use crate::models::locale_context::LocaleContext;
use crate::models::record::{Record, TranslationRecord};

impl<P: Record, T: TranslationRecord> Translatable<P, T> {
    /// Mass-assigns attributes.
    ///
    /// A key naming a configured locale carries a map of translated
    /// attributes for that locale, e.g. `{"fr": {"name": "La France"}}`. Each
    /// pair is written when the config marks translations always fillable or
    /// the entity reports the attribute fillable; otherwise a totally guarded
    /// entity fails with a mass-assignment error naming the locale, and any
    /// other entity drops the pair. Remaining keys go to the entity's `fill`.
    pub fn fill(
        &mut self,
        ctx: &LocaleContext,
        attributes: Map<String, Value>,
    ) -> TranslatableResult<&mut Self> {
        let config = ctx.config();
        let totally_guarded = self.entity.is_totally_guarded();
        let mut remaining = Map::new();

        for (key, values) in attributes {
            let Some(locale) = config.find_locale(&key)?.cloned() else {
                remaining.insert(key, values);
                continue;
            };
            let Value::Object(values) = values else {
                return Err(TranslatableError::MassAssignment(format!(
                    "{key}: expected a map of translated attributes"
                )));
            };

            for (attribute, value) in values {
                if config.always_fillable || self.entity.is_fillable(&attribute) {
                    self.get_translation_or_new(&locale)
                        .set_attribute(&attribute, value);
                } else if totally_guarded {
                    return Err(TranslatableError::MassAssignment(key));
                }
            }
        }

        self.entity.fill(remaining)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LocaleConfig, LocaleContext, RecordModel};
    use crate::test_utils::{context, country_definition, locale, test_config};
    use serde_json::json;
    use std::sync::Arc;

    fn attrs(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    fn new_country(entity: RecordModel) -> Translatable<RecordModel, RecordModel> {
        Translatable::new(entity, country_definition(false))
    }

    #[test]
    fn test_fill_splits_locales_from_base_attributes() {
        let ctx = context("en");
        let mut country = new_country(RecordModel::new("country"));

        country
            .fill(
                &ctx,
                attrs(json!({
                    "code": "FR",
                    "fr": {"name": "La France", "capital": "Paris"},
                    "en": {"name": "France"}
                })),
            )
            .unwrap();

        assert_eq!(country.entity().attribute("code"), Some(&json!("FR")));
        assert_eq!(country.entity().attribute("fr"), None);
        assert_eq!(country.translations().len(), 2);
        assert_eq!(country.attribute(&ctx, "name"), Some(json!("France")));
        assert_eq!(
            country.attribute(&ctx.with_locale(locale("fr")), "capital"),
            Some(json!("Paris"))
        );
    }

    #[test]
    fn test_fill_drops_unfillable_in_permissive_mode() {
        let ctx = context("en");
        let mut country = new_country(RecordModel::new("country").with_fillable(["name"]));

        country
            .fill(&ctx, attrs(json!({"fr": {"name": "La France", "capital": "Paris"}})))
            .unwrap();

        let fr = &country.translations()[0];
        assert_eq!(fr.attribute("name"), Some(&json!("La France")));
        assert_eq!(fr.attribute("capital"), None);
    }

    #[test]
    fn test_fill_totally_guarded_names_locale() {
        let ctx = context("en");
        let mut country = new_country(RecordModel::new("country").with_guarded(["*"]));

        let result = country.fill(&ctx, attrs(json!({"de": {"name": "Frankreich"}})));
        assert!(matches!(result, Err(TranslatableError::MassAssignment(key)) if key == "de"));
    }

    #[test]
    fn test_always_fillable_bypasses_guard() {
        let config = test_config().with_always_fillable(true);
        let ctx = LocaleContext::new(Arc::new(config), locale("en"));
        let mut country = new_country(RecordModel::new("country").with_guarded(["*"]));

        country
            .fill(&ctx, attrs(json!({"de": {"name": "Frankreich"}})))
            .unwrap();
        assert_eq!(
            country.translations()[0].attribute("name"),
            Some(&json!("Frankreich"))
        );
    }

    #[test]
    fn test_fill_without_locales_is_a_configuration_error() {
        let ctx = LocaleContext::new(Arc::new(LocaleConfig::default()), locale("en"));
        let mut country = new_country(RecordModel::new("country"));

        let result = country.fill(&ctx, attrs(json!({"code": "FR"})));
        assert!(matches!(result, Err(TranslatableError::LocalesNotDefined(_))));
    }

    #[test]
    fn test_fill_locale_with_scalar_is_rejected() {
        let ctx = context("en");
        let mut country = new_country(RecordModel::new("country"));

        let result = country.fill(&ctx, attrs(json!({"fr": "La France"})));
        assert!(matches!(result, Err(TranslatableError::MassAssignment(_))));
    }

    #[test]
    fn test_fill_reuses_existing_translation() {
        let ctx = context("fr");
        let mut country = new_country(RecordModel::new("country"));
        country.set_attribute(&ctx, "name", json!("France"));

        country
            .fill(&ctx, attrs(json!({"fr": {"capital": "Paris"}})))
            .unwrap();
        assert_eq!(country.translations().len(), 1);
        assert_eq!(country.attribute(&ctx, "name"), Some(json!("France")));
        assert_eq!(country.attribute(&ctx, "capital"), Some(json!("Paris")));
    }
}
