use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use translatable_api::{TranslatableError, TranslatableResult};

use super::locale::Locale;

/// Environment variable naming the JSON file `LocaleConfig::from_env` reads.
pub const CONFIG_ENV_VAR: &str = "TRANSLATABLE_CONFIG";

pub const DEFAULT_LOCALE_KEY: &str = "locale";
pub const DEFAULT_TRANSLATION_SUFFIX: &str = "Translation";

/// # Documentation
/// Locale configuration shared by every translatable entity type.
///
/// ```json
/// {
///   "locales": ["en", "fr", "de"],
///   "fallback_locales": { "fr": ["en"], "de": ["en", "fr"] },
///   "use_fallback": false,
///   "always_fillable": false,
///   "locale_key": "locale",
///   "translation_suffix": "Translation"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Every supported locale identifier
    pub locales: Vec<Locale>,

    /// Ordered substitute locales per requested locale
    pub fallback_locales: HashMap<Locale, Vec<Locale>>,

    /// Default for the per-entity fallback flag
    pub use_fallback: bool,

    /// Translated attributes bypass the entity's fillable check on fill
    pub always_fillable: bool,

    /// Column holding the locale on translation records
    pub locale_key: String,

    /// Appended to the entity name to derive the translation model name
    pub translation_suffix: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            locales: Vec::new(),
            fallback_locales: HashMap::new(),
            use_fallback: false,
            always_fillable: false,
            locale_key: DEFAULT_LOCALE_KEY.to_string(),
            translation_suffix: DEFAULT_TRANSLATION_SUFFIX.to_string(),
        }
    }
}

impl LocaleConfig {
    pub fn new(locales: Vec<Locale>) -> Self {
        Self {
            locales,
            ..Self::default()
        }
    }

    pub fn with_fallback(mut self, locale: Locale, chain: Vec<Locale>) -> Self {
        self.fallback_locales.insert(locale, chain);
        self
    }

    pub fn with_use_fallback(mut self, use_fallback: bool) -> Self {
        self.use_fallback = use_fallback;
        self
    }

    pub fn with_always_fillable(mut self, always_fillable: bool) -> Self {
        self.always_fillable = always_fillable;
        self
    }

    pub fn from_json_str(json: &str) -> TranslatableResult<Self> {
        let config: LocaleConfig = serde_json::from_str(json)
            .map_err(|e| TranslatableError::Configuration(format!("Invalid locale configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> TranslatableResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            TranslatableError::Configuration(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&json)
    }

    /// Loads the file named by the `TRANSLATABLE_CONFIG` environment variable.
    pub fn from_env() -> TranslatableResult<Self> {
        let path = std::env::var(CONFIG_ENV_VAR).map_err(|_| {
            TranslatableError::Configuration(format!("{CONFIG_ENV_VAR} is not set"))
        })?;
        Self::from_file(path)
    }

    /// Fails fast on a configuration no entity could be resolved against.
    pub fn validate(&self) -> TranslatableResult<()> {
        self.locales()?;
        if self.locale_key.is_empty() {
            return Err(TranslatableError::Configuration(
                "locale_key must not be empty".to_string(),
            ));
        }
        for (locale, chain) in &self.fallback_locales {
            if let Some(unknown) = std::iter::once(locale)
                .chain(chain.iter())
                .find(|l| !self.locales.contains(l))
            {
                return Err(TranslatableError::Configuration(format!(
                    "Fallback locale '{unknown}' is not a configured locale"
                )));
            }
        }
        Ok(())
    }

    /// The configured locales; an empty list is a configuration error.
    pub fn locales(&self) -> TranslatableResult<&[Locale]> {
        if self.locales.is_empty() {
            return Err(TranslatableError::LocalesNotDefined(
                "Please make sure the locales configuration is defined".to_string(),
            ));
        }
        Ok(&self.locales)
    }

    /// Finds the configured locale whose identifier equals `key`.
    pub fn find_locale(&self, key: &str) -> TranslatableResult<Option<&Locale>> {
        Ok(self.locales()?.iter().find(|l| l.as_str() == key))
    }

    /// Ordered fallback locales for `locale`. A locale without a registered
    /// chain has no fallback.
    pub fn fallback_chain(&self, locale: &Locale) -> &[Locale] {
        self.fallback_locales
            .get(locale)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
