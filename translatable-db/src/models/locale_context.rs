use std::sync::Arc;

use super::locale::Locale;
use super::locale_config::LocaleConfig;

/// The active locale and the configuration it is resolved against.
///
/// Every resolver call takes one of these explicitly.
#[derive(Debug, Clone)]
pub struct LocaleContext {
    config: Arc<LocaleConfig>,
    locale: Locale,
}

impl LocaleContext {
    pub fn new(config: Arc<LocaleConfig>, locale: Locale) -> Self {
        Self { config, locale }
    }

    pub fn config(&self) -> &LocaleConfig {
        &self.config
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Same configuration, different active locale.
    pub fn with_locale(&self, locale: Locale) -> Self {
        Self {
            config: Arc::clone(&self.config),
            locale,
        }
    }

    /// Fallback chain of the active locale.
    pub fn fallback_chain(&self) -> &[Locale] {
        self.config.fallback_chain(&self.locale)
    }
}
