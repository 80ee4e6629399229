//! Language type: validated language handle.
//!
//! Raw language codes flow through the translation pipeline as `&str` so that
//! unknown codes still degrade gracefully. `Language` is for callers that want
//! to reject unregistered codes up front.

use crate::error::TranslateError;
use crate::i18n::{LanguageConfig, LanguageRegistry};

/// A language that has been validated against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "es")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };
    pub const SPANISH: Language = Language { code: "es" };
    pub const FRENCH: Language = Language { code: "fr" };
    pub const GERMAN: Language = Language { code: "de" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is registered
    /// * `Err(TranslateError::UnknownLanguage)` otherwise
    ///
    /// # Example
    /// ```ignore
    /// let german = Language::from_code("de")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Language, TranslateError> {
        LanguageRegistry::get()
            .get_by_code(code)
            .map(|config| Language { code: config.code })
            .ok_or_else(|| TranslateError::UnknownLanguage(code.to_string()))
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not registered. This cannot happen for values
    /// built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the display name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}

impl std::str::FromStr for Language {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}
