//! Language registry: Single source of truth for all supported languages.
//!
//! The registry is a fixed, ordered table built once on first access with
//! `OnceLock`. Order is display order and carries no other meaning.

use std::sync::OnceLock;

/// A supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "es", "fr")
    pub code: &'static str,

    /// Display name of the language (e.g., "English", "Chinese (Simplified)")
    pub name: &'static str,
}

/// Global language registry singleton.
///
/// Immutable after initialization, so it can be shared freely between
/// concurrent translation requests.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// All supported languages in display order.
    pub fn list_languages(&self) -> &[LanguageConfig] {
        &self.languages
    }

    /// Get a language by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the code is not registered
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Display name for a language code.
    ///
    /// Unknown codes are returned unchanged, so this never fails.
    pub fn name_of<'a>(&self, code: &'a str) -> &'a str {
        match self.get_by_code(code) {
            Some(config) => config.name,
            None => code,
        }
    }

    /// Check if a language code is registered.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// Default language table.
fn default_languages() -> Vec<LanguageConfig> {
    [
        ("en", "English"),
        ("es", "Spanish"),
        ("fr", "French"),
        ("de", "German"),
        ("it", "Italian"),
        ("pt", "Portuguese"),
        ("ru", "Russian"),
        ("ja", "Japanese"),
        ("ko", "Korean"),
        ("zh", "Chinese (Simplified)"),
        ("ar", "Arabic"),
        ("hi", "Hindi"),
        ("nl", "Dutch"),
        ("pl", "Polish"),
        ("tr", "Turkish"),
    ]
    .into_iter()
    .map(|(code, name)| LanguageConfig { code, name })
    .collect()
}
