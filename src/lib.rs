//! Translation resolution with graceful degradation.
//!
//! A [`Translator`] asks a remote translation service first. When the service
//! cannot be reached or answers with anything but a well-formed success, the
//! request is resolved locally from a small phrase dictionary: exact phrase,
//! then partial phrase, then word-by-word, then a placeholder naming the
//! target language. Callers therefore always get a string back.
//!
//! ```rust,ignore
//! use quick_translate::{Config, Translator};
//!
//! let translator = Translator::from_config(&Config::from_env()?)?;
//! let text = translator.translate("good morning", "en", "de").await;
//! ```

pub mod config;
pub mod error;
pub mod fallback;
pub mod i18n;
pub mod remote;
pub mod translation;

pub use config::{Config, RemoteProvider};
pub use error::{DictionaryError, TranslateError};
pub use fallback::{FallbackKind, FallbackResolver, FallbackStrategy};
pub use remote::{RemoteResolve, RemoteResolver};
pub use translation::{Translation, TranslationOrigin, TranslationRequest, Translator};
