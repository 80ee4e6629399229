//! Static language and phrase tables.
//!
//! Everything here is built once on first access and never mutated, so it can
//! be read from any number of concurrent translation requests.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported languages and display names
//! - `language`: Validated `Language` handle for callers that reject unknown codes
//! - `dictionary`: Hand-curated phrase table used by the local fallback
//!
//! # Example
//!
//! ```rust,ignore
//! use quick_translate::i18n::{canonicalize, LanguageRegistry, PhraseDictionary};
//!
//! let name = LanguageRegistry::get().name_of("de"); // "German"
//! let entry = PhraseDictionary::get().lookup(&canonicalize(" Hello "));
//! ```

mod dictionary;
mod language;
mod registry;

pub use dictionary::{canonicalize, PhraseDictionary, PhraseEntry};
pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
