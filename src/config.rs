use anyhow::{bail, Result};
use std::time::Duration;

/// Maximum input length accepted by `TranslationRequest`, in characters.
pub const DEFAULT_MAX_TEXT_CHARS: usize = 5000;

/// Timeout for the remote translation call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 8;

pub const MYMEMORY_API_URL: &str = "https://api.mymemory.translated.net/get";
pub const LIBRETRANSLATE_API_URL: &str = "https://libretranslate.com/translate";

/// Remote translation service flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteProvider {
    /// `GET ?q=..&langpair=src|tgt`, free and keyless
    MyMemory,
    /// `POST {q, source, target, format}` JSON
    LibreTranslate,
}

impl RemoteProvider {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "mymemory" => Ok(RemoteProvider::MyMemory),
            "libretranslate" => Ok(RemoteProvider::LibreTranslate),
            other => bail!(
                "Unknown TRANSLATE_PROVIDER '{}' (expected 'mymemory' or 'libretranslate')",
                other
            ),
        }
    }

    pub fn default_url(&self) -> &'static str {
        match self {
            RemoteProvider::MyMemory => MYMEMORY_API_URL,
            RemoteProvider::LibreTranslate => LIBRETRANSLATE_API_URL,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Remote service
    pub provider: RemoteProvider,
    pub api_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,

    // Request limits
    pub max_text_chars: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let provider = match std::env::var("TRANSLATE_PROVIDER") {
            Ok(value) => RemoteProvider::parse(&value)?,
            Err(_) => RemoteProvider::MyMemory,
        };

        Ok(Self {
            provider,
            api_url: std::env::var("TRANSLATE_API_URL")
                .unwrap_or_else(|_| provider.default_url().to_string()),
            api_key: std::env::var("TRANSLATE_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            timeout: Duration::from_secs(
                std::env::var("TRANSLATE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            max_text_chars: std::env::var("TRANSLATE_MAX_CHARS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_TEXT_CHARS),
        })
    }

    /// Configuration for a given provider and endpoint with default limits.
    pub fn for_provider(provider: RemoteProvider, api_url: &str) -> Self {
        Self {
            provider,
            api_url: api_url.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::for_provider(RemoteProvider::MyMemory, MYMEMORY_API_URL)
    }
}
