use thiserror::Error;

/// Errors produced while resolving a translation.
///
/// Only `InvalidRequest` and `UnknownLanguage` ever reach callers of the
/// orchestrator; `RemoteUnavailable` is always absorbed by the fallback path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("Remote translation unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Invalid translation request: {0}")]
    InvalidRequest(String),

    #[error("Unknown language code: '{0}'")]
    UnknownLanguage(String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

impl From<reqwest::Error> for TranslateError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            TranslateError::RemoteUnavailable(format!("request timed out: {}", error))
        } else {
            TranslateError::RemoteUnavailable(error.to_string())
        }
    }
}

/// Errors raised when building a phrase dictionary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    #[error("Phrase '{key}' references unregistered language '{code}'")]
    UnknownLanguage { key: String, code: String },

    #[error("Duplicate phrase key: '{0}'")]
    DuplicateKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_unavailable_display() {
        let error = TranslateError::RemoteUnavailable("status 503".to_string());
        assert_eq!(
            error.to_string(),
            "Remote translation unavailable: status 503"
        );
    }

    #[test]
    fn test_invalid_request_display() {
        let error = TranslateError::InvalidRequest("text is empty".to_string());
        assert!(error.to_string().contains("text is empty"));
    }

    #[test]
    fn test_unknown_language_display() {
        let error = TranslateError::UnknownLanguage("xx".to_string());
        assert_eq!(error.to_string(), "Unknown language code: 'xx'");
    }

    #[test]
    fn test_dictionary_error_display() {
        let error = DictionaryError::UnknownLanguage {
            key: "hello".to_string(),
            code: "xx".to_string(),
        };
        assert!(error.to_string().contains("hello"));
        assert!(error.to_string().contains("xx"));
    }
}
