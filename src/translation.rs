use crate::config::{Config, DEFAULT_MAX_TEXT_CHARS};
use crate::error::TranslateError;
use crate::fallback::{FallbackKind, FallbackResolver};
use crate::i18n::{LanguageConfig, LanguageRegistry};
use crate::remote::{RemoteResolve, RemoteResolver};
use tracing::{debug, warn};

/// Where a translated string came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationOrigin {
    /// Source and target were the same language
    Unchanged,
    /// Returned by the remote service
    Remote,
    /// Produced locally after the remote service was unavailable
    Fallback(FallbackKind),
}

/// A resolved translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub origin: TranslationOrigin,
}

impl Translation {
    pub fn new(text: String, origin: TranslationOrigin) -> Self {
        Self { text, origin }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, TranslationOrigin::Fallback(_))
    }
}

/// A validated `(text, source, target)` triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    text: String,
    source: String,
    target: String,
}

impl TranslationRequest {
    /// Validate with the default length limit.
    pub fn new(text: &str, source: &str, target: &str) -> Result<Self, TranslateError> {
        Self::with_limit(text, source, target, DEFAULT_MAX_TEXT_CHARS)
    }

    /// Validate a request.
    ///
    /// Rejects whitespace-only text, text longer than `max_chars` characters
    /// and blank language codes. Codes are not checked against the registry:
    /// unknown codes still resolve, with the code standing in for the name.
    pub fn with_limit(
        text: &str,
        source: &str,
        target: &str,
        max_chars: usize,
    ) -> Result<Self, TranslateError> {
        if text.trim().is_empty() {
            return Err(TranslateError::InvalidRequest("text is empty".to_string()));
        }

        let length = text.chars().count();
        if length > max_chars {
            return Err(TranslateError::InvalidRequest(format!(
                "text is {} characters, limit is {}",
                length, max_chars
            )));
        }

        if source.trim().is_empty() || target.trim().is_empty() {
            return Err(TranslateError::InvalidRequest(
                "language codes must not be empty".to_string(),
            ));
        }

        Ok(Self {
            text: text.to_string(),
            source: source.to_string(),
            target: target.to_string(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn is_same_language(&self) -> bool {
        self.source == self.target
    }
}

/// Translation entry point: remote first, local fallback on failure.
///
/// Holds no per-request state; a single instance can serve concurrent calls.
pub struct Translator<R = RemoteResolver> {
    remote: R,
    fallback: FallbackResolver,
    max_text_chars: usize,
}

impl Translator<RemoteResolver> {
    /// Build a translator backed by the configured HTTP provider.
    pub fn from_config(config: &Config) -> Result<Self, TranslateError> {
        let remote = RemoteResolver::new(config)?;
        Ok(Self::new(remote, FallbackResolver::new()).with_max_text_chars(config.max_text_chars))
    }
}

impl<R: RemoteResolve> Translator<R> {
    pub fn new(remote: R, fallback: FallbackResolver) -> Self {
        Self {
            remote,
            fallback,
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
        }
    }

    /// Length limit applied by `translate_checked`.
    pub fn with_max_text_chars(mut self, max_text_chars: usize) -> Self {
        self.max_text_chars = max_text_chars;
        self
    }

    /// Translate text, always producing a string.
    ///
    /// Callers are expected to skip empty input themselves.
    pub async fn translate(&self, text: &str, source: &str, target: &str) -> String {
        self.resolve_parts(text, source, target).await.text
    }

    /// Validate the request first, then translate.
    ///
    /// The only errors are `InvalidRequest`; remote failures are still
    /// absorbed by the fallback.
    pub async fn translate_checked(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError> {
        let request = TranslationRequest::with_limit(text, source, target, self.max_text_chars)?;
        Ok(self.resolve(&request).await.text)
    }

    /// Resolve a validated request, reporting where the result came from.
    pub async fn resolve(&self, request: &TranslationRequest) -> Translation {
        self.resolve_parts(request.text(), request.source(), request.target())
            .await
    }

    async fn resolve_parts(&self, text: &str, source: &str, target: &str) -> Translation {
        if source == target {
            debug!("Source and target are both {}, returning input", source);
            return Translation::new(text.to_string(), TranslationOrigin::Unchanged);
        }

        match self.remote.resolve(text, source, target).await {
            Ok(translated) => Translation::new(translated, TranslationOrigin::Remote),
            Err(e) => {
                warn!(
                    "Remote translation {} -> {} failed ({}), using local dictionary",
                    source, target, e
                );
                self.fallback.resolve(text, target)
            }
        }
    }

    /// Supported languages in display order.
    pub fn list_languages(&self) -> &'static [LanguageConfig] {
        LanguageRegistry::get().list_languages()
    }

    /// Display name for a code, or the code itself when unknown.
    pub fn language_name<'a>(&self, code: &'a str) -> &'a str {
        LanguageRegistry::get().name_of(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Remote stub that records how often it is called.
    #[derive(Clone)]
    struct StubRemote {
        response: Result<String, TranslateError>,
        calls: Arc<AtomicUsize>,
    }

    impl StubRemote {
        fn ok(text: &str) -> Self {
            Self {
                response: Ok(text.to_string()),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn unavailable() -> Self {
            Self {
                response: Err(TranslateError::RemoteUnavailable("stubbed outage".to_string())),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RemoteResolve for StubRemote {
        async fn resolve(
            &self,
            _text: &str,
            _source: &str,
            _target: &str,
        ) -> Result<String, TranslateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.clone()
        }
    }

    /// Fallback strategy that counts invocations and never matches.
    struct CountingStrategy(Arc<AtomicUsize>);

    impl crate::fallback::FallbackStrategy for CountingStrategy {
        fn kind(&self) -> FallbackKind {
            FallbackKind::Exact
        }

        fn attempt(&self, _query: &crate::fallback::FallbackQuery<'_>) -> Option<String> {
            self.0.fetch_add(1, Ordering::SeqCst);
            None
        }
    }

    fn translator(remote: StubRemote) -> Translator<StubRemote> {
        Translator::new(remote, FallbackResolver::new())
    }

    // ==================== Same-Language Tests ====================

    #[tokio::test]
    async fn test_same_language_returns_input_without_remote_call() {
        let remote = StubRemote::ok("should not be used");
        let translator = translator(remote.clone());

        let result = translator.translate("Hello there", "en", "en").await;
        assert_eq!(result, "Hello there");
        assert_eq!(remote.calls(), 0);
    }

    #[tokio::test]
    async fn test_same_language_origin_is_unchanged() {
        let translator = translator(StubRemote::unavailable());
        let request = TranslationRequest::new("hola", "es", "es").expect("valid");

        let result = translator.resolve(&request).await;
        assert_eq!(result.origin, TranslationOrigin::Unchanged);
    }

    // ==================== Remote Precedence Tests ====================

    #[tokio::test]
    async fn test_remote_success_is_returned_verbatim() {
        let remote = StubRemote::ok("  ¡Hola!  ");
        let translator = translator(remote.clone());

        let result = translator.translate("hello", "en", "es").await;
        assert_eq!(result, "  ¡Hola!  ");
        assert_eq!(remote.calls(), 1);
    }

    #[tokio::test]
    async fn test_remote_success_never_consults_fallback() {
        let fallback_calls = Arc::new(AtomicUsize::new(0));
        let fallback = FallbackResolver::with_strategies(
            crate::i18n::PhraseDictionary::get(),
            vec![Box::new(CountingStrategy(fallback_calls.clone()))],
        );
        let translator = Translator::new(StubRemote::ok("hola"), fallback);

        let result = translator.translate("hello", "en", "es").await;
        assert_eq!(result, "hola");
        assert_eq!(fallback_calls.load(Ordering::SeqCst), 0);
    }

    // ==================== Fallback Tests ====================

    #[tokio::test]
    async fn test_remote_failure_matches_independent_fallback() {
        let remote = StubRemote::unavailable();
        let translator = translator(remote.clone());

        for (text, target) in [
            ("hello", "es"),
            ("well hello there", "es"),
            ("yes water", "de"),
            ("supercalifragilistic", "de"),
        ] {
            let result = translator.translate(text, "en", target).await;
            let expected = FallbackResolver::new().resolve(text, target).text;
            assert_eq!(result, expected, "text: {}", text);
        }
        assert_eq!(remote.calls(), 4);
    }

    #[tokio::test]
    async fn test_remote_failure_consults_fallback_once() {
        let fallback_calls = Arc::new(AtomicUsize::new(0));
        let fallback = FallbackResolver::with_strategies(
            crate::i18n::PhraseDictionary::get(),
            vec![Box::new(CountingStrategy(fallback_calls.clone()))],
        );
        let translator = Translator::new(StubRemote::unavailable(), fallback);

        let result = translator.translate("hello", "en", "de").await;
        assert_eq!(result, "[German translation of: \"hello\"]");
        assert_eq!(fallback_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fallback_origin_is_reported() {
        let translator = translator(StubRemote::unavailable());
        let request = TranslationRequest::new("well hello there", "en", "es").expect("valid");

        let result = translator.resolve(&request).await;
        assert_eq!(result.text, "hola (contains: hello)");
        assert_eq!(
            result.origin,
            TranslationOrigin::Fallback(FallbackKind::Substring)
        );
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_request_rejects_whitespace_text() {
        let result = TranslationRequest::new("  \n\t ", "en", "es");
        assert!(matches!(result, Err(TranslateError::InvalidRequest(_))));
    }

    #[test]
    fn test_request_rejects_oversized_text() {
        let text = "a".repeat(5001);
        let result = TranslationRequest::new(&text, "en", "es");
        assert!(matches!(result, Err(TranslateError::InvalidRequest(_))));
    }

    #[test]
    fn test_request_accepts_limit_in_characters_not_bytes() {
        // 5000 two-byte characters
        let text = "é".repeat(5000);
        assert!(TranslationRequest::new(&text, "en", "fr").is_ok());
    }

    #[test]
    fn test_request_rejects_blank_language() {
        let result = TranslationRequest::new("hello", "", "es");
        assert!(matches!(result, Err(TranslateError::InvalidRequest(_))));
    }

    #[test]
    fn test_request_allows_unknown_codes() {
        let request = TranslationRequest::new("hello", "en", "xx").expect("valid");
        assert_eq!(request.target(), "xx");
        assert!(!request.is_same_language());
    }

    #[tokio::test]
    async fn test_translate_checked_rejects_before_remote_call() {
        let remote = StubRemote::ok("unused");
        let translator = translator(remote.clone());

        let result = translator.translate_checked("   ", "en", "es").await;
        assert!(matches!(result, Err(TranslateError::InvalidRequest(_))));
        assert_eq!(remote.calls(), 0);
    }

    #[tokio::test]
    async fn test_translate_checked_uses_configured_limit() {
        let translator = translator(StubRemote::ok("ok")).with_max_text_chars(3);

        assert!(translator.translate_checked("abcd", "en", "es").await.is_err());
        assert_eq!(
            translator
                .translate_checked("abc", "en", "es")
                .await
                .expect("within limit"),
            "ok"
        );
    }

    // ==================== Language Helper Tests ====================

    #[test]
    fn test_language_helpers() {
        let translator = translator(StubRemote::unavailable());
        assert_eq!(translator.list_languages().len(), 15);
        assert_eq!(translator.language_name("pl"), "Polish");
        assert_eq!(translator.language_name("xx"), "xx");
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_same_language_returns_text(text in ".{1,64}", lang in "[a-z]{2}") {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .build()
                .expect("runtime");
            let translator = translator(StubRemote::ok("remote"));

            let result = runtime.block_on(translator.translate(&text, &lang, &lang));
            prop_assert_eq!(result, text);
        }
    }
}
