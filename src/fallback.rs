//! Local dictionary-based fallback used when the remote service is unavailable.
//!
//! Resolution runs an ordered list of strategies and returns the first hit.
//! If none applies, a placeholder naming the target language is returned, so
//! the resolver as a whole never fails.

use crate::i18n::{canonicalize, LanguageRegistry, PhraseDictionary};
use crate::translation::{Translation, TranslationOrigin};
use tracing::debug;

/// Which fallback step produced a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallbackKind {
    Exact,
    Substring,
    WordByWord,
    Placeholder,
}

impl FallbackKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackKind::Exact => "exact",
            FallbackKind::Substring => "substring",
            FallbackKind::WordByWord => "word_by_word",
            FallbackKind::Placeholder => "placeholder",
        }
    }
}

impl std::fmt::Display for FallbackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input handed to each strategy.
#[derive(Debug)]
pub struct FallbackQuery<'a> {
    /// Text as the caller supplied it
    pub text: &'a str,
    /// Trimmed, lowercased text
    pub canonical: String,
    /// Target language code
    pub target: &'a str,
    pub dictionary: &'a PhraseDictionary,
}

impl<'a> FallbackQuery<'a> {
    pub fn new(text: &'a str, target: &'a str, dictionary: &'a PhraseDictionary) -> Self {
        Self {
            text,
            canonical: canonicalize(text),
            target,
            dictionary,
        }
    }

    /// Single-word translation for each whitespace-separated canonical word.
    fn word_translations(&self) -> Vec<(&str, Option<&'static str>)> {
        self.canonical
            .split_whitespace()
            .map(|word| {
                let translated = self
                    .dictionary
                    .lookup(word)
                    .and_then(|entry| entry.translation(self.target));
                (word, translated)
            })
            .collect()
    }
}

/// One step of the fallback policy.
pub trait FallbackStrategy: Send + Sync {
    fn kind(&self) -> FallbackKind;

    /// Return a translation, or `None` to let the next strategy try.
    fn attempt(&self, query: &FallbackQuery<'_>) -> Option<String>;
}

/// Whole input equals a dictionary key.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatch;

impl FallbackStrategy for ExactMatch {
    fn kind(&self) -> FallbackKind {
        FallbackKind::Exact
    }

    fn attempt(&self, query: &FallbackQuery<'_>) -> Option<String> {
        query
            .dictionary
            .lookup(&query.canonical)
            .and_then(|entry| entry.translation(query.target))
            .map(str::to_string)
    }
}

/// First entry (in table order) whose key occurs inside the input.
///
/// This is not a best-match search: a short key early in the table wins over
/// a longer, more specific key later on. The result is annotated with the
/// matched key so users can tell it is partial.
///
/// Steps aside when every word of the input has its own entry, leaving the
/// input to `WordByWord`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatch;

impl FallbackStrategy for SubstringMatch {
    fn kind(&self) -> FallbackKind {
        FallbackKind::Substring
    }

    fn attempt(&self, query: &FallbackQuery<'_>) -> Option<String> {
        let words = query.word_translations();
        if !words.is_empty() && words.iter().all(|(_, translated)| translated.is_some()) {
            return None;
        }

        query.dictionary.entries().find_map(|entry| {
            if !query.canonical.contains(entry.key) {
                return None;
            }
            entry
                .translation(query.target)
                .map(|translated| format!("{} (contains: {})", translated, entry.key))
        })
    }
}

/// Replace each word that has a single-word entry; keep the rest.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordByWord;

impl FallbackStrategy for WordByWord {
    fn kind(&self) -> FallbackKind {
        FallbackKind::WordByWord
    }

    fn attempt(&self, query: &FallbackQuery<'_>) -> Option<String> {
        let words = query.word_translations();
        if !words.iter().any(|(_, translated)| translated.is_some()) {
            return None;
        }

        Some(
            words
                .iter()
                .map(|&(word, translated)| translated.unwrap_or(word))
                .collect::<Vec<_>>()
                .join(" "),
        )
    }
}

/// Diagnostic string used when nothing in the dictionary applies.
pub fn placeholder(text: &str, target: &str) -> String {
    format!(
        "[{} translation of: \"{}\"]",
        LanguageRegistry::get().name_of(target),
        text
    )
}

/// Ordered fallback policy over a phrase dictionary.
pub struct FallbackResolver {
    dictionary: &'static PhraseDictionary,
    strategies: Vec<Box<dyn FallbackStrategy>>,
}

impl FallbackResolver {
    /// Built-in dictionary with the default order: exact, substring, word-by-word.
    pub fn new() -> Self {
        Self::with_dictionary(PhraseDictionary::get())
    }

    pub fn with_dictionary(dictionary: &'static PhraseDictionary) -> Self {
        Self::with_strategies(
            dictionary,
            vec![
                Box::new(ExactMatch),
                Box::new(SubstringMatch),
                Box::new(WordByWord),
            ],
        )
    }

    /// Custom strategy order. The placeholder always runs last.
    pub fn with_strategies(
        dictionary: &'static PhraseDictionary,
        strategies: Vec<Box<dyn FallbackStrategy>>,
    ) -> Self {
        Self {
            dictionary,
            strategies,
        }
    }

    pub fn strategy_kinds(&self) -> Vec<FallbackKind> {
        self.strategies.iter().map(|s| s.kind()).collect()
    }

    /// Resolve `text` into `target` locally. Never fails.
    pub fn resolve(&self, text: &str, target: &str) -> Translation {
        let query = FallbackQuery::new(text, target, self.dictionary);

        for strategy in &self.strategies {
            if let Some(translated) = strategy.attempt(&query) {
                debug!("Fallback {} match for target {}", strategy.kind(), target);
                return Translation::new(
                    translated,
                    TranslationOrigin::Fallback(strategy.kind()),
                );
            }
        }

        debug!("No dictionary match for target {}, using placeholder", target);
        Translation::new(
            placeholder(text, target),
            TranslationOrigin::Fallback(FallbackKind::Placeholder),
        )
    }
}

impl Default for FallbackResolver {
    fn default() -> Self {
        Self::new()
    }
}
