//! Phrase dictionary: hand-curated phrase and word translations.
//!
//! Keys are lowercase canonical phrases. Entries keep insertion order so that
//! partial matching over the table is deterministic.

use crate::error::DictionaryError;
use crate::i18n::LanguageRegistry;
use std::collections::HashMap;
use std::sync::OnceLock;

/// A known phrase and its translations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseEntry {
    /// Lowercase canonical phrase (e.g., "good morning")
    pub key: &'static str,

    /// Translations keyed by language code, in declaration order
    pub translations: Vec<(&'static str, &'static str)>,
}

impl PhraseEntry {
    pub fn new(key: &'static str, translations: &[(&'static str, &'static str)]) -> Self {
        Self {
            key,
            translations: translations.to_vec(),
        }
    }

    /// Translation for a language code, if one is known.
    pub fn translation(&self, code: &str) -> Option<&'static str> {
        self.translations
            .iter()
            .find(|(lang, _)| *lang == code)
            .map(|(_, text)| *text)
    }

    /// Whether the key is a single word (no whitespace).
    pub fn is_single_word(&self) -> bool {
        !self.key.contains(char::is_whitespace)
    }
}

/// Immutable phrase table with exact-key lookup.
#[derive(Debug)]
pub struct PhraseDictionary {
    entries: Vec<PhraseEntry>,
    index: HashMap<&'static str, usize>,
}

/// Built-in dictionary instance (initialized lazily)
static DICTIONARY: OnceLock<PhraseDictionary> = OnceLock::new();

/// Lowercase and trim text for dictionary comparison.
pub fn canonicalize(text: &str) -> String {
    text.trim().to_lowercase()
}

impl PhraseDictionary {
    /// Build a dictionary, validating every language code against the registry.
    pub fn new(entries: Vec<PhraseEntry>) -> Result<Self, DictionaryError> {
        let registry = LanguageRegistry::get();
        let mut index = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            if let Some((code, _)) = entry
                .translations
                .iter()
                .find(|(code, _)| !registry.is_supported(code))
            {
                return Err(DictionaryError::UnknownLanguage {
                    key: entry.key.to_string(),
                    code: code.to_string(),
                });
            }

            if index.insert(entry.key, position).is_some() {
                return Err(DictionaryError::DuplicateKey(entry.key.to_string()));
            }
        }

        Ok(Self { entries, index })
    }

    /// Get the built-in dictionary.
    ///
    /// # Panics
    /// Panics on first access if the built-in table references an unregistered
    /// language or repeats a key. Both are covered by unit tests.
    pub fn get() -> &'static PhraseDictionary {
        DICTIONARY.get_or_init(|| {
            PhraseDictionary::new(default_entries())
                .expect("Built-in phrase table should be valid")
        })
    }

    /// Exact lookup by canonical key. Callers canonicalize first.
    pub fn lookup(&self, canonical_key: &str) -> Option<&PhraseEntry> {
        self.index
            .get(canonical_key)
            .map(|&position| &self.entries[position])
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &PhraseEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Built-in phrase table.
///
/// Order matters: partial matching takes the first entry whose key occurs in
/// the input.
fn default_entries() -> Vec<PhraseEntry> {
    vec![
        // Greetings
        PhraseEntry::new(
            "hello",
            &[
                ("es", "hola"),
                ("fr", "bonjour"),
                ("de", "hallo"),
                ("it", "ciao"),
                ("pt", "olá"),
                ("ru", "привет"),
                ("ja", "こんにちは"),
                ("ko", "안녕하세요"),
                ("zh", "你好"),
                ("ar", "مرحبا"),
                ("hi", "नमस्ते"),
            ],
        ),
        PhraseEntry::new(
            "hi",
            &[
                ("es", "hola"),
                ("fr", "salut"),
                ("de", "hallo"),
                ("it", "ciao"),
                ("pt", "oi"),
            ],
        ),
        PhraseEntry::new(
            "goodbye",
            &[
                ("es", "adiós"),
                ("fr", "au revoir"),
                ("de", "auf wiedersehen"),
                ("it", "ciao"),
                ("pt", "tchau"),
                ("ru", "до свидания"),
                ("ja", "さようなら"),
                ("ko", "안녕히 가세요"),
                ("zh", "再见"),
                ("ar", "وداعا"),
                ("hi", "अलविदा"),
            ],
        ),
        PhraseEntry::new(
            "good morning",
            &[
                ("es", "buenos días"),
                ("fr", "bonjour"),
                ("de", "guten morgen"),
                ("it", "buongiorno"),
                ("pt", "bom dia"),
            ],
        ),
        PhraseEntry::new(
            "good night",
            &[
                ("es", "buenas noches"),
                ("fr", "bonne nuit"),
                ("de", "gute nacht"),
                ("it", "buonanotte"),
                ("pt", "boa noite"),
            ],
        ),
        // Courtesy
        PhraseEntry::new(
            "thank you",
            &[
                ("es", "gracias"),
                ("fr", "merci"),
                ("de", "danke"),
                ("it", "grazie"),
                ("pt", "obrigado"),
                ("ru", "спасибо"),
                ("ja", "ありがとう"),
                ("ko", "감사합니다"),
                ("zh", "谢谢"),
                ("ar", "شكرا"),
                ("hi", "धन्यवाद"),
            ],
        ),
        PhraseEntry::new(
            "please",
            &[
                ("es", "por favor"),
                ("fr", "s'il vous plaît"),
                ("de", "bitte"),
                ("it", "per favore"),
                ("pt", "por favor"),
            ],
        ),
        PhraseEntry::new(
            "excuse me",
            &[
                ("es", "disculpe"),
                ("fr", "excusez-moi"),
                ("de", "entschuldigung"),
                ("it", "scusi"),
                ("pt", "com licença"),
            ],
        ),
        PhraseEntry::new(
            "sorry",
            &[
                ("es", "lo siento"),
                ("fr", "désolé"),
                ("de", "entschuldigung"),
                ("it", "mi dispiace"),
                ("pt", "desculpe"),
            ],
        ),
        // Questions
        PhraseEntry::new(
            "how are you",
            &[
                ("es", "¿cómo estás?"),
                ("fr", "comment allez-vous?"),
                ("de", "wie geht es dir?"),
                ("it", "come stai?"),
                ("pt", "como você está?"),
            ],
        ),
        PhraseEntry::new(
            "what is your name",
            &[
                ("es", "¿cuál es tu nombre?"),
                ("fr", "quel est votre nom?"),
                ("de", "wie heißt du?"),
                ("it", "come ti chiami?"),
                ("pt", "qual é o seu nome?"),
            ],
        ),
        PhraseEntry::new(
            "where are you from",
            &[
                ("es", "¿de dónde eres?"),
                ("fr", "d'où venez-vous?"),
                ("de", "woher kommst du?"),
                ("it", "di dove sei?"),
                ("pt", "de onde você é?"),
            ],
        ),
        // Common words
        PhraseEntry::new(
            "yes",
            &[
                ("es", "sí"),
                ("fr", "oui"),
                ("de", "ja"),
                ("it", "sì"),
                ("pt", "sim"),
            ],
        ),
        PhraseEntry::new(
            "no",
            &[
                ("es", "no"),
                ("fr", "non"),
                ("de", "nein"),
                ("it", "no"),
                ("pt", "não"),
            ],
        ),
        PhraseEntry::new(
            "water",
            &[
                ("es", "agua"),
                ("fr", "eau"),
                ("de", "wasser"),
                ("it", "acqua"),
                ("pt", "água"),
            ],
        ),
        PhraseEntry::new(
            "food",
            &[
                ("es", "comida"),
                ("fr", "nourriture"),
                ("de", "essen"),
                ("it", "cibo"),
                ("pt", "comida"),
            ],
        ),
        PhraseEntry::new(
            "love",
            &[
                ("es", "amor"),
                ("fr", "amour"),
                ("de", "liebe"),
                ("it", "amore"),
                ("pt", "amor"),
            ],
        ),
        PhraseEntry::new(
            "beautiful",
            &[
                ("es", "hermoso"),
                ("fr", "beau"),
                ("de", "schön"),
                ("it", "bello"),
                ("pt", "bonito"),
            ],
        ),
        // Sentences
        PhraseEntry::new(
            "i love you",
            &[
                ("es", "te amo"),
                ("fr", "je t'aime"),
                ("de", "ich liebe dich"),
                ("it", "ti amo"),
                ("pt", "eu te amo"),
            ],
        ),
        PhraseEntry::new(
            "i am learning",
            &[
                ("es", "estoy aprendiendo"),
                ("fr", "j'apprends"),
                ("de", "ich lerne"),
                ("it", "sto imparando"),
                ("pt", "estou aprendendo"),
            ],
        ),
        PhraseEntry::new(
            "have a good day",
            &[
                ("es", "que tengas un buen día"),
                ("fr", "passe une bonne journée"),
                ("de", "hab einen schönen tag"),
                ("it", "buona giornata"),
                ("pt", "tenha um bom dia"),
            ],
        ),
    ]
}
