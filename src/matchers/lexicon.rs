// Fixed lexicons shared by the lexical scanners.
// Read-only for the life of the process; there is no mutation path.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Phrases that open a conversation, matched as lower-case substrings
pub const STARTER_PHRASES: &[&str] = &["how are you?", "hi.", "hi!", "what can i do for you?"];

/// Phrases that close a conversation, matched as lower-case substrings
pub const ENDER_PHRASES: &[&str] = &[
    "goodbye.",
    "goodbye,",
    "bye,",
    "bye.",
    "see you.",
    "see you,",
    "see you later",
    "see ya",
];

/// Profane lemmas, lower-case
pub const PROFANITY_LEMMAS: &[&str] = &[
    "fuck", "fucking", "fuckin", "fucked", "shit", "shitty", "bullshit", "ass", "dumbass", "bitch",
    "asshole", "tit", "cunt", "goddamn", "damn", "dammit", "cock", "cocksucker", "dick",
];

static SHARED_PROFANITY: OnceLock<ProfanityLexicon> = OnceLock::new();

/// Set lookup over [`PROFANITY_LEMMAS`]
#[derive(Debug)]
pub struct ProfanityLexicon {
    lemmas: HashSet<&'static str>,
}

impl ProfanityLexicon {
    pub fn new() -> Self {
        Self {
            lemmas: PROFANITY_LEMMAS.iter().copied().collect(),
        }
    }

    /// Process-wide instance, built on first use
    pub fn shared() -> &'static ProfanityLexicon {
        SHARED_PROFANITY.get_or_init(ProfanityLexicon::new)
    }

    /// Case-insensitive membership test on a lemma
    pub fn contains(&self, lemma: &str) -> bool {
        if self.lemmas.contains(lemma) {
            return true;
        }
        self.lemmas.contains(lemma.to_lowercase().as_str())
    }

    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }
}

impl Default for ProfanityLexicon {
    fn default() -> Self {
        Self::new()
    }
}
