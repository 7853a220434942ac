// Conversation boundary detection by literal phrase containment

use serde::{Deserialize, Serialize};
use std::fmt;

use super::lexicon::{ENDER_PHRASES, STARTER_PHRASES};

/// Whether a sentence opens or closes a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationBoundary {
    Starter,
    Ender,
}

impl fmt::Display for ConversationBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversationBoundary::Starter => f.write_str("starter"),
            ConversationBoundary::Ender => f.write_str("ender"),
        }
    }
}

/// Classify `sentence` against the starter list, then the ender list.
///
/// Matching is case-insensitive substring containment on the raw sentence;
/// the starter list is consulted first, so a sentence containing phrases from
/// both lists is a `Starter`.
pub fn conversation_boundary(sentence: &str) -> Option<ConversationBoundary> {
    let lowered = sentence.to_lowercase();

    if STARTER_PHRASES.iter().any(|phrase| lowered.contains(phrase)) {
        Some(ConversationBoundary::Starter)
    } else if ENDER_PHRASES.iter().any(|phrase| lowered.contains(phrase)) {
        Some(ConversationBoundary::Ender)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starters() {
        for sentence in ["Hi! How are you?", "HI.", "So, what can I do for you?", "Oh hi!"] {
            assert_eq!(
                conversation_boundary(sentence),
                Some(ConversationBoundary::Starter),
                "{sentence:?} should be a starter"
            );
        }
    }

    #[test]
    fn test_enders() {
        for sentence in ["Goodbye, friend.", "Bye.", "See you later, alligator", "see ya", "Okay, see you."] {
            assert_eq!(
                conversation_boundary(sentence),
                Some(ConversationBoundary::Ender),
                "{sentence:?} should be an ender"
            );
        }
    }

    #[test]
    fn test_starter_list_wins() {
        assert_eq!(conversation_boundary("Hi. Goodbye."), Some(ConversationBoundary::Starter));
    }

    #[test]
    fn test_punctuation_is_part_of_the_phrase() {
        // "hi" without "." or "!" and "bye" without "," or "." do not count
        assert_eq!(conversation_boundary("Hi there"), None);
        assert_eq!(conversation_boundary("Bye bye"), None);
        assert_eq!(conversation_boundary("How are you doing?"), None);
        assert_eq!(conversation_boundary(""), None);
    }

    #[test]
    fn test_substring_match_is_literal() {
        // "hi." inside a longer word still counts; the lists are substrings, not tokens
        assert_eq!(conversation_boundary("Take the sushi."), Some(ConversationBoundary::Starter));
    }

    #[test]
    fn test_serde_form() {
        assert_eq!(serde_json::to_string(&ConversationBoundary::Starter).unwrap(), "\"starter\"");
        assert_eq!(ConversationBoundary::Ender.to_string(), "ender");
    }
}
