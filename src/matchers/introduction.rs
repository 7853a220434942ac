// Self-introduction ("I'm X", "My name is X", "... calls me X") and
// other-introduction ("This is X") matchers.
//
// Every offset of the sentence is tried; lookahead past the end means "no match
// here" and scanning moves on. The first name collected wins.

use tracing::debug;

use super::span::accumulate_proper_nouns;
use crate::annotation::{tag, Annotator, TaggingError, TokenSequence};

/// Fixed-shape pattern anchored at one offset
type AnchoredPattern = fn(&TokenSequence, usize) -> Option<String>;

/// Tried in this order at each offset
const SELF_INTRO_PATTERNS: &[AnchoredPattern] = &[i_am_at, my_name_is_at, calls_me_at];

const OTHER_INTRO_PATTERNS: &[AnchoredPattern] = &[this_is_at];

/// "I am X" / "I'm X"
///
/// Suppressed entirely when a possessive marker follows the first name token,
/// so "I'm Wilmington's horse" is not an introduction.
pub fn i_am_at(tokens: &TokenSequence, offset: usize) -> Option<String> {
    let [anchor, verb, name, rest @ ..] = tokens.window(offset)? else {
        return None;
    };
    if anchor.text != "I" || !matches!(verb.text.as_str(), "'m" | "am") || !name.is_propn() {
        return None;
    }
    if rest.first().is_some_and(|next| next.is_possessive_marker()) {
        debug!(offset, name = %name.text, "Possessive follows name, suppressing self-introduction");
        return None;
    }
    accumulate_proper_nouns(tokens, offset + 2).0.into_name()
}

/// "My name is X"
pub fn my_name_is_at(tokens: &TokenSequence, offset: usize) -> Option<String> {
    let [anchor, noun, verb, name, ..] = tokens.window(offset)? else {
        return None;
    };
    if !matches!(anchor.text.as_str(), "My" | "my")
        || noun.text != "name"
        || verb.text != "is"
        || !name.is_propn()
    {
        return None;
    }
    accumulate_proper_nouns(tokens, offset + 3).0.into_name()
}

/// "calls me X"
pub fn calls_me_at(tokens: &TokenSequence, offset: usize) -> Option<String> {
    let [verb, object, name, ..] = tokens.window(offset)? else {
        return None;
    };
    if verb.text != "calls" || object.text != "me" || !name.is_propn() {
        return None;
    }
    accumulate_proper_nouns(tokens, offset + 2).0.into_name()
}

/// "This is X" / "this is X"
pub fn this_is_at(tokens: &TokenSequence, offset: usize) -> Option<String> {
    let [anchor, verb, name, ..] = tokens.window(offset)? else {
        return None;
    };
    if !matches!(anchor.text.as_str(), "This" | "this") || verb.text != "is" || !name.is_propn() {
        return None;
    }
    accumulate_proper_nouns(tokens, offset + 2).0.into_name()
}

/// Scan every offset with every pattern, in pattern order within an offset
fn scan(tokens: &TokenSequence, patterns: &[AnchoredPattern]) -> Vec<String> {
    let mut names = Vec::new();
    for offset in 0..tokens.len() {
        for pattern in patterns {
            if let Some(name) = pattern(tokens, offset) {
                debug!(offset, name = %name, "Introduction pattern matched");
                names.push(name);
            }
        }
    }
    names
}

/// All self-introduced names in the order found
pub fn self_intro_candidates(tokens: &TokenSequence) -> Vec<String> {
    scan(tokens, SELF_INTRO_PATTERNS)
}

/// First self-introduced name in an already tagged sentence
pub fn self_intro_in(tokens: &TokenSequence) -> Option<String> {
    self_intro_candidates(tokens).into_iter().next()
}

/// Tag `sentence` and return the first self-introduced name
pub fn self_intro<A: Annotator + ?Sized>(sentence: &str, annotator: &A) -> Result<Option<String>, TaggingError> {
    let tokens = tag(annotator, sentence)?;
    Ok(self_intro_in(&tokens))
}

/// All "This is X" names in the order found
pub fn other_intro_candidates(tokens: &TokenSequence) -> Vec<String> {
    scan(tokens, OTHER_INTRO_PATTERNS)
}

pub fn other_intro_in(tokens: &TokenSequence) -> Option<String> {
    other_intro_candidates(tokens).into_iter().next()
}

/// Tag `sentence` and return the first introduced third party
pub fn other_intro<A: Annotator + ?Sized>(sentence: &str, annotator: &A) -> Result<Option<String>, TaggingError> {
    let tokens = tag(annotator, sentence)?;
    Ok(other_intro_in(&tokens))
}
