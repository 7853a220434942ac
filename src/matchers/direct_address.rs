// Direct address (vocative) detection: "John, ...", "..., John?", "..., John, ..."
//
// Candidates are collected start, end, then mid-sentence left to right.
// The LAST candidate wins, unlike the introduction matchers.

use tracing::debug;

use crate::annotation::{tag, Annotator, TaggingError, TokenSequence};

/// Proper noun opening the sentence, followed by a comma
pub fn address_at_start(tokens: &TokenSequence) -> Option<&str> {
    match tokens.as_slice() {
        [name, comma, ..] if name.is_propn() && comma.text == "," => Some(name.text.as_str()),
        _ => None,
    }
}

/// Comma, proper noun, closing punctuation at the very end
pub fn address_at_end(tokens: &TokenSequence) -> Option<&str> {
    match tokens.as_slice() {
        [.., comma, name, last] if comma.text == "," && name.is_propn() && last.is_punct() => {
            Some(name.text.as_str())
        }
        _ => None,
    }
}

/// Proper noun set off by commas on both sides, anchored at `offset`
pub fn address_mid_at(tokens: &TokenSequence, offset: usize) -> Option<&str> {
    let [open, name, close, ..] = tokens.window(offset)? else {
        return None;
    };
    if open.text == "," && name.is_propn() && close.text == "," {
        Some(name.text.as_str())
    } else {
        None
    }
}

/// All vocative candidates in collection order
pub fn direct_address_candidates(tokens: &TokenSequence) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    names.extend(address_at_start(tokens));
    names.extend(address_at_end(tokens));
    names.extend((0..tokens.len()).filter_map(|offset| address_mid_at(tokens, offset)));

    if names.len() > 1 {
        debug!(candidates = ?names, "Multiple direct-address candidates, keeping the last");
    }
    names
}

/// Last vocative candidate in an already tagged sentence
pub fn direct_address_in(tokens: &TokenSequence) -> Option<String> {
    direct_address_candidates(tokens).pop().map(str::to_string)
}

/// Tag `sentence` and return the addressed name, if any
pub fn direct_address<A: Annotator + ?Sized>(sentence: &str, annotator: &A) -> Result<Option<String>, TaggingError> {
    let tokens = tag(annotator, sentence)?;
    Ok(direct_address_in(&tokens))
}
