// Greedy accumulation of consecutive tokens into a multi-word name

use crate::annotation::{AnnotatedToken, TokenSequence};

/// Token texts gathered by [`accumulate`], borrowed from the sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameSpan<'a> {
    parts: Vec<&'a str>,
}

impl<'a> NameSpan<'a> {
    pub fn parts(&self) -> &[&'a str] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Space-joined rendering
    pub fn render(&self) -> String {
        self.parts.join(" ")
    }

    /// An empty span is "no match", never an empty name
    pub fn into_name(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.render())
        }
    }
}

/// Starting at `start`, take tokens while `keep` holds.
///
/// Stops at the first rejected token or at the end of the sequence, whichever
/// comes first. Returns the span and the offset just past the last accepted token
/// (equal to `start` when nothing was accepted).
pub fn accumulate<'a, P>(tokens: &'a TokenSequence, start: usize, mut keep: P) -> (NameSpan<'a>, usize)
where
    P: FnMut(&AnnotatedToken) -> bool,
{
    let mut span = NameSpan::default();
    let mut offset = start;

    while let Some(token) = tokens.get(offset) {
        if !keep(token) {
            break;
        }
        span.parts.push(token.text.as_str());
        offset += 1;
    }

    (span, offset)
}

/// [`accumulate`] with the proper-noun predicate every name matcher uses
pub fn accumulate_proper_nouns(tokens: &TokenSequence, start: usize) -> (NameSpan<'_>, usize) {
    accumulate(tokens, start, AnnotatedToken::is_propn)
}
