// Token stream adapter over an external part-of-speech tagger.
// The tagger itself is a black box; everything downstream sees a TokenSequence.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

pub mod pretagged;

pub use pretagged::{PretaggedAnnotator, TaggedRecord};

/// Failure raised by an annotation provider. Never retried; it surfaces to the caller unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaggingError {
    #[error("no annotation available for sentence: {0:?}")]
    UnknownSentence(String),

    #[error("annotation provider failed: {0}")]
    Provider(String),

    #[error("malformed tagged record at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },
}

/// Coarse-grained (universal) part-of-speech category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CoarsePos {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
    Space,
    /// Any label outside the universal inventory, kept verbatim
    Other(String),
}

impl CoarsePos {
    pub fn as_str(&self) -> &str {
        match self {
            CoarsePos::Adj => "ADJ",
            CoarsePos::Adp => "ADP",
            CoarsePos::Adv => "ADV",
            CoarsePos::Aux => "AUX",
            CoarsePos::Cconj => "CCONJ",
            CoarsePos::Det => "DET",
            CoarsePos::Intj => "INTJ",
            CoarsePos::Noun => "NOUN",
            CoarsePos::Num => "NUM",
            CoarsePos::Part => "PART",
            CoarsePos::Pron => "PRON",
            CoarsePos::Propn => "PROPN",
            CoarsePos::Punct => "PUNCT",
            CoarsePos::Sconj => "SCONJ",
            CoarsePos::Sym => "SYM",
            CoarsePos::Verb => "VERB",
            CoarsePos::X => "X",
            CoarsePos::Space => "SPACE",
            CoarsePos::Other(label) => label,
        }
    }
}

impl FromStr for CoarsePos {
    type Err = Infallible;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let pos = match label.to_ascii_uppercase().as_str() {
            "ADJ" => CoarsePos::Adj,
            "ADP" => CoarsePos::Adp,
            "ADV" => CoarsePos::Adv,
            "AUX" => CoarsePos::Aux,
            "CCONJ" | "CONJ" => CoarsePos::Cconj,
            "DET" => CoarsePos::Det,
            "INTJ" => CoarsePos::Intj,
            "NOUN" => CoarsePos::Noun,
            "NUM" => CoarsePos::Num,
            "PART" => CoarsePos::Part,
            "PRON" => CoarsePos::Pron,
            "PROPN" => CoarsePos::Propn,
            "PUNCT" => CoarsePos::Punct,
            "SCONJ" => CoarsePos::Sconj,
            "SYM" => CoarsePos::Sym,
            "VERB" => CoarsePos::Verb,
            "X" => CoarsePos::X,
            "SPACE" => CoarsePos::Space,
            _ => CoarsePos::Other(label.to_string()),
        };
        Ok(pos)
    }
}

impl From<String> for CoarsePos {
    fn from(label: String) -> Self {
        match label.parse() {
            Ok(pos) => pos,
            Err(never) => match never {},
        }
    }
}

impl From<CoarsePos> for String {
    fn from(pos: CoarsePos) -> Self {
        pos.as_str().to_string()
    }
}

impl fmt::Display for CoarsePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fine-grained tag the tagger uses for the possessive marker ('s)
pub const POSSESSIVE_TAG: &str = "POS";

/// One token as produced by the tagger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    pub text: String,
    pub lemma: String,
    #[serde(rename = "pos")]
    pub coarse_pos: CoarsePos,
    #[serde(rename = "tag")]
    pub fine_tag: String,
}

impl AnnotatedToken {
    pub fn new(
        text: impl Into<String>,
        lemma: impl Into<String>,
        coarse_pos: CoarsePos,
        fine_tag: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            coarse_pos,
            fine_tag: fine_tag.into(),
        }
    }

    pub fn is_propn(&self) -> bool {
        self.coarse_pos == CoarsePos::Propn
    }

    pub fn is_punct(&self) -> bool {
        self.coarse_pos == CoarsePos::Punct
    }

    pub fn is_possessive_marker(&self) -> bool {
        self.fine_tag == POSSESSIVE_TAG
    }
}

/// Tagged tokens of a single sentence; length is fixed once produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<AnnotatedToken>,
}

impl TokenSequence {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Bounds-checked access; lookahead past the end is `None`, never a panic
    pub fn get(&self, offset: usize) -> Option<&AnnotatedToken> {
        self.tokens.get(offset)
    }

    pub fn text_at(&self, offset: usize) -> Option<&str> {
        self.get(offset).map(|token| token.text.as_str())
    }

    pub fn as_slice(&self) -> &[AnnotatedToken] {
        &self.tokens
    }

    /// Tokens from `offset` to the end, or `None` if `offset` is past the end
    pub fn window(&self, offset: usize) -> Option<&[AnnotatedToken]> {
        self.tokens.get(offset..)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnnotatedToken> {
        self.tokens.iter()
    }
}

impl From<Vec<AnnotatedToken>> for TokenSequence {
    fn from(tokens: Vec<AnnotatedToken>) -> Self {
        Self { tokens }
    }
}

impl Index<usize> for TokenSequence {
    type Output = AnnotatedToken;

    fn index(&self, offset: usize) -> &Self::Output {
        &self.tokens[offset]
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a AnnotatedToken;
    type IntoIter = std::slice::Iter<'a, AnnotatedToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Handle to an external tagger. Implementations are treated as read-only and reentrant.
pub trait Annotator {
    fn annotate(&self, sentence: &str) -> Result<Vec<AnnotatedToken>, TaggingError>;
}

impl<A: Annotator + ?Sized> Annotator for &A {
    fn annotate(&self, sentence: &str) -> Result<Vec<AnnotatedToken>, TaggingError> {
        (**self).annotate(sentence)
    }
}

impl<A: Annotator + ?Sized> Annotator for Arc<A> {
    fn annotate(&self, sentence: &str) -> Result<Vec<AnnotatedToken>, TaggingError> {
        (**self).annotate(sentence)
    }
}

impl<A: Annotator + ?Sized> Annotator for Box<A> {
    fn annotate(&self, sentence: &str) -> Result<Vec<AnnotatedToken>, TaggingError> {
        (**self).annotate(sentence)
    }
}

/// Tag one sentence into a TokenSequence
pub fn tag<A: Annotator + ?Sized>(annotator: &A, sentence: &str) -> Result<TokenSequence, TaggingError> {
    let tokens = annotator.annotate(sentence)?;
    debug!(tokens = tokens.len(), "Tagged sentence");
    Ok(TokenSequence::from(tokens))
}
