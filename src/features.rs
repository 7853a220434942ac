// Per-sentence composition of every matcher over a single tagging call

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::annotation::{tag, Annotator, TaggingError, TokenSequence};
use crate::matchers::{
    conversation_boundary, direct_address_in, other_intro_in, profanity_count_in, self_intro_in,
    ConversationBoundary,
};

/// Every signal extracted from one sentence
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SentenceFeatures {
    pub sentence: String,
    pub self_intro: Option<String>,
    pub other_intro: Option<String>,
    pub direct_address: Option<String>,
    pub boundary: Option<ConversationBoundary>,
    pub profanity: usize,
}

impl SentenceFeatures {
    /// Run all matchers over tokens already produced for `sentence`
    pub fn from_tokens(sentence: &str, tokens: &TokenSequence) -> Self {
        Self {
            sentence: sentence.to_string(),
            self_intro: self_intro_in(tokens),
            other_intro: other_intro_in(tokens),
            direct_address: direct_address_in(tokens),
            boundary: conversation_boundary(sentence),
            profanity: profanity_count_in(tokens),
        }
    }

    /// True if any matcher fired
    pub fn has_signal(&self) -> bool {
        self.self_intro.is_some()
            || self.other_intro.is_some()
            || self.direct_address.is_some()
            || self.boundary.is_some()
            || self.profanity > 0
    }
}

/// Tags each sentence once and shares the tokens across all matchers.
/// Outcomes are identical to calling each matcher on its own.
pub struct FeatureExtractor<A> {
    annotator: A,
}

impl<A: Annotator> FeatureExtractor<A> {
    pub fn new(annotator: A) -> Self {
        Self { annotator }
    }

    pub fn annotator(&self) -> &A {
        &self.annotator
    }

    pub fn analyze(&self, sentence: &str) -> Result<SentenceFeatures, TaggingError> {
        let tokens = tag(&self.annotator, sentence)?;
        let features = SentenceFeatures::from_tokens(sentence, &tokens);
        if features.has_signal() {
            debug!(?features, "Signals found");
        }
        Ok(features)
    }
}
