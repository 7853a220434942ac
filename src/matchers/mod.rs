// Pattern matchers over one tagged sentence.
// Each matcher has a tagging entry point (sentence + annotator) and an `_in`
// form over an existing TokenSequence. Matchers never call each other.

pub mod boundary;
pub mod direct_address;
pub mod introduction;
pub mod lexicon;
pub mod profanity;
pub mod span;

pub use boundary::{conversation_boundary, ConversationBoundary};
pub use direct_address::{direct_address, direct_address_candidates, direct_address_in};
pub use introduction::{
    other_intro, other_intro_candidates, other_intro_in, self_intro, self_intro_candidates, self_intro_in,
};
pub use lexicon::ProfanityLexicon;
pub use profanity::{profanity_count, profanity_count_in};
pub use span::{accumulate, accumulate_proper_nouns, NameSpan};
