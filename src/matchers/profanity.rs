// Profanity counting by lemma

use crate::annotation::{tag, Annotator, TaggingError, TokenSequence};

use super::lexicon::ProfanityLexicon;

/// Number of tokens whose lemma is in the profanity lexicon; repeats each count
pub fn profanity_count_in(tokens: &TokenSequence) -> usize {
    let lexicon = ProfanityLexicon::shared();
    tokens.iter().filter(|token| lexicon.contains(&token.lemma)).count()
}

/// Tag `sentence` and count profane lemmas
pub fn profanity_count<A: Annotator + ?Sized>(sentence: &str, annotator: &A) -> Result<usize, TaggingError> {
    let tokens = tag(annotator, sentence)?;
    Ok(profanity_count_in(&tokens))
}
