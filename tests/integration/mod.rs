// Integration test utilities: a hand-tagged dialogue corpus and test annotators
// Tags follow the universal coarse inventory plus Penn Treebank fine tags.

#![allow(dead_code)]

use dialog_signals::{AnnotatedToken, Annotator, CoarsePos, PretaggedAnnotator, TaggedRecord, TaggingError};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;
use tempfile::TempDir;

/// Token from (text, lemma, coarse pos, fine tag)
pub fn tok(text: &str, lemma: &str, pos: &str, tag: &str) -> AnnotatedToken {
    let coarse: CoarsePos = pos.parse().unwrap();
    AnnotatedToken::new(text, lemma, coarse, tag)
}

pub fn record(sentence: &str, tokens: Vec<AnnotatedToken>) -> TaggedRecord {
    TaggedRecord {
        sentence: sentence.to_string(),
        tokens,
    }
}

fn punct(text: &str) -> AnnotatedToken {
    let tag = if text == "," { "," } else { "." };
    tok(text, text, "PUNCT", tag)
}

/// Hand-tagged sentences used across the integration tests
pub fn tagged_corpus() -> Vec<TaggedRecord> {
    vec![
        record("I'm John.", vec![
            tok("I", "I", "PRON", "PRP"),
            tok("'m", "be", "AUX", "VBP"),
            tok("John", "John", "PROPN", "NNP"),
            punct("."),
        ]),
        record("I'm John Smith talking.", vec![
            tok("I", "I", "PRON", "PRP"),
            tok("'m", "be", "AUX", "VBP"),
            tok("John", "John", "PROPN", "NNP"),
            tok("Smith", "Smith", "PROPN", "NNP"),
            tok("talking", "talk", "VERB", "VBG"),
            punct("."),
        ]),
        record("I'm Wilmington's horse.", vec![
            tok("I", "I", "PRON", "PRP"),
            tok("'m", "be", "AUX", "VBP"),
            tok("Wilmington", "Wilmington", "PROPN", "NNP"),
            tok("'s", "'s", "PART", "POS"),
            tok("horse", "horse", "NOUN", "NN"),
            punct("."),
        ]),
        record("My name is Alice.", vec![
            tok("My", "my", "PRON", "PRP$"),
            tok("name", "name", "NOUN", "NN"),
            tok("is", "be", "AUX", "VBZ"),
            tok("Alice", "Alice", "PROPN", "NNP"),
            punct("."),
        ]),
        record("Alice calls me Bob.", vec![
            tok("Alice", "Alice", "PROPN", "NNP"),
            tok("calls", "call", "VERB", "VBZ"),
            tok("me", "I", "PRON", "PRP"),
            tok("Bob", "Bob", "PROPN", "NNP"),
            punct("."),
        ]),
        record("My name is Alice and I'm Bob.", vec![
            tok("My", "my", "PRON", "PRP$"),
            tok("name", "name", "NOUN", "NN"),
            tok("is", "be", "AUX", "VBZ"),
            tok("Alice", "Alice", "PROPN", "NNP"),
            tok("and", "and", "CCONJ", "CC"),
            tok("I", "I", "PRON", "PRP"),
            tok("'m", "be", "AUX", "VBP"),
            tok("Bob", "Bob", "PROPN", "NNP"),
            punct("."),
        ]),
        record("This is Marcus.", vec![
            tok("This", "this", "PRON", "DT"),
            tok("is", "be", "AUX", "VBZ"),
            tok("Marcus", "Marcus", "PROPN", "NNP"),
            punct("."),
        ]),
        record("John, are you there?", vec![
            tok("John", "John", "PROPN", "NNP"),
            punct(","),
            tok("are", "be", "AUX", "VBP"),
            tok("you", "you", "PRON", "PRP"),
            tok("there", "there", "ADV", "RB"),
            punct("?"),
        ]),
        record("Are you there, John?", vec![
            tok("Are", "be", "AUX", "VBP"),
            tok("you", "you", "PRON", "PRP"),
            tok("there", "there", "ADV", "RB"),
            punct(","),
            tok("John", "John", "PROPN", "NNP"),
            punct("?"),
        ]),
        record("Well, John, are you there?", vec![
            tok("Well", "well", "INTJ", "UH"),
            punct(","),
            tok("John", "John", "PROPN", "NNP"),
            punct(","),
            tok("are", "be", "AUX", "VBP"),
            tok("you", "you", "PRON", "PRP"),
            tok("there", "there", "ADV", "RB"),
            punct("?"),
        ]),
        record("John, Mary, are you there?", vec![
            tok("John", "John", "PROPN", "NNP"),
            punct(","),
            tok("Mary", "Mary", "PROPN", "NNP"),
            punct(","),
            tok("are", "be", "AUX", "VBP"),
            tok("you", "you", "PRON", "PRP"),
            tok("there", "there", "ADV", "RB"),
            punct("?"),
        ]),
        record("Hi! How are you?", vec![
            tok("Hi", "hi", "INTJ", "UH"),
            punct("!"),
            tok("How", "how", "SCONJ", "WRB"),
            tok("are", "be", "AUX", "VBP"),
            tok("you", "you", "PRON", "PRP"),
            punct("?"),
        ]),
        record("Goodbye, friend.", vec![
            tok("Goodbye", "goodbye", "INTJ", "UH"),
            punct(","),
            tok("friend", "friend", "NOUN", "NN"),
            punct("."),
        ]),
        record("What the fuck, you fucking idiot!", vec![
            tok("What", "what", "PRON", "WP"),
            tok("the", "the", "DET", "DT"),
            tok("fuck", "fuck", "NOUN", "NN"),
            punct(","),
            tok("you", "you", "PRON", "PRP"),
            tok("fucking", "fucking", "ADV", "RB"),
            tok("idiot", "idiot", "NOUN", "NN"),
            punct("!"),
        ]),
        record("The weather is nice today.", vec![
            tok("The", "the", "DET", "DT"),
            tok("weather", "weather", "NOUN", "NN"),
            tok("is", "be", "AUX", "VBZ"),
            tok("nice", "nice", "ADJ", "JJ"),
            tok("today", "today", "NOUN", "NN"),
            punct("."),
        ]),
        record("I", vec![tok("I", "I", "PRON", "PRP")]),
        record("I'm", vec![tok("I", "I", "PRON", "PRP"), tok("'m", "be", "AUX", "VBP")]),
    ]
}

static SHARED_ANNOTATOR: OnceLock<PretaggedAnnotator> = OnceLock::new();

/// Single shared fixture annotator over [`tagged_corpus`]
pub fn fixture_annotator() -> &'static PretaggedAnnotator {
    SHARED_ANNOTATOR.get_or_init(|| PretaggedAnnotator::from_records(tagged_corpus()))
}

/// Annotator that counts how often it is called
pub struct CountingAnnotator<A> {
    inner: A,
    calls: AtomicUsize,
}

impl<A> CountingAnnotator<A> {
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<A: Annotator> Annotator for CountingAnnotator<A> {
    fn annotate(&self, sentence: &str) -> Result<Vec<AnnotatedToken>, TaggingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.annotate(sentence)
    }
}

/// Annotator that rejects every sentence
pub struct FailingAnnotator;

impl Annotator for FailingAnnotator {
    fn annotate(&self, sentence: &str) -> Result<Vec<AnnotatedToken>, TaggingError> {
        Err(TaggingError::Provider(format!("cannot tag {sentence:?}")))
    }
}

/// Temporary directory holding input files for CLI-style tests
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self { temp_dir, root_path }
    }

    /// Write records as a JSON Lines tagged file
    pub fn create_tagged_file<P: AsRef<Path>>(&self, relative_path: P, records: &[TaggedRecord]) -> PathBuf {
        let content: String = records
            .iter()
            .map(|record| serde_json::to_string(record).expect("Failed to serialize record") + "\n")
            .collect();
        self.create_file(relative_path, &content)
    }

    pub fn create_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);
        std::fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }
}
