pub mod annotation;
pub mod matchers;
pub mod features;
pub mod reader;
pub mod parallel_processing;

// Re-export main types for convenient access
pub use annotation::{
    tag, AnnotatedToken, Annotator, CoarsePos, PretaggedAnnotator, TaggedRecord, TaggingError,
    TokenSequence,
};

// Re-export the matcher entry points
pub use matchers::{
    conversation_boundary, direct_address, other_intro, profanity_count, self_intro,
    ConversationBoundary,
};

pub use features::{FeatureExtractor, SentenceFeatures};

// Re-export batch processing types and functions for the CLI and benchmarks
pub use parallel_processing::{
    BatchConfig, RunStats, SentenceOutcome,
    process_sentences_parallel, process_sentences_stream, write_features_jsonl, write_run_stats
};
