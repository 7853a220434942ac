use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use dialog_signals::reader::{ReaderConfig, SentenceReader};
use dialog_signals::{
    process_sentences_parallel, write_features_jsonl, write_run_stats, BatchConfig, FeatureExtractor,
    PretaggedAnnotator, RunStats,
};

#[derive(Parser, Debug)]
#[command(name = "dialog-signals")]
#[command(about = "Extract character introductions, direct address and conversation signals from tagged dialogue")]
#[command(version)]
struct Args {
    /// JSON Lines file of pre-tagged sentences
    tagged: PathBuf,

    /// Plain-text file with one sentence per line (defaults to the sentences in the tagged file)
    #[arg(long)]
    sentences: Option<PathBuf>,

    /// Output file for per-sentence signals (JSON Lines)
    #[arg(long, default_value = "signals.jsonl")]
    output: PathBuf,

    /// Stats output file path
    #[arg(long, default_value = "run_stats.json")]
    stats_out: PathBuf,

    /// Number of concurrent workers (defaults to the number of CPUs)
    #[arg(long)]
    workers: Option<usize>,

    /// Abort on first error
    #[arg(long)]
    fail_fast: bool,

    /// Suppress console progress bar
    #[arg(long)]
    no_progress: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();

    info!("Starting dialog-signals");
    info!(?args, "Parsed CLI arguments");

    if !args.tagged.is_file() {
        anyhow::bail!("Tagged sentence file does not exist: {}", args.tagged.display());
    }
    if let Some(ref sentences_path) = args.sentences {
        if !sentences_path.is_file() {
            anyhow::bail!("Sentence file does not exist: {}", sentences_path.display());
        }
    }

    let annotator = PretaggedAnnotator::load(&args.tagged).await?;

    let sentences: Vec<String> = match args.sentences {
        Some(ref sentences_path) => {
            let reader = SentenceReader::new(ReaderConfig {
                fail_fast: args.fail_fast,
                ..Default::default()
            });
            let (sentences, stats) = reader.read_sentences(sentences_path).await?;
            if let Some(ref error) = stats.read_error {
                info!("Read error for {}: {}", stats.file_path, error);
            }
            sentences
        }
        None => annotator.sentences().map(str::to_string).collect(),
    };

    let mut batch_config = BatchConfig {
        fail_fast: args.fail_fast,
        ..Default::default()
    };
    if let Some(workers) = args.workers {
        batch_config.workers = workers;
    }

    let progress = if args.no_progress {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(sentences.len() as u64);
        bar.set_style(ProgressStyle::with_template(
            "{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} sentences",
        )?);
        bar
    };

    let start_time = Instant::now();
    let extractor = Arc::new(FeatureExtractor::new(annotator));
    let outcomes = process_sentences_parallel(extractor, sentences, &batch_config, |_| progress.inc(1)).await?;
    progress.finish_and_clear();

    let stats = RunStats::from_outcomes(&outcomes, start_time.elapsed());
    let written = write_features_jsonl(&args.output, &outcomes).await?;
    write_run_stats(&args.stats_out, &stats).await?;

    println!("dialog-signals v{} - analysis complete", env!("CARGO_PKG_VERSION"));
    println!("  Sentences analysed: {}", stats.sentences_analysed);
    if stats.sentences_failed > 0 {
        println!("  Sentences failed: {}", stats.sentences_failed);
    }
    println!(
        "  Self-introductions: {}, other introductions: {}, direct address: {}",
        stats.self_intros, stats.other_intros, stats.direct_addresses
    );
    println!(
        "  Conversation starters: {}, enders: {}, profanity: {}",
        stats.conversation_starters, stats.conversation_enders, stats.profanity_total
    );
    println!("  Wrote {} records to {}", written, args.output.display());

    info!(?stats, "Run completed");
    Ok(())
}
