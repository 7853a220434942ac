use anyhow::Result;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

/// Configuration for sentence file reading
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Whether to fail on the first read error or report it in stats
    pub fail_fast: bool,
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            buffer_size: 8192,
        }
    }
}

/// Statistics for one sentence file read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub lines_read: u64,
    pub sentences_read: u64,
    pub bytes_read: u64,
    pub duration_ms: u64,
    pub read_error: Option<String>,
}

impl ReadStats {
    fn new(path: &Path) -> Self {
        Self {
            file_path: path.display().to_string(),
            lines_read: 0,
            sentences_read: 0,
            bytes_read: 0,
            duration_ms: 0,
            read_error: None,
        }
    }
}

/// Reads plain-text files holding one sentence per line
pub struct SentenceReader {
    config: ReaderConfig,
}

impl SentenceReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read sentences with async buffered I/O.
    ///
    /// Lines are trimmed and blank lines skipped. Without `fail_fast`, an open or
    /// decoding failure is recorded in the stats and whatever was read so far is returned.
    pub async fn read_sentences<P: AsRef<Path>>(&self, file_path: P) -> Result<(Vec<String>, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();
        let mut stats = ReadStats::new(path);

        debug!("Starting async read of sentence file: {}", path.display());

        let file = match File::open(path).await {
            Ok(file) => file,
            Err(e) => {
                let error_msg = format!("Failed to open file {}: {}", path.display(), e);
                warn!("{}", error_msg);
                if self.config.fail_fast {
                    anyhow::bail!(error_msg);
                }
                stats.duration_ms = start_time.elapsed().as_millis() as u64;
                stats.read_error = Some(error_msg);
                return Ok((Vec::new(), stats));
            }
        };

        let reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut lines = reader.lines();
        let mut sentences = Vec::new();

        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    stats.bytes_read += line.len() as u64 + 1;
                    stats.lines_read += 1;
                    let sentence = line.trim();
                    if !sentence.is_empty() {
                        sentences.push(sentence.to_string());
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    let error_msg = format!(
                        "Decoding error in {} at line {}: {}",
                        path.display(),
                        stats.lines_read + 1,
                        e
                    );
                    warn!("{}", error_msg);
                    if self.config.fail_fast {
                        anyhow::bail!(error_msg);
                    }
                    stats.read_error = Some(error_msg);
                    break;
                }
            }
        }

        stats.sentences_read = sentences.len() as u64;
        stats.duration_ms = start_time.elapsed().as_millis() as u64;

        if stats.read_error.is_none() {
            info!(
                "Read {}: {} sentences from {} lines in {}ms",
                path.display(),
                stats.sentences_read,
                stats.lines_read,
                stats.duration_ms
            );
        }
        Ok((sentences, stats))
    }
}

/// Read a sentence file with the default configuration
pub async fn read_sentences_async<P: AsRef<Path>>(file_path: P) -> Result<Vec<String>> {
    let reader = SentenceReader::new(ReaderConfig::default());
    let (sentences, _stats) = reader.read_sentences(file_path).await?;
    Ok(sentences)
}
