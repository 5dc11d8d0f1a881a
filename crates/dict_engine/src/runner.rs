use std::time::Duration;

use async_trait::async_trait;
use dict_core::{definition_query_url, DefinitionResult, JobSpec};
use harvest_logging::{harvest_info, harvest_warn};
use thiserror::Error;

use crate::decode::decode_page;
use crate::extract::DefinitionExtractor;
use crate::fetch::PageFetcher;
use crate::persist::PersistError;
use crate::store::ResultStore;
use crate::types::WordFailure;

/// Default courtesy delay between requests.
pub const DEFAULT_PACING_DELAY: Duration = Duration::from_secs(2);

/// Waits before each outbound request.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self);
}

/// Production pacing: a fixed delay so the remote's abuse defenses stay
/// quiet.
pub struct FixedDelayPacer {
    delay: Duration,
}

impl FixedDelayPacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for FixedDelayPacer {
    fn default() -> Self {
        Self::new(DEFAULT_PACING_DELAY)
    }
}

#[async_trait]
impl Pacer for FixedDelayPacer {
    async fn pause(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

/// Pacing for tests: no waiting.
pub struct NoDelayPacer;

#[async_trait]
impl Pacer for NoDelayPacer {
    async fn pause(&self) {}
}

/// One word the job gave up on, with the reason preserved.
#[derive(Debug)]
pub struct SkippedWord {
    pub index: usize,
    pub word: String,
    pub failure: WordFailure,
}

/// What one job run did.
#[derive(Debug)]
pub struct JobSummary {
    pub job_number: u32,
    pub first_index: usize,
    pub words_in_job: usize,
    pub recorded: usize,
    pub skipped: Vec<SkippedWord>,
}

#[derive(Debug, Error)]
pub enum JobError {
    #[error("cannot persist results: {0}")]
    Persist(#[from] PersistError),
}

/// Drives one job: paces, fetches, decodes, extracts, and persists word by
/// word, strictly in sequence. Per-word failures are logged and skipped;
/// only a persistence failure aborts the run.
pub struct JobRunner {
    fetcher: Box<dyn PageFetcher>,
    extractor: Box<dyn DefinitionExtractor>,
    pacer: Box<dyn Pacer>,
}

impl JobRunner {
    pub fn new(
        fetcher: Box<dyn PageFetcher>,
        extractor: Box<dyn DefinitionExtractor>,
        pacer: Box<dyn Pacer>,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            pacer,
        }
    }

    pub async fn run(
        &self,
        spec: JobSpec,
        words: &[String],
        store: &mut ResultStore,
    ) -> Result<JobSummary, JobError> {
        let range = spec.word_range(words.len());
        let mut summary = JobSummary {
            job_number: spec.number(),
            first_index: range.start,
            words_in_job: range.len(),
            recorded: 0,
            skipped: Vec::new(),
        };

        harvest_info!(
            "job {}: words {}..{} of {}",
            spec.number(),
            range.start,
            range.end,
            words.len()
        );

        for (offset, word) in words[range.clone()].iter().enumerate() {
            let index = range.start + offset;

            // Unconditional, applied before every request including the first.
            self.pacer.pause().await;

            harvest_info!(
                "word {}/{}: looking up {word:?}",
                offset + 1,
                summary.words_in_job
            );

            match self.harvest_word(word).await {
                Ok(html) => {
                    store.record(DefinitionResult::new(index, word.clone(), html))?;
                    summary.recorded += 1;
                }
                Err(failure) => {
                    harvest_warn!("skipping {word:?}: {failure}");
                    summary.skipped.push(SkippedWord {
                        index,
                        word: word.clone(),
                        failure,
                    });
                }
            }
        }

        harvest_info!(
            "job {} complete: {} recorded, {} skipped",
            summary.job_number,
            summary.recorded,
            summary.skipped.len()
        );
        Ok(summary)
    }

    /// Fetch, decode, and extract one word. An empty extraction is a valid
    /// outcome and is recorded as an empty entry.
    async fn harvest_word(&self, word: &str) -> Result<String, WordFailure> {
        let url = definition_query_url(word);
        let output = self.fetcher.fetch(&url).await.map_err(WordFailure::Fetch)?;
        let page = decode_page(&output.bytes, output.metadata.content_type.as_deref())
            .map_err(WordFailure::Decode)?;
        Ok(self.extractor.extract(&page.html).html)
    }
}
