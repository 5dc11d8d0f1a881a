//! Harvester engine: the fetch, decode, extract, and persist IO pipeline.
mod decode;
mod extract;
mod fetch;
mod persist;
mod runner;
mod store;
mod types;
mod words;

pub use decode::{decode_page, DecodeError, DecodedPage};
pub use extract::{
    DefinitionExtractor, ExtractedDefinition, MarkedListExtractor, DEFINITION_MARKER_CLASS,
};
pub use fetch::{FetchSettings, PageFetcher, ReqwestPageFetcher, USER_AGENT};
pub use persist::{ensure_output_dir, PersistError, SnapshotWriter};
pub use runner::{
    FixedDelayPacer, JobError, JobRunner, JobSummary, NoDelayPacer, Pacer, SkippedWord,
    DEFAULT_PACING_DELAY,
};
pub use store::{job_output_filename, ResultStore};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput, WordFailure};
pub use words::{load_word_list, WordListError};
