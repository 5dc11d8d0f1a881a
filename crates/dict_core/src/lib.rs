//! Harvester core: pure domain types and job arithmetic, no IO.
mod job;
mod query;
mod result;

pub use job::{JobSpec, JobSpecError, DEFAULT_JOB_SIZE};
pub use query::{definition_query_url, SEARCH_ENDPOINT};
pub use result::{DefinitionResult, ResultMap};
