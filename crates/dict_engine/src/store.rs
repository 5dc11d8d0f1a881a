use std::path::{Path, PathBuf};

use dict_core::{DefinitionResult, ResultMap};

use crate::persist::{PersistError, SnapshotWriter};

/// Deterministic output filename for a job number. Distinct job numbers
/// write distinct files, so concurrent processes on different jobs cannot
/// collide.
pub fn job_output_filename(job_number: u32) -> String {
    format!("definitions_job_{job_number}.json")
}

/// Accumulates one job's results and mirrors every insertion to disk.
///
/// The whole map is rewritten after each [`ResultStore::record`], so the
/// file always holds a complete, parseable snapshot of everything recorded
/// so far; a process killed mid-job loses at most the in-flight word.
pub struct ResultStore {
    results: ResultMap,
    writer: SnapshotWriter,
    filename: String,
    path: PathBuf,
}

impl ResultStore {
    pub fn new(output_dir: PathBuf, job_number: u32) -> Self {
        let filename = job_output_filename(job_number);
        let path = output_dir.join(&filename);
        Self {
            results: ResultMap::new(),
            writer: SnapshotWriter::new(output_dir),
            filename,
            path,
        }
    }

    /// Inserts the result under its word, replacing any earlier entry for
    /// the same word, then persists the updated snapshot.
    pub fn record(&mut self, result: DefinitionResult) -> Result<(), PersistError> {
        self.results.insert(result.word.clone(), result);
        self.writer.write_json(&self.filename, &self.results)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.results.contains_key(word)
    }

    /// Path of the snapshot file this store writes.
    pub fn output_path(&self) -> &Path {
        &self.path
    }
}
