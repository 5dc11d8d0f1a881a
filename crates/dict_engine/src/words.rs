use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("cannot read word list {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Loads the candidate words, one per non-empty line, in file order.
///
/// No deduplication. Lines are not trimmed; surrounding whitespace reaches
/// the query as-is.
pub fn load_word_list(path: &Path) -> Result<Vec<String>, WordListError> {
    let contents = fs::read_to_string(path).map_err(|source| WordListError::Unreadable {
        path: path.display().to_string(),
        source,
    })?;
    Ok(contents
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
