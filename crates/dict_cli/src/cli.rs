//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use dict_core::DEFAULT_JOB_SIZE;
use dict_engine::DEFAULT_PACING_DELAY;

/// Harvest English word definitions, one numbered job at a time.
///
/// Each job covers a fixed-size slice of the word list and rewrites its
/// JSON snapshot after every successful word, so an interrupted run can be
/// re-issued with the same job number and lose at most one word.
#[derive(Parser, Debug)]
#[command(name = "definition-harvester")]
#[command(author, version, about)]
pub struct Args {
    /// 1-based job number selecting which slice of the word list to harvest
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub job_number: u32,

    /// Word list file, one word per line
    #[arg(short = 'w', long, default_value = "words.txt")]
    pub word_list: PathBuf,

    /// Directory the per-job JSON snapshots are written to
    #[arg(short = 'o', long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Words per job
    #[arg(long, default_value_t = DEFAULT_JOB_SIZE)]
    pub job_size: usize,

    /// Delay between requests in milliseconds
    #[arg(long, default_value_t = DEFAULT_PACING_DELAY.as_millis() as u64)]
    pub delay_ms: u64,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Also write logs to ./harvest.log
    #[arg(long)]
    pub log_file: bool,
}
