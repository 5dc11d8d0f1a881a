//! CLI entry point for the definition harvester.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use dict_core::JobSpec;
use dict_engine::{
    load_word_list, FetchSettings, FixedDelayPacer, JobRunner, MarkedListExtractor,
    ReqwestPageFetcher, ResultStore,
};
use harvest_logging::{harvest_info, LogDestination};
use log::LevelFilter;

mod cli;

use cli::Args;

fn main() -> Result<()> {
    // Parse CLI arguments first, so --help works without a logger.
    let args = Args::parse();

    let level = if args.quiet {
        LevelFilter::Error
    } else {
        match args.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };
    let destination = if args.log_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    };
    harvest_logging::initialize(destination, level);

    let runtime = tokio::runtime::Runtime::new().context("tokio runtime")?;
    runtime.block_on(run(args))
}

async fn run(args: Args) -> Result<()> {
    let spec = JobSpec::new(args.job_number, args.job_size).context("invalid job")?;

    let words = load_word_list(&args.word_list)
        .with_context(|| format!("loading word list {}", args.word_list.display()))?;
    harvest_info!(
        "loaded {} words from {}",
        words.len(),
        args.word_list.display()
    );

    let fetcher =
        ReqwestPageFetcher::new(FetchSettings::default()).context("building HTTP client")?;
    let runner = JobRunner::new(
        Box::new(fetcher),
        Box::new(MarkedListExtractor::default()),
        Box::new(FixedDelayPacer::new(Duration::from_millis(args.delay_ms))),
    );
    let mut store = ResultStore::new(args.output_dir.clone(), spec.number());

    let summary = runner.run(spec, &words, &mut store).await?;

    harvest_info!(
        "wrote {} entries to {}",
        summary.recorded,
        store.output_path().display()
    );
    if !summary.skipped.is_empty() {
        harvest_info!(
            "{} words skipped; re-run job {} to retry them",
            summary.skipped.len(),
            summary.job_number
        );
    }
    Ok(())
}
