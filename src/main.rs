use anyhow::Context;
use clap::Parser;
use conference_wordcount::aggregate::ranking::TieBreak;
use conference_wordcount::pipeline::run_pipeline;
use conference_wordcount::pipeline::types::{
    default_workers, ConferenceMonth, PipelineConfig, DEFAULT_BASE_URL,
};
use conference_wordcount::render::http::HttpRenderer;
use conference_wordcount::report::writer::write_report;
use conference_wordcount::text::stopwords::StopWords;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Ranks the words spoken in one general conference.
#[derive(Parser, Debug)]
#[command(name = "conference-wordcount", version, about)]
struct Cli {
    /// Conference year [default: year of the latest conference]
    #[arg(long)]
    year: Option<u16>,

    /// Conference month [default: month of the latest conference]
    #[arg(long, value_enum)]
    month: Option<ConferenceMonth>,

    /// Count every word instead of dropping short words and stop words
    #[arg(long)]
    keep_stop_words: bool,

    /// Number of parallel workers [default: available parallelism]
    #[arg(long)]
    workers: Option<usize>,

    /// Site root that talk references are resolved against
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Give up on a single talk after this many seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Order of words with equal counts
    #[arg(long, value_enum, default_value_t = TieBreak::Ascending)]
    tie_break: TieBreak,

    /// JSON array of stop words replacing the built-in list
    #[arg(long)]
    stop_words: Option<PathBuf>,

    /// Directory the report is written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

impl Cli {
    fn into_config(self) -> PipelineConfig {
        let defaults = PipelineConfig::default();

        PipelineConfig {
            year: self.year.unwrap_or(defaults.year),
            month: self.month.unwrap_or(defaults.month),
            filter_stop_words: !self.keep_stop_words,
            workers: self.workers.unwrap_or_else(default_workers),
            base_url: self.base_url,
            document_timeout: self.timeout_secs.map(Duration::from_secs),
            tie_break: self.tie_break,
            stop_words: self.stop_words,
            output_dir: self.output_dir,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("conference_wordcount=info")),
        )
        .init();

    let config = Cli::parse().into_config();
    config.validate()?;

    tracing::info!(
        "Counting {} {} with {} workers (stop words {})",
        config.month,
        config.year,
        config.workers,
        if config.filter_stop_words { "removed" } else { "kept" }
    );

    // 1. Static data:
    let stop_words = match &config.stop_words {
        Some(path) => StopWords::from_json_file(path)?,
        None => StopWords::english(),
    };

    // 2. Rendering service:
    let renderer = Arc::new(HttpRenderer::new());

    // 3. Discovery, extraction and ranking:
    let output = run_pipeline(renderer, Arc::new(stop_words), &config)
        .await
        .context("word count failed")?;

    // 4. Report:
    let path = write_report(&config.output_dir, &config.report_name(), &output.entries)
        .await
        .context("could not persist the ranking")?;

    tracing::info!("Complete! Report written to {}", path.display());
    Ok(())
}
