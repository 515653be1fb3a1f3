//! moji-import - Sample corpus tooling
//!
//! - `fetch`: scrape the source list and merge new faces into the corpus
//! - `clean`: drop markup and duplicates from an existing corpus file
//! - `preview`: show how fetched candidates would be classified

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use moji_common::config::MojiConfig;
use moji_common::SampleCorpus;
use moji_import::{clean, collect_candidates, import, load_sources, preview, Fetcher, ImportOptions};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "moji-import", version, about = "Kaomoji sample corpus tooling")]
struct Cli {
    /// Config file path
    #[arg(long, global = true, env = "MOJI_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch sources and merge new faces into the corpus
    Fetch {
        /// Source list, one URL per line
        #[arg(long)]
        sources: Option<PathBuf>,

        /// Corpus file to merge into
        #[arg(long)]
        out: Option<PathBuf>,

        /// Cap for every category list
        #[arg(long)]
        max_per_category: Option<usize>,
    },

    /// Filter invalid entries and duplicates from a corpus file in place
    Clean {
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// Print the per-category classification of fetched candidates as JSON
    Preview {
        #[arg(long)]
        sources: Option<PathBuf>,

        /// Examples shown per category
        #[arg(long, default_value_t = 10)]
        limit: usize,

        /// Apply the strict face filter before grouping
        #[arg(long)]
        filter_bad: bool,
    },
}

fn read_sources(path: &Path) -> Result<Vec<String>> {
    let sources = load_sources(path)?;
    if sources.is_empty() {
        bail!("No sources found in {}", path.display());
    }
    info!("Loaded {} sources from {}", sources.len(), path.display());
    Ok(sources)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = MojiConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .init();

    match cli.command {
        Commands::Fetch {
            sources,
            out,
            max_per_category,
        } => {
            let sources = read_sources(&sources.unwrap_or_else(|| config.sources_path()))?;
            let out = out.unwrap_or_else(|| config.samples_path());
            let options = ImportOptions {
                max_per_category: max_per_category
                    .unwrap_or(config.import.max_per_category)
                    .max(1),
            };
            info!("Corpus: {} (cap {} per category)", out.display(), options.max_per_category);

            let fetcher = Fetcher::from_config(&config.import)?;
            let corpus = SampleCorpus::load(&out);
            let (corpus, report) = import(&sources, corpus, &fetcher, options).await;
            corpus.save(&out)?;

            info!(
                "Imported {} new faces from {} sources ({} failed), corpus now {} faces",
                report.added,
                report.sources - report.failed,
                report.failed,
                report.total
            );
            println!("Wrote {} ({} faces)", out.display(), report.total);
        }
        Commands::Clean { path } => {
            let path = path.unwrap_or_else(|| config.samples_path());
            let corpus = SampleCorpus::try_load(&path)?;
            let (cleaned, report) = clean(&corpus);
            cleaned.save(&path)?;
            println!(
                "Cleaned {}: kept {}/{}, removed {}",
                path.display(),
                report.kept,
                report.total,
                report.removed
            );
        }
        Commands::Preview {
            sources,
            limit,
            filter_bad,
        } => {
            let sources = read_sources(&sources.unwrap_or_else(|| config.sources_path()))?;
            let fetcher = Fetcher::from_config(&config.import)?;
            let candidates = collect_candidates(&sources, &fetcher).await;
            let result = preview(&candidates, limit.max(1), filter_bad);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
