//! moji-gen - Kaomoji generator CLI
//!
//! Prints one face per line for the given keywords, e.g.
//! `moji-gen 猫 可爱 -n 8 --seed 42`.

use anyhow::Result;
use clap::Parser;
use moji_common::config::MojiConfig;
use moji_gen::{generate_from_path, rank, GenerateRequest, Lang};
use std::path::PathBuf;
use tracing::debug;

/// Keywords used when none are given
const DEFAULT_KEYWORDS: [&str; 2] = ["猫", "可爱"];

#[derive(Debug, Parser)]
#[command(name = "moji-gen", version, about = "Kaomoji Generator")]
struct Cli {
    /// Keywords, e.g. 猫 可爱 / 狗 简洁 / 哭 夸张
    keywords: Vec<String>,

    /// Number of faces to generate
    #[arg(short = 'n', default_value_t = 6)]
    count: usize,

    /// Random seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Sample corpus path (JSON)
    #[arg(long, env = "MOJI_SAMPLES")]
    samples: Option<PathBuf>,

    /// Keyword table language (zh, ja)
    #[arg(long, default_value = "zh")]
    lang: String,

    /// Append a relevance score to every face
    #[arg(long)]
    score: bool,

    /// Config file path
    #[arg(long, env = "MOJI_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = MojiConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .init();

    let keywords = if cli.keywords.is_empty() {
        DEFAULT_KEYWORDS.iter().map(|s| s.to_string()).collect()
    } else {
        cli.keywords
    };
    let lang = Lang::parse(&cli.lang);
    let samples_path = cli.samples.unwrap_or_else(|| config.samples_path());
    debug!(samples = %samples_path.display(), lang = %lang, "Generating");

    let request = GenerateRequest::new(keywords)
        .with_count(cli.count)
        .with_seed(cli.seed)
        .with_lang(lang);
    let generation = generate_from_path(&request, &samples_path);

    if cli.score {
        for scored in rank(generation.items, request.keywords.as_slice(), lang) {
            println!("{}\t{}", scored.text, scored.score);
        }
    } else {
        for face in generation.items {
            println!("{}", face);
        }
    }

    Ok(())
}
