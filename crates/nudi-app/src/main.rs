use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use nudi_config::Config;
use nudi_config::romanization::RomanizationStyle;
use nudi_core::language::LanguageProcessor;
use nudi_lang_kannada::{KannadaRomanizer, glossary, similarity};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

pub mod state;

use self::state::AppState;

#[derive(Parser)]
#[command(name = "nudi", about = "Kannada word lookup for readers and learners")]
struct Cli {
    /// JSON config file (defaults plus NUDI_* environment overrides when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    /// Never call the online translation providers
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve words to dictionary entries
    Resolve {
        /// Words to resolve
        words: Vec<String>,
        /// Resolve every word of a paragraph instead
        #[arg(long)]
        text: Option<String>,
    },
    /// Show the stemmer's analysis of a word
    Stem { word: String },
    /// Romanize Kannada text
    Romanize {
        text: String,
        /// Keep capitals for retroflex consonants
        #[arg(long)]
        case_marked: bool,
    },
    /// Split a word into root and suffix with explanations
    Decompose { word: String },
    /// Edit-distance similarity between two words
    Similarity { a: String, b: String },
    /// Dictionary statistics
    Stats,
}

#[derive(Serialize)]
struct Decomposition {
    #[serde(flatten)]
    analysis: nudi_core::language::CompoundAnalysis,
    explanations: Vec<glossary::GrammarExplanation>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::new(),
    };
    if cli.offline {
        config.translator.enabled = false;
    }

    run(cli.command, config).await
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(command: Command, config: Config) -> anyhow::Result<()> {
    match command {
        Command::Stem { word } => print_json(&nudi_lang_kannada::stem(&word)),
        Command::Romanize { text, case_marked } => {
            let style = if case_marked {
                RomanizationStyle::CaseMarked
            } else {
                config.romanization.style
            };
            println!("{}", KannadaRomanizer::new(style).romanize(&text));
            Ok(())
        }
        Command::Decompose { word } => {
            let analysis = nudi_lang_kannada::decompose(&word);
            let explanations = glossary::explain(&analysis.grammatical_info);
            print_json(&Decomposition {
                analysis,
                explanations,
            })
        }
        Command::Similarity { a, b } => {
            println!("{:.3}", similarity(&a, &b));
            Ok(())
        }
        Command::Stats => {
            let state = AppState::new(config).await.context("opening dictionary")?;
            print_json(&serde_json::json!({
                "dictionary": state.metadata,
                "stats": state.stats,
            }))
        }
        Command::Resolve { words, text } => {
            let state = AppState::new(config).await.context("opening dictionary")?;

            let tokens: Vec<String> = match text {
                Some(text) => state
                    .processor
                    .tokenize(&text)
                    .into_iter()
                    .map(|t| t.normalized)
                    .collect(),
                None => words,
            };
            if tokens.is_empty() {
                anyhow::bail!("nothing to resolve: pass words or --text");
            }

            tracing::info!("Resolving {} tokens", tokens.len());
            let results = state.resolver.resolve_many(&tokens).await;
            print_json(&results)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
