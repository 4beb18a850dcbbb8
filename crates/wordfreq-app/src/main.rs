use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordfreq_config::Config;
use wordfreq_types::OutputFormat;

pub mod service;
pub mod state;

#[cfg(test)]
mod tests;

use self::service::{AnalyzeRequest, Input, Response, ServiceError};
use self::state::AppState;

/// Word frequency statistics for Vietnamese and English text
#[derive(Parser, Debug)]
#[command(name = "wordfreq", version)]
struct Cli {
    /// Text files to analyze, each one independently
    files: Vec<PathBuf>,

    /// Inline text to analyze
    #[arg(long)]
    text: Option<String>,

    /// json, csv or png
    #[arg(long, short, default_value = "json")]
    format: String,

    /// Directory for csv/png artifacts
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Number of bars in the png chart
    #[arg(long)]
    top_n: Option<usize>,

    /// JSON profile to load instead of environment variables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Split on whitespace only, without merging Vietnamese compounds
    #[arg(long)]
    no_compound_merge: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("WORDFREQ_LOG_JSON")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr));

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::new(),
    };

    if let Some(dir) = &cli.output_dir {
        config.export.output_dir = dir.clone();
    }
    if let Some(top_n) = cli.top_n {
        config.export.top_n = top_n;
    }
    if cli.no_compound_merge {
        config.segmenter.compound_merge = false;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let format = service::parse_format(&cli.format)?;
    let config = load_config(&cli)?;

    let mut inputs = Vec::new();
    if let Some(text) = &cli.text {
        inputs.push(("<text>".to_string(), Input::Text(text.clone())));
    }
    for path in &cli.files {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;
        inputs.push((path.display().to_string(), Input::Upload(bytes)));
    }
    if inputs.is_empty() {
        anyhow::bail!("nothing to analyze, pass --text or one or more files");
    }

    // Stopwords and lexicon are loaded here, once, before any input runs
    let state = Arc::new(AppState::new(config));

    let total = inputs.len();
    let results = run(state, inputs, format, None).await?;

    let mut failed = 0;
    for (name, result) in results {
        match result {
            Ok(Response::Json(body)) => println!("{body}"),
            Ok(Response::File { path, format }) => {
                tracing::info!("{name}: wrote {format} to {}", path.display());
                println!("{}", path.display());
            }
            Ok(Response::NoContent { message }) => tracing::warn!("{name}: {message}"),
            Err(e) if e.is_client_error() => {
                failed += 1;
                tracing::warn!("{name}: {e}");
            }
            Err(e) => {
                failed += 1;
                tracing::error!("{name}: {e:?}");
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {total} inputs failed");
    }
    Ok(())
}

/// Analyze every input concurrently; results come back in input order
pub async fn run(
    state: Arc<AppState>,
    inputs: Vec<(String, Input)>,
    format: OutputFormat,
    top_n: Option<usize>,
) -> anyhow::Result<Vec<(String, Result<Response, ServiceError>)>> {
    let handles: Vec<_> = inputs
        .into_iter()
        .map(|(name, input)| {
            let state = Arc::clone(&state);
            let task = tokio::task::spawn_blocking(move || {
                let request = AnalyzeRequest {
                    input,
                    format,
                    top_n,
                };
                service::analyze(&state, request)
            });
            (name, task)
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for (name, task) in handles {
        let result = task
            .await
            .with_context(|| format!("analysis task for {name} panicked"))?;
        results.push((name, result));
    }

    Ok(results)
}
