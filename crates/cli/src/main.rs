use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Duration;

use subintel_core::{
    DEFAULT_BASE_URL, DEFAULT_DB_FILE, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_MAX_TOKENS,
    DEFAULT_MODEL, env_flag, env_parse_with_default,
};
use subintel_llm::{LlmClient, QuerySynthesizer};
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "subintel")]
#[command(
    about = "Ask natural-language questions about subscription marketing attribution",
    long_about = None
)]
struct Cli {
    /// Analytical store file (defaults to $SUBINTEL_DB_PATH, then the data directory)
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web dashboard
    Serve {
        #[arg(short, long, default_value = "8501")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// Draw the journey-length chart for journey answers
        #[arg(long)]
        journey_chart: bool,
    },
    /// Answer one question and print the SQL, status and table
    Ask {
        question: String,
        /// Print the full response as JSON
        #[arg(long)]
        json: bool,
        #[arg(long)]
        journey_chart: bool,
    },
    /// Create empty source tables and the journey summary
    Init,
    /// Load CSV exports into the store, replacing existing rows
    Import {
        #[arg(long)]
        impressions: Option<PathBuf>,
        #[arg(long)]
        markov: Option<PathBuf>,
    },
    /// List tables and columns
    Schema,
    /// Row counts per table
    Stats,
    /// Print the verified example questions
    Examples,
}

pub(crate) fn get_db_path(cli_db: Option<PathBuf>) -> PathBuf {
    cli_db
        .or_else(|| std::env::var_os("SUBINTEL_DB_PATH").map(PathBuf::from))
        .unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("subintel")
                .join(DEFAULT_DB_FILE)
        })
}

pub(crate) fn get_api_key() -> Result<String> {
    std::env::var("GROQ_API_KEY")
        .or_else(|_| std::env::var("SUBINTEL_API_KEY"))
        .ok()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "GROQ_API_KEY is not set. Export your Groq API key \
                 (or SUBINTEL_API_KEY for another OpenAI-compatible provider) and try again."
            )
        })
}

pub(crate) fn get_base_url() -> String {
    std::env::var("SUBINTEL_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned())
}

pub(crate) fn journey_chart_enabled(flag: bool) -> bool {
    flag || env_flag("SUBINTEL_JOURNEY_CHART", false)
}

/// Build the model-backed synthesizer from the environment.
///
/// Fails before anything else happens when no API key is configured.
pub(crate) fn build_synthesizer() -> Result<QuerySynthesizer> {
    let api_key = get_api_key()?;
    let timeout = env_parse_with_default("SUBINTEL_HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS);
    let model = std::env::var("SUBINTEL_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_owned());
    let max_tokens = env_parse_with_default("SUBINTEL_MAX_TOKENS", DEFAULT_MAX_TOKENS);

    let client = LlmClient::with_timeout(api_key, get_base_url(), Duration::from_secs(timeout))?
        .with_model(model);
    tracing::info!(model = %client.model(), base_url = %client.base_url(), "model client ready");
    Ok(QuerySynthesizer::new(client).with_max_tokens(max_tokens))
}

pub(crate) fn require_existing(db_path: &Path) -> Result<()> {
    if !db_path.exists() {
        anyhow::bail!(
            "no analytical store at {}. Run `subintel import --impressions <csv> --markov <csv>` first.",
            db_path.display()
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let db_path = get_db_path(cli.db);

    match cli.command {
        Commands::Serve { port, host, journey_chart } => {
            commands::serve::run(&db_path, port, host, journey_chart_enabled(journey_chart))
                .await?;
        },
        Commands::Ask { question, json, journey_chart } => {
            commands::ask::run(&db_path, &question, json, journey_chart_enabled(journey_chart))
                .await?;
        },
        Commands::Init => commands::data::run_init(&db_path)?,
        Commands::Import { impressions, markov } => {
            commands::data::run_import(&db_path, impressions.as_deref(), markov.as_deref())?;
        },
        Commands::Schema => commands::data::run_schema(&db_path)?,
        Commands::Stats => commands::data::run_stats(&db_path)?,
        Commands::Examples => commands::data::run_examples(),
    }

    Ok(())
}
