//! Command line entry point.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::client::SummarizeClient;
use crate::config::Config;
use crate::logging::{self, Fallback};
use crate::ui;
use crate::ui::form::{parse_max_length, SummaryRequestController};

#[derive(Debug, Parser)]
#[command(
    name = "clipnote",
    version,
    about = "Summarize text through a remote /summarize endpoint"
)]
pub struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base URL of the summarization endpoint.
    #[arg(long, global = true, env = "CLIPNOTE_BASE_URL", value_name = "URL")]
    pub base_url: Option<String>,

    /// Initial maximum summary length (non-numeric input falls back to 100).
    #[arg(long, global = true, value_name = "N")]
    pub max_length: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Summarize text once and print the summary with its stats.
    Summarize {
        /// Read the text from a file.
        #[arg(long, short, value_name = "PATH", conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Text to summarize; read from stdin when neither this nor --file is given.
        text: Option<String>,
    },

    /// Check that the summarization endpoint is reachable.
    Health,
}

impl Cli {
    /// Load config, apply flag and env overrides, then validate the result.
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(base_url) = &self.base_url {
            config.endpoint.base_url = base_url.clone();
        }
        if let Some(raw) = &self.max_length {
            config.form.default_max_length = parse_max_length(raw);
        }

        config.validate()?;
        Ok(config)
    }
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;

    let fallback = if cli.command.is_none() {
        Fallback::None
    } else {
        Fallback::Stderr
    };
    if let Err(err) = logging::init(&config.logging, fallback) {
        eprintln!("Warning: {err}");
    }

    tracing::info!(
        base_url = %config.endpoint.base_url,
        max_length = config.form.default_max_length,
        "Starting clipnote"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let client = SummarizeClient::new(config.endpoint.base_url.clone())?;

    match cli.command {
        None => {
            let controller =
                SummaryRequestController::new(client, config.form.default_max_length);
            ui::run(controller, runtime.handle().clone())?;
        }
        Some(Command::Summarize { file, text }) => {
            let source = read_source(file, text)?;
            let controller =
                SummaryRequestController::new(client, config.form.default_max_length);
            let output = runtime.block_on(summarize_once(controller, source))?;
            println!("{output}");
        }
        Some(Command::Health) => {
            let status = runtime
                .block_on(client.health())
                .with_context(|| format!("Endpoint {} is not healthy", client.base_url()))?;
            println!("{}: {}", client.base_url(), status.status);
        }
    }

    Ok(())
}

fn read_source(file: Option<PathBuf>, text: Option<String>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read '{}'", path.display()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;
    Ok(buffer)
}

/// Run one submission and render the summary block, or fail with the
/// message the form would have shown.
pub async fn summarize_once(
    mut controller: SummaryRequestController,
    source: String,
) -> anyhow::Result<String> {
    controller.update_source_text(source);
    controller.submit().await;

    let state = controller.state();
    if !state.error_message.is_empty() {
        anyhow::bail!("{}", state.error_message);
    }

    let mut output = state.summary_text.clone();
    if let Some(stats) = state.stats() {
        output.push_str("\n\n");
        output.push_str(&stats.to_string());
    }
    Ok(output)
}
