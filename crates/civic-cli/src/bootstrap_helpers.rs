use std::sync::Arc;

use anyhow::{Context, Result};
use civic_ai::{LlmClient, OpenAiClient, OpenAiConfig};
use civic_assistant::{AssistantConfig, CivicAssistant};
use civic_directory::WardDirectory;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli_args::Cli;

pub(crate) fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

pub(crate) fn load_directory() -> Result<Arc<WardDirectory>> {
    let directory = WardDirectory::embedded().context("failed to load embedded ward data")?;
    Ok(Arc::new(directory))
}

/// A blank or absent key is the supported no-credential mode, not an error.
pub(crate) fn build_remote_client(cli: &Cli) -> Result<Option<Arc<dyn LlmClient>>> {
    let Some(api_key) = cli
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
    else {
        tracing::debug!("no MOONSHOT_API_KEY configured; remote model disabled");
        return Ok(None);
    };

    let client = OpenAiClient::new(OpenAiConfig {
        api_base: cli.api_base.clone(),
        api_key: api_key.to_string(),
        request_timeout_ms: cli.request_timeout_ms,
    })
    .context("failed to build chat completion client")?;
    Ok(Some(Arc::new(client)))
}

pub(crate) fn build_assistant(cli: &Cli) -> Result<CivicAssistant> {
    let directory = load_directory()?;
    let client = build_remote_client(cli)?;
    let config = AssistantConfig {
        model: cli.model.clone(),
        temperature: cli.temperature,
        max_tokens: cli.max_tokens,
        history_limit: cli.history_limit,
    };
    Ok(CivicAssistant::new(directory, client, config))
}
