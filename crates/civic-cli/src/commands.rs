use anyhow::{anyhow, bail, Context, Result};
use civic_assistant::{AssistantError, GatewayRequest};
use civic_gateway::{run_gateway_server, GatewayServerConfig};
use serde_json::Value;

use crate::bootstrap_helpers::{build_assistant, load_directory};
use crate::cli_args::{Cli, CliCommand};

pub(crate) async fn run_cli(cli: Cli) -> Result<()> {
    match &cli.command {
        CliCommand::Serve {
            bind,
            max_body_bytes,
        } => {
            let assistant = build_assistant(&cli)?;
            let config = GatewayServerConfig {
                bind: bind.clone(),
                max_body_bytes: *max_body_bytes,
            };
            run_gateway_server(config, assistant).await
        }
        CliCommand::Ward { id } => {
            let directory = load_directory()?;
            let record = directory.resolve(*id).ok_or_else(|| {
                let range = directory.id_range();
                anyhow!(
                    "ward {id} not found; valid wards are {}-{}",
                    range.start(),
                    range.end()
                )
            })?;
            print_json(&serde_json::to_value(directory.to_display_record(record))?)
        }
        CliCommand::Search { query } => {
            let directory = load_directory()?;
            let results: Vec<_> = directory
                .search(query)
                .into_iter()
                .map(|record| directory.to_display_record(record))
                .collect();
            print_json(&serde_json::to_value(results)?)
        }
        CliCommand::Ask { message, ward } => {
            let assistant = build_assistant(&cli)?;
            let mut request = GatewayRequest::new(message.clone());
            request.district_id = *ward;
            match assistant.handle(request).await {
                Ok(response) => print_json(&serde_json::to_value(response)?),
                Err(AssistantError::EmptyMessage) => bail!("message is required"),
            }
        }
    }
}

fn print_json(value: &Value) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render JSON output")?;
    println!("{rendered}");
    Ok(())
}
