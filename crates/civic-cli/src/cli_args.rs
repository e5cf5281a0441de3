use clap::{Parser, Subcommand};

fn parse_positive_usize(value: &str) -> Result<usize, String> {
    let parsed = value
        .parse::<usize>()
        .map_err(|error| format!("failed to parse integer: {error}"))?;
    if parsed == 0 {
        return Err("value must be greater than 0".to_string());
    }
    Ok(parsed)
}

fn parse_positive_u64(value: &str) -> Result<u64, String> {
    let parsed = value
        .parse::<u64>()
        .map_err(|error| format!("failed to parse integer: {error}"))?;
    if parsed == 0 {
        return Err("value must be greater than 0".to_string());
    }
    Ok(parsed)
}

fn parse_positive_u32(value: &str) -> Result<u32, String> {
    let parsed = value
        .parse::<u32>()
        .map_err(|error| format!("failed to parse integer: {error}"))?;
    if parsed == 0 {
        return Err("value must be greater than 0".to_string());
    }
    Ok(parsed)
}

fn parse_temperature(value: &str) -> Result<f64, String> {
    let parsed = value
        .parse::<f64>()
        .map_err(|error| format!("failed to parse float: {error}"))?;
    if !parsed.is_finite() || !(0.0..=2.0).contains(&parsed) {
        return Err("value must be a finite number in range 0.0..=2.0".to_string());
    }
    Ok(parsed)
}

#[derive(Debug, Parser)]
#[command(
    name = "civic",
    about = "Chicago ward directory and civic assistant gateway",
    version
)]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "MOONSHOT_API_KEY",
        hide_env_values = true,
        help = "API key for the OpenAI-compatible chat endpoint. Without it every answer comes from the local rule table."
    )]
    pub(crate) api_key: Option<String>,

    #[arg(
        long,
        global = true,
        env = "CIVIC_API_BASE",
        default_value = civic_ai::DEFAULT_API_BASE,
        help = "Base URL of the OpenAI-compatible chat API"
    )]
    pub(crate) api_base: String,

    #[arg(
        long,
        global = true,
        env = "CIVIC_MODEL",
        default_value = civic_assistant::DEFAULT_MODEL,
        help = "Remote chat model id"
    )]
    pub(crate) model: String,

    #[arg(
        long,
        global = true,
        env = "CIVIC_TEMPERATURE",
        default_value_t = civic_assistant::DEFAULT_TEMPERATURE,
        value_parser = parse_temperature,
        help = "Sampling temperature sent with every remote call"
    )]
    pub(crate) temperature: f64,

    #[arg(
        long,
        global = true,
        env = "CIVIC_MAX_TOKENS",
        default_value_t = civic_assistant::DEFAULT_MAX_TOKENS,
        value_parser = parse_positive_u32,
        help = "Output token cap sent with every remote call"
    )]
    pub(crate) max_tokens: u32,

    #[arg(
        long,
        global = true,
        env = "CIVIC_HISTORY_LIMIT",
        default_value_t = civic_assistant::DEFAULT_HISTORY_LIMIT,
        help = "Most recent caller-supplied history turns forwarded to the model (0 drops history)"
    )]
    pub(crate) history_limit: usize,

    #[arg(
        long,
        global = true,
        env = "CIVIC_REQUEST_TIMEOUT_MS",
        default_value_t = civic_ai::DEFAULT_REQUEST_TIMEOUT_MS,
        value_parser = parse_positive_u64,
        help = "Remote call timeout in milliseconds; a timeout answers from the local rule table"
    )]
    pub(crate) request_timeout_ms: u64,

    #[command(subcommand)]
    pub(crate) command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub(crate) enum CliCommand {
    /// Serve the chat and directory HTTP API.
    Serve {
        #[arg(
            long,
            env = "CIVIC_BIND",
            default_value = civic_gateway::DEFAULT_BIND,
            help = "Socket address to listen on"
        )]
        bind: String,

        #[arg(
            long,
            env = "CIVIC_MAX_BODY_BYTES",
            default_value_t = civic_gateway::DEFAULT_MAX_BODY_BYTES,
            value_parser = parse_positive_usize,
            help = "Largest accepted request body in bytes"
        )]
        max_body_bytes: usize,
    },
    /// Print one ward's display record as JSON.
    Ward { id: i64 },
    /// Print wards matching a name or neighborhood substring, or an exact ward number.
    Search {
        #[arg(default_value = "")]
        query: String,
    },
    /// Ask the assistant one question and print the response as JSON.
    Ask {
        message: String,

        #[arg(long = "ward", alias = "district", help = "Ward to scope the question to")]
        ward: Option<i64>,
    },
}
