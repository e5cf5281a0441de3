pub const DEFAULT_MODEL: &str = "kimi-k2-0711-preview";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_HISTORY_LIMIT: usize = 10;
/// Model id reported when the local rule table answered.
pub const FALLBACK_MODEL_ID: &str = "fallback";

#[derive(Debug, Clone, PartialEq)]
/// Sampling and history settings applied to every remote call.
pub struct AssistantConfig {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    /// Most recent caller-supplied turns forwarded to the model.
    pub history_limit: usize,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}
