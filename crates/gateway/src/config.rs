use crate::error::GatewayError;

/// Default chat-completions endpoint of the hosted AI gateway.
pub const DEFAULT_ENDPOINT: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";

/// Default image-capable model.
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash-image-preview";

/// Default outbound request timeout in seconds. Image generation is slow, so
/// this is generous.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// AI gateway configuration, passed to [`crate::client::GatewayClient`] at
/// construction time.
#[derive(Clone)]
pub struct GatewayConfig {
    /// Bearer token for the gateway.
    pub api_key: String,
    /// Full URL of the chat-completions endpoint.
    pub endpoint: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Outbound request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl GatewayConfig {
    /// Build a config with defaults for everything except the key.
    ///
    /// Fails with [`GatewayError::Configuration`] when the key is blank.
    pub fn new(api_key: impl Into<String>) -> Result<Self, GatewayError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GatewayError::Configuration(
                "AI gateway API key is not configured".to_string(),
            ));
        }
        Ok(Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Override the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Load configuration from environment variables.
    ///
    /// | Env Var                   | Default                  |
    /// |---------------------------|--------------------------|
    /// | `AI_GATEWAY_API_KEY`      | required                 |
    /// | `AI_GATEWAY_URL`          | [`DEFAULT_ENDPOINT`]     |
    /// | `AI_GATEWAY_MODEL`        | [`DEFAULT_MODEL`]        |
    /// | `AI_GATEWAY_TIMEOUT_SECS` | [`DEFAULT_TIMEOUT_SECS`] |
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GatewayError> {
        let api_key = lookup("AI_GATEWAY_API_KEY").ok_or_else(|| {
            GatewayError::Configuration("AI_GATEWAY_API_KEY is not configured".to_string())
        })?;

        let mut config = Self::new(api_key)?;

        if let Some(endpoint) = lookup("AI_GATEWAY_URL") {
            config.endpoint = endpoint;
        }
        if let Some(model) = lookup("AI_GATEWAY_MODEL") {
            config.model = model;
        }
        if let Some(timeout) = lookup("AI_GATEWAY_TIMEOUT_SECS") {
            config.request_timeout_secs = timeout.trim().parse().map_err(|_| {
                GatewayError::Configuration(format!(
                    "AI_GATEWAY_TIMEOUT_SECS must be a valid u64 (got '{timeout}')"
                ))
            })?;
        }

        Ok(config)
    }
}
