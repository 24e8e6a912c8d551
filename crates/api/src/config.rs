use lenscraft_core::camera::SettingsPolicy;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// The AI gateway has its own configuration, see
/// [`lenscraft_gateway::config::GatewayConfig`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `180`). Must exceed the
    /// gateway's own timeout so upstream failures surface as mapped errors.
    pub request_timeout_secs: u64,
    /// How untyped camera settings are parsed (default: lenient).
    pub settings_policy: SettingsPolicy,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default    |
    /// |--------------------------|------------|
    /// | `HOST`                   | `0.0.0.0`  |
    /// | `PORT`                   | `3000`     |
    /// | `REQUEST_TIMEOUT_SECS`   | `180`      |
    /// | `CAMERA_SETTINGS_POLICY` | `lenient`  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "180".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let settings_policy: SettingsPolicy = std::env::var("CAMERA_SETTINGS_POLICY")
            .unwrap_or_else(|_| "lenient".into())
            .parse()
            .expect("CAMERA_SETTINGS_POLICY must be 'lenient' or 'strict'");

        Self {
            host,
            port,
            request_timeout_secs,
            settings_policy,
        }
    }
}
