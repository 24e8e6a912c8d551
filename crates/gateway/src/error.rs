/// Errors from the AI gateway layer.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Required gateway configuration is missing or unusable.
    #[error("Gateway configuration error: {0}")]
    Configuration(String),

    /// The gateway signalled rate limiting (HTTP 429). The caller should
    /// back off and retry later.
    #[error("Rate limit exceeded")]
    RateLimited,

    /// The workspace has no remaining credits (HTTP 402).
    #[error("Payment required")]
    PaymentRequired,

    /// Any other non-2xx response.
    #[error("AI gateway error ({status}): {body}")]
    Upstream {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The gateway answered 2xx but the payload carried no image reference.
    #[error("No image generated")]
    NoImageReturned,

    /// The HTTP request itself failed (network, DNS, TLS, decoding, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}
