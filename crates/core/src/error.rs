#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid camera settings: {0}")]
    InvalidSettings(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}
