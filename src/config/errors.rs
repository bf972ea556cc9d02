#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVariable(&'static str),

    #[error("invalid value for {name}: {reason}")]
    InvalidVariable { name: &'static str, reason: String },
}
