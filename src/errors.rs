#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("please select at least one service")]
    NoServiceSelected,

    #[error("network failure: {0}")]
    Network(#[from] anyhow::Error),

    #[error("malformed record: {0}")]
    MalformedRecord(String),

    #[error("only the admin account can sign in here")]
    Unauthorized,
}
