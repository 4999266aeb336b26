use thiserror::Error;

#[derive(Error, Debug)]
pub enum TweetqlError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Upstream record has no `{0}`")]
    MissingField(String),

    #[error("Upstream field `{field}` is not {expected}")]
    FieldType {
        field: String,
        expected: &'static str,
    },

    #[error("Invalid upstream URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TweetqlError>;
