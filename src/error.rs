use crate::cache;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Request error: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("Invalid url: {0}")]
    Url(#[from] url::ParseError),
    #[error("Cache error: {0}")]
    Cache(#[from] cache::Error),
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
