#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not parse menu date {text:?}: {source}")]
    Date {
        text: String,
        #[source]
        source: chrono::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
