use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("save request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed url: {0}")]
    Url(#[from] url::ParseError),
    #[error("document has no field with id '{0}'")]
    MissingField(String),
    #[error("failed to open browser: {0}")]
    Open(#[source] io::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to read import file: {0}")]
    Csv(#[from] csv::Error),
    #[error("can't import bad line {line}: {record}")]
    BadRecord { line: usize, record: String },
    #[error("invalid value for {key}: {message}")]
    Config { key: &'static str, message: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
