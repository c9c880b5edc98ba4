use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid topology: {0}")]
    Topology(String),
    #[error("malformed record: {0}")]
    Parse(String),
    #[error("output error: {0}")]
    Output(String),
}
