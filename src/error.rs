#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid digest: {0}")]
    InvalidDigest(String),
}

pub type Result<T> = core::result::Result<T, Error>;
