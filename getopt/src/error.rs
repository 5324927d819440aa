#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("option '{0}' is unknown")]
    UnknownOption(String),

    #[error("option '{0}' must have a value")]
    MissingArgument(String),

    #[error("option '{0}' has an invalid value")]
    InvalidArgument(String),

    #[error("option '{0}' is declared twice")]
    DuplicateOption(String),
}

pub type Result<T> = std::result::Result<T, Error>;
