use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("not found")]
    NotFound,

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("foreign key violation: {0}")]
    ForeignKey(String),

    #[error("transaction aborted: {0}")]
    TransactionAborted(#[source] Box<Error>),

    #[error("storage bootstrap failed: {0}")]
    Bootstrap(String),
}

pub type Result<T> = std::result::Result<T, Error>;
