use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] eyre::Report),
}

pub type PlanResult<T> = Result<T, PlanError>;
