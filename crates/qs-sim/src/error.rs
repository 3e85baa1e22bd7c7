use qs_core::QsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] QsError),
}

pub type SimResult<T> = Result<T, SimError>;
