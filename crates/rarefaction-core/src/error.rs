use thiserror::Error;

use rarefaction_ingest::IngestError;
use rarefaction_model::RarefactionError;
use rarefaction_output::OutputError;

/// Errors from a rarefaction run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Model(#[from] RarefactionError),
    #[error(transparent)]
    Output(#[from] OutputError),
}

pub type Result<T> = std::result::Result<T, RunError>;
