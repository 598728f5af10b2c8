use plasticdom::DomError;
use thiserror::Error;

/// Errors returned by table operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error(transparent)]
    Dom(#[from] DomError),
    #[error("table body container `{0}` is not in the document")]
    MissingBody(String),
}
