use thiserror::Error;

/// Demo error type.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid rows file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("table error: {0}")]
    Table(#[from] plastic_tickets::TableError),
    #[error("dom error: {0}")]
    Dom(#[from] plasticdom::DomError),
    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("{0}")]
    Usage(String),
}
