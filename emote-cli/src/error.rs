use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Ingestion failed
    #[error("Ingest error: {0}")]
    Ingest(String),

    /// Export failed
    #[error("Export error: {0}")]
    Export(String),

    /// Asset relocation failed
    #[error("Relocation error: {0}")]
    Relocate(String),

    /// Manifest repair failed
    #[error("Repair error: {0}")]
    Repair(String),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn ingest(msg: impl Into<String>) -> Self {
        Self::Ingest(msg.into())
    }

    pub(crate) fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    pub(crate) fn relocate(msg: impl Into<String>) -> Self {
        Self::Relocate(msg.into())
    }

    pub(crate) fn repair(msg: impl Into<String>) -> Self {
        Self::Repair(msg.into())
    }
}
