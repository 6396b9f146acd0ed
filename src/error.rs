use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EliminationError {
    #[error("invalid league record: {0}")]
    InvalidInput(String),
    #[error("unknown team '{0}'")]
    UnknownTeam(String),
    #[error("flow source and sink are the same vertex ({0})")]
    DisconnectedInput(usize),
    #[error("augmenting path from {from} to {to} has no finite edge")]
    UnboundedFlow { from: usize, to: usize },
    #[error("'{team}' is already eliminated by '{by}'; no flow network applies")]
    DominatedTarget { team: String, by: String },
    #[error("certificate for '{team}' fails the counting check: {games} games vs capacity {capacity}")]
    CertificateRejected {
        team: String,
        games: i64,
        capacity: i64,
    },
}

impl EliminationError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        EliminationError::InvalidInput(message.into())
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("read division: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error(transparent)]
    League(#[from] EliminationError),
    #[error("snapshot: {0}")]
    Snapshot(#[from] bincode::Error),
    #[error("config: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, EliminationError>;
