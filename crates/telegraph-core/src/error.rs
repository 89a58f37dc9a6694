use thiserror::Error;

/// Failure reported by a [`crate::BellCue`] when it could not ring.
///
/// The controller swallows these; they exist so adapters can say why.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BellError {
    #[error("bell audio is not available")]
    Unavailable,
    #[error("bell playback rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown telegraph position `{0}`")]
pub struct ParsePositionError(pub String);
