use std::path::PathBuf;

use thiserror::Error;

/// The problem dimensions cannot be turned into a well-formed CNF instance.
///
/// This is always reported before any file is touched.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("at least 2 participants are required, got {0}")]
    TooFewParticipants(u32),
    #[error("at least 1 day is required, got {0}")]
    TooFewDays(u32),
    #[error("at least 3 hours are required (one slot is reserved), got {0}")]
    TooFewHours(u32),
    #[error("the instance is too large to be encoded with 32-bit literals")]
    TooLarge,
}

/// Everything that can go wrong while translating a problem and running the solver on it.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Filesystem(#[from] std::io::Error),

    #[error("failed to launch solver '{}': {source}", .executable.display())]
    SolverLaunch {
        executable: PathBuf,
        source: std::io::Error,
    },

    #[error("interrupted while waiting for the solver")]
    Interrupted,
}
