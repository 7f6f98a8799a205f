//! Error types emitted by the Homeward CLI.

use thiserror::Error;

use crate::snapshot::SnapshotError;

/// Errors emitted by the Homeward CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// The network snapshot could not be loaded.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    /// The requested adopter is not part of the snapshot.
    #[error("adopter '{id}' is not part of the snapshot")]
    UnknownAdopter {
        /// Identifier the user asked for.
        id: String,
    },
    /// Serializing the command output failed.
    #[error("failed to serialize command output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
}
