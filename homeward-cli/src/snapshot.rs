//! JSON network snapshots consumed by the CLI commands.

use camino::{Utf8Path, Utf8PathBuf};
use homeward_core::{Adopter, Dog, Edge, Graph, Shelter};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sample network mirroring the production seed data.
const SAMPLE_NETWORK: &str = include_str!("../data/network.json");

/// Errors raised while loading a [`Snapshot`].
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Reading the snapshot file failed.
    #[error("failed to read snapshot at {path}: {source}")]
    Read {
        /// Path the user supplied.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The snapshot file is not valid snapshot JSON.
    #[error("failed to parse snapshot JSON at {path}: {source}")]
    Parse {
        /// Path the user supplied.
        path: Utf8PathBuf,
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
    /// The bundled sample failed to parse.
    #[error("failed to parse the bundled sample network: {0}")]
    Sample(#[source] serde_json::Error),
}

/// One self-contained view of the shelter network.
///
/// Every command builds its working [`Graph`] and herd from a snapshot, so
/// runs are pure functions of this input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Shelters; their ids form the node set of the network.
    pub shelters: Vec<Shelter>,
    /// Undirected transport links between shelters.
    pub edges: Vec<Edge>,
    /// Dogs currently available.
    pub dogs: Vec<Dog>,
    /// Adopter profiles to match against.
    pub adopters: Vec<Adopter>,
}

impl Snapshot {
    /// Load a snapshot from `path`, or the bundled sample when `None`.
    ///
    /// # Errors
    /// Returns [`SnapshotError`] when the file cannot be read or its JSON
    /// does not describe a snapshot.
    pub fn load(path: Option<&Utf8Path>) -> Result<Self, SnapshotError> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| {
                    SnapshotError::Read {
                        path: path.to_owned(),
                        source,
                    }
                })?;
                serde_json::from_str(&text).map_err(|source| SnapshotError::Parse {
                    path: path.to_owned(),
                    source,
                })
            }
            None => serde_json::from_str(SAMPLE_NETWORK).map_err(SnapshotError::Sample),
        }
    }

    /// Build the transport graph over the snapshot's shelters.
    ///
    /// Edges naming shelters missing from the snapshot are dropped.
    #[must_use]
    pub fn graph(&self) -> Graph {
        let ids = self.shelters.iter().map(|shelter| shelter.id.clone());
        Graph::new(ids, &self.edges)
    }

    /// Ids of every shelter in the snapshot.
    #[must_use]
    pub fn shelter_ids(&self) -> Vec<String> {
        self.shelters.iter().map(|shelter| shelter.id.clone()).collect()
    }
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests use expect for readable failures"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn bundled_sample_parses() {
        let snapshot = Snapshot::load(None).expect("bundled sample is valid");
        assert_eq!(snapshot.shelters.len(), 15);
        assert!(snapshot.edges.len() >= 35);
        assert!(!snapshot.dogs.is_empty());
        assert!(!snapshot.adopters.is_empty());
    }

    #[rstest]
    fn bundled_graph_is_connected_over_all_shelters() {
        let snapshot = Snapshot::load(None).expect("bundled sample is valid");
        let graph = snapshot.graph();
        assert_eq!(graph.len(), snapshot.shelters.len());
        let tree = homeward_routing::kruskal(&graph, &snapshot.shelter_ids());
        assert!(tree.spans(graph.len()));
    }

    #[rstest]
    fn missing_file_reports_the_path() {
        let err = Snapshot::load(Some(Utf8Path::new("/no/such/snapshot.json")))
            .expect_err("missing file");
        assert!(err.to_string().contains("/no/such/snapshot.json"));
    }
}
