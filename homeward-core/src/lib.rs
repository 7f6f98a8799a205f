//! Core domain types for the Homeward adoption and logistics engine.
//!
//! The crate models the facility network (shelters connected by weighted
//! transport links) and the adoption entities (dogs and adopters) that the
//! routing and matching engines operate on. All types are plain data built
//! fresh per request from caller-supplied snapshots; nothing here performs
//! I/O or holds state between calls.

#![forbid(unsafe_code)]

mod adopter;
mod dog;
mod graph;
mod shelter;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use adopter::Adopter;
pub use dog::{CostModel, Dog, Energy, EnergyParseError, Size, SizeParseError};
pub use graph::{Edge, EdgeError, Graph};
pub use shelter::Shelter;
