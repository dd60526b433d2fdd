//! Artifact persistence for Atelier.
//!
//! Media the model runtime returns as base64 is decoded and written under the
//! static root, where the gateway serves it by file name.

mod artifact;

pub use artifact::{ArtifactStore, PersistedArtifact, decode_base64};
