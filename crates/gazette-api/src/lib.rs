//! Gazette HTTP API — axum adapter over the agency registry.
//!
//! This crate translates between the wire (JSON request bodies, path
//! identities, enveloped responses, status codes) and the synchronous
//! domain core in `gazette-core`. All registry access is serialized
//! through the single lock held by [`state::AppState`].

pub mod error;
pub mod routes;
pub mod state;
