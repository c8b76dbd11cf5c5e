//! Shared test fixtures for the Gazette registry.

mod fixtures;

pub use fixtures::sample_agency;
