//! Gazette Core — the newspaper-agency domain model.
//!
//! This crate owns the in-memory registry of newspapers, issues, editors,
//! and subscribers, together with the business rules that relate them.
//! It contains no I/O, no locking, and no wire formats; the HTTP adapter
//! lives in `gazette-api`.

pub mod agency;
pub mod editor;
pub mod error;
pub mod issue;
pub mod newspaper;
pub mod reports;
pub mod subscriber;
