//! Route modules, one per namespace of the API.

use serde::Serialize;

pub mod editor;
pub mod health;
pub mod newspaper;
pub mod subscriber;

/// Plain confirmation body returned by delete, subscribe, and deliver
/// endpoints.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}
