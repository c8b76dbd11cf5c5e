//! Editor records.

use crate::issue::IssueKey;

/// Identity of an editor, unique across the registry.
pub type EditorId = u32;

/// An editor and the issues they are responsible for.
#[derive(Debug, Clone)]
pub struct Editor {
    /// Registry-wide unique identity.
    pub id: EditorId,
    pub name: String,
    pub address: String,
    /// Issues assigned to this editor across all newspapers, in
    /// assignment order.
    pub issues: Vec<IssueKey>,
}

impl Editor {
    /// Creates an editor with no assigned issues.
    #[must_use]
    pub fn new(id: EditorId, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            issues: Vec::new(),
        }
    }

    /// Value equality over (name, address), independent of identity.
    #[must_use]
    pub fn same_details(&self, other: &Editor) -> bool {
        self.name == other.name && self.address == other.address
    }
}
