//! Domain error types.

use std::fmt;

use thiserror::Error;

use crate::editor::EditorId;
use crate::issue::IssueId;
use crate::newspaper::PaperId;
use crate::subscriber::SubscriberId;

/// The kind of record an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Newspaper,
    Issue,
    Editor,
    Subscriber,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::Newspaper => "newspaper",
            Entity::Issue => "issue",
            Entity::Editor => "editor",
            Entity::Subscriber => "subscriber",
        };
        f.write_str(name)
    }
}

/// Top-level domain error type.
///
/// Every registry operation fails synchronously with one of these kinds
/// before mutating shared state (editor-removal redistribution excepted,
/// which is best-effort).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AgencyError {
    /// A referenced record does not exist.
    #[error("{entity} with ID {id} was not found")]
    NotFound {
        /// The kind of record that was looked up.
        entity: Entity,
        /// The identity that failed to resolve.
        id: u32,
    },

    /// A create collided with an existing identity.
    #[error("{entity} with ID {id} already exists")]
    IdTaken {
        /// The kind of record being created.
        entity: Entity,
        /// The identity that is already in use.
        id: u32,
    },

    /// A create collided with an existing record under value equality.
    #[error("an identical {entity} already exists")]
    Duplicate {
        /// The kind of record being created.
        entity: Entity,
    },

    /// ID probing ran off the end of the `u32` space without finding a
    /// free identity.
    #[error("no free {0} ID at or above the requested one")]
    IdExhausted(Entity),

    /// An update carried no change under value equality.
    #[error("{entity} with ID {id} is already up to date")]
    NoChange {
        /// The kind of record being updated.
        entity: Entity,
        /// The identity of the unchanged record.
        id: u32,
    },

    /// The issue has already been released; a release is one-way.
    #[error("issue {0} has already been released")]
    AlreadyReleased(IssueId),

    /// The issue cannot be released without an assigned editor.
    #[error("issue {0} has no editor assigned yet")]
    MissingEditor(IssueId),

    /// The issue already has an editor; assignment is permanent.
    #[error("editor {editor_id} is already assigned to issue {issue_id}")]
    AlreadyAssigned {
        /// The issue that already has an editor.
        issue_id: IssueId,
        /// The editor currently assigned.
        editor_id: EditorId,
    },

    /// The subscriber already subscribes to the newspaper.
    #[error("subscriber {subscriber_id} already subscribes to newspaper {paper_id}")]
    AlreadySubscribed {
        /// The subscriber attempting to subscribe.
        subscriber_id: SubscriberId,
        /// The newspaper already subscribed to.
        paper_id: PaperId,
    },

    /// The issue was already delivered to this subscriber.
    #[error("issue {0} has already been delivered")]
    AlreadyDelivered(IssueId),

    /// The issue has not been released and cannot be delivered.
    #[error("issue {0} has not been released yet")]
    NotReleased(IssueId),
}
