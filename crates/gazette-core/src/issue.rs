//! Issue records and issue keys.

use chrono::NaiveDate;

use crate::editor::EditorId;
use crate::newspaper::PaperId;

/// Identity of an issue, unique only within its owning newspaper.
pub type IssueId = u32;

/// One dated publication instance of a newspaper.
#[derive(Debug, Clone)]
pub struct Issue {
    /// Identity, unique within the owning newspaper.
    pub issue_id: IssueId,
    pub release_date: NaiveDate,
    /// One-way flag: flips false → true on release and never reverts.
    pub released: bool,
    /// Assigned editor; `None` until one is assigned, then permanent.
    pub editor_id: Option<EditorId>,
    pub pages: u32,
    /// Back-reference to the owning newspaper.
    pub newspaper_id: PaperId,
}

impl Issue {
    /// Creates an unreleased issue.
    #[must_use]
    pub fn new(
        issue_id: IssueId,
        release_date: NaiveDate,
        editor_id: Option<EditorId>,
        pages: u32,
        newspaper_id: PaperId,
    ) -> Self {
        Self {
            issue_id,
            release_date,
            released: false,
            editor_id,
            pages,
            newspaper_id,
        }
    }

    /// The registry-wide key of this issue.
    #[must_use]
    pub fn key(&self) -> IssueKey {
        IssueKey {
            newspaper_id: self.newspaper_id,
            issue_id: self.issue_id,
        }
    }

    /// Value equality over the content fields, ignoring `issue_id`.
    /// Used for duplicate and no-op detection.
    #[must_use]
    pub fn same_content(&self, other: &Issue) -> bool {
        self.release_date == other.release_date
            && self.released == other.released
            && self.editor_id == other.editor_id
            && self.pages == other.pages
            && self.newspaper_id == other.newspaper_id
    }
}

/// Identifies an issue across the registry. Issue IDs are only unique per
/// paper, so back-references held by editors and subscribers carry the
/// owning paper as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IssueKey {
    pub newspaper_id: PaperId,
    pub issue_id: IssueId,
}
