//! The agency registry.
//!
//! A single `Agency` value owns every newspaper (with its issues), editor,
//! and subscriber, plus the operations that create, mutate, relate, and
//! query them. All operations are synchronous in-process calls; callers are
//! expected to serialize access externally (the HTTP adapter holds the
//! registry behind one lock).

use tracing::debug;

use crate::editor::{Editor, EditorId};
use crate::error::{AgencyError, Entity};
use crate::issue::{Issue, IssueId};
use crate::newspaper::{Newspaper, PaperId};
use crate::reports::{
    DeliveredCount, MissingIssues, NewspaperStats, SpecialIssue, SubscriberStats,
};
use crate::subscriber::{Subscriber, SubscriberId};

/// The in-memory newspaper-agency registry.
#[derive(Debug, Default)]
pub struct Agency {
    newspapers: Vec<Newspaper>,
    editors: Vec<Editor>,
    subscribers: Vec<Subscriber>,
}

impl Agency {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn paper_index(&self, paper_id: PaperId) -> Result<usize, AgencyError> {
        self.newspapers
            .iter()
            .position(|p| p.paper_id == paper_id)
            .ok_or(AgencyError::NotFound {
                entity: Entity::Newspaper,
                id: paper_id,
            })
    }

    fn issue_index(paper: &Newspaper, issue_id: IssueId) -> Result<usize, AgencyError> {
        paper
            .issues
            .iter()
            .position(|i| i.issue_id == issue_id)
            .ok_or(AgencyError::NotFound {
                entity: Entity::Issue,
                id: issue_id,
            })
    }

    fn editor_index(&self, editor_id: EditorId) -> Result<usize, AgencyError> {
        self.editors
            .iter()
            .position(|e| e.id == editor_id)
            .ok_or(AgencyError::NotFound {
                entity: Entity::Editor,
                id: editor_id,
            })
    }

    fn subscriber_index(&self, subscriber_id: SubscriberId) -> Result<usize, AgencyError> {
        self.subscribers
            .iter()
            .position(|s| s.id == subscriber_id)
            .ok_or(AgencyError::NotFound {
                entity: Entity::Subscriber,
                id: subscriber_id,
            })
    }

    // --- Newspapers -------------------------------------------------------

    /// Registers a new newspaper.
    ///
    /// # Errors
    ///
    /// Returns [`AgencyError::Duplicate`] if a paper with the same listing
    /// (name, frequency, price) exists, or [`AgencyError::IdTaken`] on an
    /// identity collision.
    pub fn add_newspaper(&mut self, paper: Newspaper) -> Result<&Newspaper, AgencyError> {
        for existing in &self.newspapers {
            if existing.same_listing(&paper) {
                return Err(AgencyError::Duplicate {
                    entity: Entity::Newspaper,
                });
            }
            if existing.paper_id == paper.paper_id {
                return Err(AgencyError::IdTaken {
                    entity: Entity::Newspaper,
                    id: paper.paper_id,
                });
            }
        }
        self.newspapers.push(paper);
        let idx = self.newspapers.len() - 1;
        Ok(&self.newspapers[idx])
    }

    /// Looks up a newspaper by ID.
    #[must_use]
    pub fn newspaper(&self, paper_id: PaperId) -> Option<&Newspaper> {
        self.newspapers.iter().find(|p| p.paper_id == paper_id)
    }

    /// All newspapers, in registration order.
    #[must_use]
    pub fn newspapers(&self) -> &[Newspaper] {
        &self.newspapers
    }

    /// Replaces a newspaper's listing fields. The paper's issues and
    /// subscriber set always carry over to the replacement.
    ///
    /// # Errors
    ///
    /// Returns [`AgencyError::NotFound`] if the paper does not exist, or
    /// [`AgencyError::NoChange`] if the replacement has the same listing.
    pub fn update_newspaper(
        &mut self,
        paper_id: PaperId,
        mut updated: Newspaper,
    ) -> Result<&Newspaper, AgencyError> {
        let idx = self.paper_index(paper_id)?;
        if self.newspapers[idx].same_listing(&updated) {
            return Err(AgencyError::NoChange {
                entity: Entity::Newspaper,
                id: paper_id,
            });
        }
        let old = &mut self.newspapers[idx];
        updated.paper_id = paper_id;
        updated.issues = std::mem::take(&mut old.issues);
        updated.subscribers = std::mem::take(&mut old.subscribers);
        *old = updated;
        Ok(&self.newspapers[idx])
    }

    /// Deletes a newspaper. Editor and subscriber back-references to its
    /// issues are left in place and skipped by the report queries.
    ///
    /// # Errors
    ///
    /// Returns [`AgencyError::NotFound`] if the paper does not exist.
    pub fn remove_newspaper(&mut self, paper_id: PaperId) -> Result<Newspaper, AgencyError> {
        let idx = self.paper_index(paper_id)?;
        Ok(self.newspapers.remove(idx))
    }

    /// Smallest free paper ID ≥ `candidate`, by linear probing upward.
    /// Gaps below the candidate are never reused.
    ///
    /// # Errors
    ///
    /// Returns [`AgencyError::IdExhausted`] if the probe runs past
    /// `u32::MAX` without finding a free ID.
    pub fn next_paper_id(&self, candidate: PaperId) -> Result<PaperId, AgencyError> {
        let mut id = candidate;
        while self.newspapers.iter().any(|p| p.paper_id == id) {
            id = id
                .checked_add(1)
                .ok_or(AgencyError::IdExhausted(Entity::Newspaper))?;
        }
        Ok(id)
    }

    // --- Issues -----------------------------------------------------------

    /// Adds an issue to a newspaper. The issue's `newspaper_id` is forced to
    /// the target paper. If the issue arrives with an editor assigned, that
    /// editor must exist and receives the issue in their list.
    ///
    /// # Errors
    ///
    /// Returns [`AgencyError::NotFound`] for an unknown paper or editor,
    /// [`AgencyError::Duplicate`] if an issue with identical content exists,
    /// or [`AgencyError::IdTaken`] on an `issue_id` collision within the
    /// paper.
    pub fn add_issue(&mut self, paper_id: PaperId, mut issue: Issue) -> Result<&Issue, AgencyError> {
        let idx = self.paper_index(paper_id)?;
        issue.newspaper_id = paper_id;
        for existing in &self.newspapers[idx].issues {
            if existing.same_content(&issue) {
                return Err(AgencyError::Duplicate {
                    entity: Entity::Issue,
                });
            }
            if existing.issue_id == issue.issue_id {
                return Err(AgencyError::IdTaken {
                    entity: Entity::Issue,
                    id: issue.issue_id,
                });
            }
        }
        if let Some(editor_id) = issue.editor_id {
            let key = issue.key();
            let editor_idx = self.editor_index(editor_id)?;
            self.editors[editor_idx].issues.push(key);
        }
        let paper = &mut self.newspapers[idx];
        paper.issues.push(issue);
        let last = paper.issues.len() - 1;
        Ok(&paper.issues[last])
    }

    /// Looks up an issue within a newspaper.
    #[must_use]
    pub fn issue(&self, paper_id: PaperId, issue_id: IssueId) -> Option<&Issue> {
        self.newspaper(paper_id)?
            .issues
            .iter()
            .find(|i| i.issue_id == issue_id)
    }

    /// Replaces an issue's content. Identity and one-way state always carry
    /// forward: an update can neither revert a release nor clear an editor
    /// assignment. A changed assignment moves the issue from the previous
    /// editor's list to the new editor's list.
    ///
    /// # Errors
    ///
    /// Returns [`AgencyError::NotFound`] for an unknown paper, issue, or
    /// referenced editor, or [`AgencyError::NoChange`] if the normalized
    /// replacement equals the current record.
    pub fn update_issue(
        &mut self,
        paper_id: PaperId,
        issue_id: IssueId,
        mut updated: Issue,
    ) -> Result<&Issue, AgencyError> {
        let paper_idx = self.paper_index(paper_id)?;
        let issue_idx = Self::issue_index(&self.newspapers[paper_idx], issue_id)?;
        let old = self.newspapers[paper_idx].issues[issue_idx].clone();

        updated.issue_id = issue_id;
        updated.newspaper_id = old.newspaper_id;
        updated.released = old.released;
        if updated.editor_id.is_none() {
            updated.editor_id = old.editor_id;
        }

        if old.same_content(&updated) {
            return Err(AgencyError::NoChange {
                entity: Entity::Issue,
                id: issue_id,
            });
        }

        if let Some(new_editor) = updated.editor_id {
            let new_idx = self.editor_index(new_editor)?;
            if old.editor_id != Some(new_editor) {
                let key = old.key();
                if let Some(previous) = old.editor_id {
                    let prev_idx = self.editor_index(previous)?;
                    self.editors[prev_idx].issues.retain(|k| *k != key);
                }
                self.editors[new_idx].issues.push(key);
            }
        }

        self.newspapers[paper_idx].issues[issue_idx] = updated;
        Ok(&self.newspapers[paper_idx].issues[issue_idx])
    }

    /// Deletes an issue from its newspaper and from the assigned editor's
    /// list, if any. A stale assignment (editor already removed) is
    /// tolerated.
    ///
    /// # Errors
    ///
    /// Returns [`AgencyError::NotFound`] for an unknown paper or issue.
    pub fn remove_issue(
        &mut self,
        paper_id: PaperId,
        issue_id: IssueId,
    ) -> Result<Issue, AgencyError> {
        let paper_idx = self.paper_index(paper_id)?;
        let issue_idx = Self::issue_index(&self.newspapers[paper_idx], issue_id)?;
        let issue = self.newspapers[paper_idx].issues.remove(issue_idx);
        if let Some(editor_id) = issue.editor_id {
            if let Some(editor) = self.editors.iter_mut().find(|e| e.id == editor_id) {
                let key = issue.key();
                editor.issues.retain(|k| *k != key);
            }
        }
        Ok(issue)
    }

    /// Marks an issue as released. Releasing is one-way and requires an
    /// assigned editor.
    ///
    /// # Errors
    ///
    /// Returns [`AgencyError::NotFound`] for an unknown paper or issue,
    /// [`AgencyError::AlreadyReleased`] on a repeat release, or
    /// [`AgencyError::MissingEditor`] if no editor is assigned.
    pub fn release_issue(
        &mut self,
        paper_id: PaperId,
        issue_id: IssueId,
    ) -> Result<&Issue, AgencyError> {
        let paper_idx = self.paper_index(paper_id)?;
        let issue_idx = Self::issue_index(&self.newspapers[paper_idx], issue_id)?;
        let issue = &mut self.newspapers[paper_idx].issues[issue_idx];
        if issue.released {
            return Err(AgencyError::AlreadyReleased(issue_id));
        }
        if issue.editor_id.is_none() {
            return Err(AgencyError::MissingEditor(issue_id));
        }
        issue.released = true;
        Ok(&self.newspapers[paper_idx].issues[issue_idx])
    }

    /// Assigns an editor to an unassigned issue. Assignment is permanent
    /// for the lifetime of the issue.
    ///
    /// # Errors
    ///
    /// Returns [`AgencyError::NotFound`] for an unknown editor, paper, or
    /// issue, or [`AgencyError::AlreadyAssigned`] if the issue already has
    /// an editor (even the same one).
    pub fn assign_editor(
        &mut self,
        paper_id: PaperId,
        issue_id: IssueId,
        editor_id: EditorId,
    ) -> Result<&Issue, AgencyError> {
        let editor_idx = self.editor_index(editor_id)?;
        let paper_idx = self.paper_index(paper_id)?;
        let issue_idx = Self::issue_index(&self.newspapers[paper_idx], issue_id)?;
        if let Some(current) = self.newspapers[paper_idx].issues[issue_idx].editor_id {
            return Err(AgencyError::AlreadyAssigned {
                issue_id,
                editor_id: current,
            });
        }
        let issue = &mut self.newspapers[paper_idx].issues[issue_idx];
        issue.editor_id = Some(editor_id);
        let key = issue.key();
        self.editors[editor_idx].issues.push(key);
        Ok(&self.newspapers[paper_idx].issues[issue_idx])
    }

    /// Records the delivery of a released issue to a subscriber. A
    /// subscription is deliberately not required: special issues may be
    /// delivered to non-subscribers.
    ///
    /// # Errors
    ///
    /// Returns [`AgencyError::NotFound`] for an unknown subscriber, paper,
    /// or issue, [`AgencyError::NotReleased`] if the issue has not been
    /// released, or [`AgencyError::AlreadyDelivered`] on a repeat delivery.
    pub fn deliver_issue(
        &mut self,
        subscriber_id: SubscriberId,
        paper_id: PaperId,
        issue_id: IssueId,
    ) -> Result<(), AgencyError> {
        let sub_idx = self.subscriber_index(subscriber_id)?;
        let paper_idx = self.paper_index(paper_id)?;
        let issue_idx = Self::issue_index(&self.newspapers[paper_idx], issue_id)?;
        let issue = &self.newspapers[paper_idx].issues[issue_idx];
        if !issue.released {
            return Err(AgencyError::NotReleased(issue_id));
        }
        let key = issue.key();
        let subscriber = &mut self.subscribers[sub_idx];
        if subscriber.delivered.contains(&key) {
            return Err(AgencyError::AlreadyDelivered(issue_id));
        }
        subscriber.delivered.push(key);
        Ok(())
    }

    /// Smallest free issue ID ≥ `candidate` within the paper.
    ///
    /// # Errors
    ///
    /// Returns [`AgencyError::NotFound`] if the paper does not exist, or
    /// [`AgencyError::IdExhausted`] if the probe runs past `u32::MAX`
    /// without finding a free ID.
    pub fn next_issue_id(
        &self,
        paper_id: PaperId,
        candidate: IssueId,
    ) -> Result<IssueId, AgencyError> {
        let idx = self.paper_index(paper_id)?;
        let paper = &self.newspapers[idx];
        let mut id = candidate;
        while paper.issues.iter().any(|i| i.issue_id == id) {
            id = id
                .checked_add(1)
                .ok_or(AgencyError::IdExhausted(Entity::Issue))?;
        }
        Ok(id)
    }

    // --- Editors ----------------------------------------------------------

    /// Registers a new editor.
    ///
    /// # Errors
    ///
    /// Returns [`AgencyError::Duplicate`] if an editor with the same name
    /// and address exists, or [`AgencyError::IdTaken`] on an identity
    /// collision.
    pub fn add_editor(&mut self, editor: Editor) -> Result<&Editor, AgencyError> {
        for existing in &self.editors {
            if existing.same_details(&editor) {
                return Err(AgencyError::Duplicate {
                    entity: Entity::Editor,
                });
            }
            if existing.id == editor.id {
                return Err(AgencyError::IdTaken {
                    entity: Entity::Editor,
                    id: editor.id,
                });
            }
        }
        self.editors.push(editor);
        let idx = self.editors.len() - 1;
        Ok(&self.editors[idx])
    }

    /// Looks up an editor by ID.
    #[must_use]
    pub fn editor(&self, editor_id: EditorId) -> Option<&Editor> {
        self.editors.iter().find(|e| e.id == editor_id)
    }

    /// All editors, in registration order.
    #[must_use]
    pub fn editors(&self) -> &[Editor] {
        &self.editors
    }

    /// Replaces an editor's personal details; their assigned issues carry
    /// over to the replacement.
    ///
    /// # Errors
    ///
    /// Returns [`AgencyError::NotFound`] if the editor does not exist, or
    /// [`AgencyError::NoChange`] if the replacement has the same details.
    pub fn update_editor(
        &mut self,
        editor_id: EditorId,
        mut updated: Editor,
    ) -> Result<&Editor, AgencyError> {
        let idx = self.editor_index(editor_id)?;
        if self.editors[idx].same_details(&updated) {
            return Err(AgencyError::NoChange {
                entity: Entity::Editor,
                id: editor_id,
            });
        }
        let old = &mut self.editors[idx];
        updated.id = editor_id;
        updated.issues = std::mem::take(&mut old.issues);
        *old = updated;
        Ok(&self.editors[idx])
    }

    /// Deletes an editor and redistributes their outstanding issues: each
    /// issue goes to the first remaining editor who already edits an issue
    /// of the same newspaper (first match, not load-balanced), which also
    /// becomes the issue's new `editor_id`. Issues with no such recipient
    /// keep their now-stale assignment. Redistribution is best-effort and
    /// non-transactional.
    ///
    /// # Errors
    ///
    /// Returns [`AgencyError::NotFound`] if the editor does not exist.
    pub fn remove_editor(&mut self, editor_id: EditorId) -> Result<Editor, AgencyError> {
        let idx = self.editor_index(editor_id)?;
        let editor = self.editors.remove(idx);
        for key in &editor.issues {
            let Some(recipient) = self
                .editors
                .iter_mut()
                .find(|e| e.issues.iter().any(|k| k.newspaper_id == key.newspaper_id))
            else {
                debug!(
                    issue_id = key.issue_id,
                    newspaper_id = key.newspaper_id,
                    "no recipient for orphaned issue, assignment goes stale"
                );
                continue;
            };
            recipient.issues.push(*key);
            let recipient_id = recipient.id;
            if let Some(paper) = self
                .newspapers
                .iter_mut()
                .find(|p| p.paper_id == key.newspaper_id)
            {
                if let Some(issue) = paper.issues.iter_mut().find(|i| i.issue_id == key.issue_id)
                {
                    issue.editor_id = Some(recipient_id);
                }
            }
            debug!(
                issue_id = key.issue_id,
                from = editor.id,
                to = recipient_id,
                "reassigned orphaned issue"
            );
        }
        Ok(editor)
    }

    /// The live issue records assigned to an editor. Keys whose paper has
    /// been deleted are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`AgencyError::NotFound`] if the editor does not exist.
    pub fn editor_issues(&self, editor_id: EditorId) -> Result<Vec<&Issue>, AgencyError> {
        let idx = self.editor_index(editor_id)?;
        Ok(self.editors[idx]
            .issues
            .iter()
            .filter_map(|key| self.issue(key.newspaper_id, key.issue_id))
            .collect())
    }

    /// Smallest free editor ID ≥ `candidate`.
    ///
    /// # Errors
    ///
    /// Returns [`AgencyError::IdExhausted`] if the probe runs past
    /// `u32::MAX` without finding a free ID.
    pub fn next_editor_id(&self, candidate: EditorId) -> Result<EditorId, AgencyError> {
        let mut id = candidate;
        while self.editors.iter().any(|e| e.id == id) {
            id = id
                .checked_add(1)
                .ok_or(AgencyError::IdExhausted(Entity::Editor))?;
        }
        Ok(id)
    }

    // --- Subscribers ------------------------------------------------------

    /// Registers a new subscriber.
    ///
    /// # Errors
    ///
    /// Returns [`AgencyError::IdTaken`] on an identity collision, or
    /// [`AgencyError::Duplicate`] if a subscriber with the same name and
    /// address exists.
    pub fn add_subscriber(&mut self, subscriber: Subscriber) -> Result<&Subscriber, AgencyError> {
        for existing in &self.subscribers {
            if existing.id == subscriber.id {
                return Err(AgencyError::IdTaken {
                    entity: Entity::Subscriber,
                    id: subscriber.id,
                });
            }
            if existing.same_details(&subscriber) {
                return Err(AgencyError::Duplicate {
                    entity: Entity::Subscriber,
                });
            }
        }
        self.subscribers.push(subscriber);
        let idx = self.subscribers.len() - 1;
        Ok(&self.subscribers[idx])
    }

    /// Looks up a subscriber by ID.
    #[must_use]
    pub fn subscriber(&self, subscriber_id: SubscriberId) -> Option<&Subscriber> {
        self.subscribers.iter().find(|s| s.id == subscriber_id)
    }

    /// All subscribers, in registration order.
    #[must_use]
    pub fn subscribers(&self) -> &[Subscriber] {
        &self.subscribers
    }

    /// Replaces a subscriber's personal details; their subscriptions and
    /// delivered issues carry over to the replacement.
    ///
    /// # Errors
    ///
    /// Returns [`AgencyError::NotFound`] if the subscriber does not exist,
    /// or [`AgencyError::NoChange`] if the replacement has the same details.
    pub fn update_subscriber(
        &mut self,
        subscriber_id: SubscriberId,
        mut updated: Subscriber,
    ) -> Result<&Subscriber, AgencyError> {
        let idx = self.subscriber_index(subscriber_id)?;
        if self.subscribers[idx].same_details(&updated) {
            return Err(AgencyError::NoChange {
                entity: Entity::Subscriber,
                id: subscriber_id,
            });
        }
        let old = &mut self.subscribers[idx];
        updated.id = subscriber_id;
        updated.subscriptions = std::mem::take(&mut old.subscriptions);
        updated.delivered = std::mem::take(&mut old.delivered);
        *old = updated;
        Ok(&self.subscribers[idx])
    }

    /// Deletes a subscriber and cancels all their subscriptions (the
    /// subscriber is stripped from every newspaper's subscriber set).
    ///
    /// # Errors
    ///
    /// Returns [`AgencyError::NotFound`] if the subscriber does not exist.
    pub fn remove_subscriber(
        &mut self,
        subscriber_id: SubscriberId,
    ) -> Result<Subscriber, AgencyError> {
        let idx = self.subscriber_index(subscriber_id)?;
        for paper in &mut self.newspapers {
            paper.subscribers.retain(|id| *id != subscriber_id);
        }
        Ok(self.subscribers.remove(idx))
    }

    /// Subscribes a subscriber to a newspaper, updating both sides of the
    /// relationship.
    ///
    /// # Errors
    ///
    /// Returns [`AgencyError::NotFound`] for an unknown subscriber or
    /// paper, or [`AgencyError::AlreadySubscribed`] if the subscription
    /// already exists.
    pub fn subscribe(
        &mut self,
        subscriber_id: SubscriberId,
        paper_id: PaperId,
    ) -> Result<(), AgencyError> {
        let sub_idx = self.subscriber_index(subscriber_id)?;
        let paper_idx = self.paper_index(paper_id)?;
        let paper = &mut self.newspapers[paper_idx];
        if paper.subscribers.contains(&subscriber_id) {
            return Err(AgencyError::AlreadySubscribed {
                subscriber_id,
                paper_id,
            });
        }
        paper.subscribers.push(subscriber_id);
        self.subscribers[sub_idx].subscriptions.push(paper_id);
        Ok(())
    }

    /// Smallest free subscriber ID ≥ `candidate`.
    ///
    /// # Errors
    ///
    /// Returns [`AgencyError::IdExhausted`] if the probe runs past
    /// `u32::MAX` without finding a free ID.
    pub fn next_subscriber_id(&self, candidate: SubscriberId) -> Result<SubscriberId, AgencyError> {
        let mut id = candidate;
        while self.subscribers.iter().any(|s| s.id == id) {
            id = id
                .checked_add(1)
                .ok_or(AgencyError::IdExhausted(Entity::Subscriber))?;
        }
        Ok(id)
    }

    // --- Reports ----------------------------------------------------------

    /// Subscriber count and revenue figures for a newspaper.
    ///
    /// # Errors
    ///
    /// Returns [`AgencyError::NotFound`] if the paper does not exist.
    #[allow(clippy::cast_precision_loss)]
    pub fn newspaper_stats(&self, paper_id: PaperId) -> Result<NewspaperStats, AgencyError> {
        let idx = self.paper_index(paper_id)?;
        let paper = &self.newspapers[idx];
        let subscriber_count = paper.subscribers.len();
        let monthly_revenue = subscriber_count as f64 * paper.price;
        Ok(NewspaperStats {
            subscriber_count,
            monthly_revenue,
            annual_revenue: monthly_revenue * 12.0,
        })
    }

    /// Subscription costs, per-paper delivery counts, and special issues
    /// for a subscriber. Subscribed papers that no longer exist contribute
    /// nothing; special issues of deleted papers are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`AgencyError::NotFound`] if the subscriber does not exist.
    pub fn subscriber_stats(
        &self,
        subscriber_id: SubscriberId,
    ) -> Result<SubscriberStats, AgencyError> {
        let idx = self.subscriber_index(subscriber_id)?;
        let subscriber = &self.subscribers[idx];
        let subscribed: Vec<&Newspaper> = subscriber
            .subscriptions
            .iter()
            .filter_map(|id| self.newspaper(*id))
            .collect();
        let monthly_cost: f64 = subscribed.iter().map(|p| p.price).sum();
        let issues_received = subscribed
            .iter()
            .filter_map(|paper| {
                let count = paper
                    .issues
                    .iter()
                    .filter(|i| subscriber.delivered.contains(&i.key()))
                    .count();
                (count > 0).then(|| DeliveredCount {
                    newspaper: paper.name.clone(),
                    count,
                })
            })
            .collect();
        let special_issues = subscriber
            .delivered
            .iter()
            .filter(|key| !subscriber.subscriptions.contains(&key.newspaper_id))
            .filter_map(|key| {
                self.newspaper(key.newspaper_id).map(|paper| SpecialIssue {
                    issue_id: key.issue_id,
                    newspaper_id: key.newspaper_id,
                    newspaper: paper.name.clone(),
                })
            })
            .collect();
        Ok(SubscriberStats {
            subscription_count: subscriber.subscriptions.len(),
            monthly_cost,
            annual_cost: monthly_cost * 12.0,
            issues_received,
            special_issues,
        })
    }

    /// Released but undelivered issues per subscribed paper, grouped by
    /// paper name. Papers with nothing missing are omitted.
    ///
    /// # Errors
    ///
    /// Returns [`AgencyError::NotFound`] if the subscriber does not exist.
    pub fn missing_issues(
        &self,
        subscriber_id: SubscriberId,
    ) -> Result<Vec<MissingIssues>, AgencyError> {
        let idx = self.subscriber_index(subscriber_id)?;
        let subscriber = &self.subscribers[idx];
        let mut missing = Vec::new();
        for paper in subscriber
            .subscriptions
            .iter()
            .filter_map(|id| self.newspaper(*id))
        {
            let issue_ids: Vec<IssueId> = paper
                .issues
                .iter()
                .filter(|i| i.released && !subscriber.delivered.contains(&i.key()))
                .map(|i| i.issue_id)
                .collect();
            if !issue_ids.is_empty() {
                missing.push(MissingIssues {
                    newspaper: paper.name.clone(),
                    issue_ids,
                });
            }
        }
        Ok(missing)
    }
}
