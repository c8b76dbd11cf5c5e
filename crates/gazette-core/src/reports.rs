//! Structured, read-only reports derived from registry state.
//!
//! These are plain result records; the HTTP adapter decides how to render
//! them. None of them hold references into the registry.

use serde::Serialize;

use crate::issue::IssueId;
use crate::newspaper::PaperId;

/// Revenue figures for a single newspaper.
#[derive(Debug, Clone, Serialize)]
pub struct NewspaperStats {
    pub subscriber_count: usize,
    /// `subscriber_count × price`.
    pub monthly_revenue: f64,
    /// `monthly_revenue × 12`.
    pub annual_revenue: f64,
}

/// How many issues of one subscribed paper were delivered to a subscriber.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveredCount {
    /// Name of the subscribed newspaper.
    pub newspaper: String,
    pub count: usize,
}

/// A delivered issue whose newspaper the subscriber is not subscribed to.
#[derive(Debug, Clone, Serialize)]
pub struct SpecialIssue {
    pub issue_id: IssueId,
    pub newspaper_id: PaperId,
    /// Name of the issue's newspaper.
    pub newspaper: String,
}

/// Subscription and delivery summary for a single subscriber.
///
/// Special issues are not included in the cost figures; they are assumed
/// to be paid for directly.
#[derive(Debug, Clone, Serialize)]
pub struct SubscriberStats {
    pub subscription_count: usize,
    /// Sum of the subscribed papers' monthly prices.
    pub monthly_cost: f64,
    /// `monthly_cost × 12`.
    pub annual_cost: f64,
    /// Per subscribed paper with at least one delivery, the delivery count.
    pub issues_received: Vec<DeliveredCount>,
    /// Delivered issues without a matching subscription.
    pub special_issues: Vec<SpecialIssue>,
}

/// Released but undelivered issues of one subscribed newspaper.
#[derive(Debug, Clone, Serialize)]
pub struct MissingIssues {
    /// Name of the subscribed newspaper.
    pub newspaper: String,
    pub issue_ids: Vec<IssueId>,
}
