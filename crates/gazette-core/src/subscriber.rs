//! Subscriber records.

use crate::issue::IssueKey;
use crate::newspaper::PaperId;

/// Identity of a subscriber, unique across the registry.
pub type SubscriberId = u32;

/// A subscriber, their subscriptions, and the issues delivered to them.
///
/// Subscription and delivery are independent: a subscriber may receive a
/// "special" issue of a paper they are not subscribed to.
#[derive(Debug, Clone)]
pub struct Subscriber {
    /// Registry-wide unique identity.
    pub id: SubscriberId,
    pub name: String,
    pub address: String,
    /// Subscribed newspapers, in subscription order.
    pub subscriptions: Vec<PaperId>,
    /// All delivered issues, in delivery order.
    pub delivered: Vec<IssueKey>,
}

impl Subscriber {
    /// Creates a subscriber with no subscriptions and no deliveries.
    #[must_use]
    pub fn new(id: SubscriberId, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            subscriptions: Vec::new(),
            delivered: Vec::new(),
        }
    }

    /// Value equality over (name, address), independent of identity.
    #[must_use]
    pub fn same_details(&self, other: &Subscriber) -> bool {
        self.name == other.name && self.address == other.address
    }
}
