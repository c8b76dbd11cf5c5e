//! Newspaper records.

use crate::issue::Issue;
use crate::subscriber::SubscriberId;

/// Identity of a newspaper, unique across the registry.
pub type PaperId = u32;

/// A newspaper listing together with its issues and subscriber set.
#[derive(Debug, Clone)]
pub struct Newspaper {
    /// Registry-wide unique identity.
    pub paper_id: PaperId,
    pub name: String,
    /// Publication interval in days (1 for dailies, 7 for weeklies).
    pub frequency: u32,
    /// Monthly subscription price.
    pub price: f64,
    /// Issues of this paper, in insertion order.
    pub issues: Vec<Issue>,
    /// Subscribers with an active subscription, in subscription order.
    pub subscribers: Vec<SubscriberId>,
}

impl Newspaper {
    /// Creates a newspaper with no issues and no subscribers.
    #[must_use]
    pub fn new(paper_id: PaperId, name: impl Into<String>, frequency: u32, price: f64) -> Self {
        Self {
            paper_id,
            name: name.into(),
            frequency,
            price,
            issues: Vec::new(),
            subscribers: Vec::new(),
        }
    }

    /// Value equality over the listing fields (name, frequency, price),
    /// independent of identity. Used for duplicate and no-op detection.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn same_listing(&self, other: &Newspaper) -> bool {
        self.name == other.name && self.frequency == other.frequency && self.price == other.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_listing_ignores_identity() {
        let a = Newspaper::new(1, "Heute", 1, 1.12);
        let b = Newspaper::new(2, "Heute", 1, 1.12);
        assert!(a.same_listing(&b));
    }

    #[test]
    fn test_same_listing_compares_all_listing_fields() {
        let base = Newspaper::new(1, "Heute", 1, 1.12);
        assert!(!base.same_listing(&Newspaper::new(1, "Heute!", 1, 1.12)));
        assert!(!base.same_listing(&Newspaper::new(1, "Heute", 7, 1.12)));
        assert!(!base.same_listing(&Newspaper::new(1, "Heute", 1, 2.12)));
    }
}
