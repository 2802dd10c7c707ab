//! Aggregates shown on the moderation view.

use serde::Serialize;

use crate::claim::STATUS_PENDING;

/// Counts computed from fully fetched lists, not from aggregate queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModerationStats {
    pub pending_claims: usize,
    pub lost_items: usize,
    pub found_items: usize,
}

impl ModerationStats {
    /// Build the stats from claim statuses and the two item list lengths.
    pub fn compute<'a, I>(claim_statuses: I, lost_items: usize, found_items: usize) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let pending_claims = claim_statuses
            .into_iter()
            .filter(|status| *status == STATUS_PENDING)
            .count();
        Self {
            pending_claims,
            lost_items,
            found_items,
        }
    }
}
