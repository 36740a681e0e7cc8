//! Caller-owned batches of events about to execute.

use std::hash::Hash;

use campaign_core::CampaignEvent;
use indexmap::IndexMap;
use serde::Serialize;

use super::RedirectResolver;

/// Ordered, keyed batch of events. Redirection rewrites single slots in place.
pub type EventCollection<K> = IndexMap<K, CampaignEvent>;

/// Store `replacement` in the `key` slot, keeping the slot's position.
pub fn install<K: Hash + Eq>(
    collection: &mut EventCollection<K>,
    key: K,
    replacement: &CampaignEvent,
) {
    collection.insert(key, replacement.clone());
}

/// Outcome of redirecting a whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectSummary<K> {
    /// Slots whose event was replaced.
    pub redirected: usize,
    /// Slots still holding a deleted event that could not be resolved.
    pub unresolved: Vec<K>,
}

impl<K> Default for RedirectSummary<K> {
    fn default() -> Self {
        Self {
            redirected: 0,
            unresolved: Vec::new(),
        }
    }
}

impl<'g> RedirectResolver<'g> {
    /// Redirect every slot of `collection` that holds a deleted event.
    pub fn resolve_collection<K>(&self, collection: &mut EventCollection<K>) -> RedirectSummary<K>
    where
        K: Hash + Eq + Clone,
    {
        let span = campaign_observability::collection_span!(collection.len());
        let _guard = span.enter();
        let mut summary = RedirectSummary::default();

        for index in 0..collection.len() {
            let Some((key, event)) = collection.get_index(index) else {
                continue;
            };
            if !event.should_be_redirected() {
                continue;
            }
            let key = key.clone();

            match self.find_replacement(event) {
                Some(replacement) => {
                    self.log_redirection(event, replacement);
                    if let Some((_, slot)) = collection.get_index_mut(index) {
                        *slot = replacement.clone();
                    }
                    summary.redirected += 1;
                }
                None => summary.unresolved.push(key),
            }
        }

        summary
    }
}
