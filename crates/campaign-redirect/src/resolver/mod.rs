//! RedirectResolver: picks the event that should actually run in place of a
//! deleted one.

mod chain_walk;
pub mod collection;

use std::collections::HashSet;

use campaign_core::config::RedirectConfig;
use campaign_core::{CampaignEvent, EventId, IEventLookup};
use tracing::debug;

use self::collection::{install, EventCollection};

/// Why a redirect chain walk stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChainOutcome<'g> {
    /// The starting event does not need redirection.
    NotRedirected,
    /// The chain ends at a live event after `hops` links.
    Resolved {
        target: &'g CampaignEvent,
        hops: usize,
    },
    /// A deleted event in the chain has no (existing) replacement.
    DeadEnd { at: EventId },
    /// The chain is longer than the configured maximum depth.
    DepthExceeded { at: EventId, depth: usize },
    /// The chain revisits an event.
    CycleDetected { at: EventId },
}

impl<'g> ChainOutcome<'g> {
    /// The replacement event, if the chain resolved.
    pub fn target(&self) -> Option<&'g CampaignEvent> {
        match self {
            Self::Resolved { target, .. } => Some(*target),
            _ => None,
        }
    }
}

/// Follows redirect chains through a campaign's events.
///
/// The resolver only reads the campaign. Each call carries its own visited
/// set and depth counter, so a resolver can be reused freely.
pub struct RedirectResolver<'g> {
    lookup: &'g dyn IEventLookup,
    config: RedirectConfig,
}

impl<'g> RedirectResolver<'g> {
    pub fn new(lookup: &'g dyn IEventLookup) -> Self {
        Self {
            lookup,
            config: RedirectConfig::default(),
        }
    }

    pub fn with_config(mut self, config: RedirectConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.config.max_depth
    }

    /// Walk the redirect chain from `event` and report how it ended.
    pub fn trace(&self, event: &CampaignEvent) -> ChainOutcome<'g> {
        let span = campaign_observability::redirect_span!(event.id);
        let _guard = span.enter();
        let mut visited = HashSet::new();
        chain_walk::walk(self.lookup, event, &mut visited, 1, self.config.max_depth)
    }

    /// The live event that replaces `event`, if its chain resolves.
    pub fn find_replacement(&self, event: &CampaignEvent) -> Option<&'g CampaignEvent> {
        self.trace(event).target()
    }

    /// The event that should run in place of `event`.
    ///
    /// Returns `event` itself when it needs no redirection or when its chain
    /// cannot be resolved (cycle, depth limit, dead end).
    pub fn resolve<'a>(&self, event: &'a CampaignEvent) -> &'a CampaignEvent
    where
        'g: 'a,
    {
        match self.find_replacement(event) {
            Some(replacement) => {
                self.log_redirection(event, replacement);
                replacement
            }
            None => event,
        }
    }

    /// Like [`resolve`](Self::resolve), and on success also overwrites
    /// `collection[key]` with the replacement.
    pub fn resolve_into<'a, K>(
        &self,
        event: &'a CampaignEvent,
        collection: &mut EventCollection<K>,
        key: K,
    ) -> &'a CampaignEvent
    where
        'g: 'a,
        K: std::hash::Hash + Eq,
    {
        match self.find_replacement(event) {
            Some(replacement) => {
                install(collection, key, replacement);
                self.log_redirection(event, replacement);
                replacement
            }
            None => event,
        }
    }

    fn log_redirection(&self, original: &CampaignEvent, replacement: &CampaignEvent) {
        if self.config.log_redirections {
            debug!(
                original_id = %original.id,
                replacement_id = %replacement.id,
                "redirected event {} to {}",
                original.id,
                replacement.id
            );
        }
    }
}
