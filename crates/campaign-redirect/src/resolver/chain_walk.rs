//! Redirect chain walk with a visited set and a depth bound.

use std::collections::HashSet;

use campaign_core::{CampaignEvent, EventId, IEventLookup};
use tracing::warn;

use super::ChainOutcome;

/// Walk from `event`, which sits at `depth` hops into the chain.
///
/// Iterative, so stack use is constant whatever `max_depth` is configured.
/// The depth guard is checked before cycle membership. Both stop the walk.
pub(super) fn walk<'g>(
    lookup: &'g dyn IEventLookup,
    event: &CampaignEvent,
    visited: &mut HashSet<EventId>,
    mut depth: usize,
    max_depth: usize,
) -> ChainOutcome<'g> {
    if !event.should_be_redirected() {
        return ChainOutcome::NotRedirected;
    }

    let mut current = event;
    loop {
        if depth > max_depth {
            warn!(
                event_id = %current.id,
                depth,
                max_depth,
                "redirect depth limit reached at event {}",
                current.id
            );
            return ChainOutcome::DepthExceeded {
                at: current.id,
                depth,
            };
        }

        if !visited.insert(current.id) {
            warn!(
                event_id = %current.id,
                depth,
                "redirect cycle detected at event {}",
                current.id
            );
            return ChainOutcome::CycleDetected { at: current.id };
        }

        let Some(next) = lookup.redirect_target(current) else {
            return ChainOutcome::DeadEnd { at: current.id };
        };

        if !next.should_be_redirected() {
            return ChainOutcome::Resolved {
                target: next,
                hops: depth,
            };
        }

        current = next;
        depth += 1;
    }
}
