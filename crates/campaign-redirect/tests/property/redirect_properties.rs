//! Property tests for redirect resolution over arbitrary redirect graphs.

use proptest::prelude::*;

use campaign_core::{CampaignEvent, EventId};
use campaign_redirect::{CampaignGraph, ChainOutcome, EventCollection, RedirectResolver};
use test_fixtures::{chain, deleted, live};

/// Build a campaign of `n` events from per-event (deleted, redirect target)
/// choices. Targets may point anywhere, including themselves or missing ids.
fn build_random_campaign(spec: &[(bool, Option<u64>)]) -> CampaignGraph {
    let events = spec.iter().enumerate().map(|(i, &(is_deleted, target))| {
        let id = i as u64;
        let event = if is_deleted { deleted(id, None) } else { live(id) };
        match target {
            Some(t) => event.redirect_to(t),
            None => event,
        }
    });
    CampaignGraph::from_events(events).unwrap()
}

fn campaign_strategy(n: u64) -> impl Strategy<Value = Vec<(bool, Option<u64>)>> {
    prop::collection::vec((any::<bool>(), prop::option::of(0..n + 2)), 1..n as usize)
}

/// Follow redirect links naively with a step cap, as an independent oracle.
fn oracle(graph: &CampaignGraph, start: &CampaignEvent, max_depth: usize) -> EventId {
    if !start.should_be_redirected() {
        return start.id;
    }
    let mut current = start;
    for _ in 0..max_depth {
        let Some(next) = current.redirect_event.and_then(|id| graph.get(id)) else {
            return start.id;
        };
        if !next.should_be_redirected() {
            return next.id;
        }
        current = next;
    }
    start.id
}

proptest! {
    #[test]
    fn resolution_always_terminates_and_matches_oracle(
        spec in campaign_strategy(40),
        max_depth in 1_usize..25,
    ) {
        let graph = build_random_campaign(&spec);
        let resolver = RedirectResolver::new(&graph).with_max_depth(max_depth);
        for event in graph.events() {
            let resolved = resolver.resolve(event);
            prop_assert_eq!(resolved.id, oracle(&graph, event, max_depth));
        }
    }

    #[test]
    fn resolved_events_never_need_redirection_unless_unresolved(
        spec in campaign_strategy(30),
    ) {
        let graph = build_random_campaign(&spec);
        let resolver = RedirectResolver::new(&graph);
        for event in graph.events() {
            let resolved = resolver.resolve(event);
            if resolved.id != event.id {
                prop_assert!(!resolved.should_be_redirected());
            }
        }
    }

    #[test]
    fn resolution_is_idempotent(spec in campaign_strategy(30)) {
        let graph = build_random_campaign(&spec);
        let resolver = RedirectResolver::new(&graph);
        for event in graph.events() {
            prop_assert_eq!(resolver.trace(event), resolver.trace(event));
        }
    }

    #[test]
    fn chains_within_the_bound_resolve(len in 2_u64..=21) {
        let graph = CampaignGraph::from_events(chain(len, true)).unwrap();
        let resolver = RedirectResolver::new(&graph);
        let first = graph.get(EventId(1)).unwrap();
        let outcome = resolver.trace(first);
        prop_assert!(
            matches!(outcome, ChainOutcome::Resolved { hops, .. } if hops == (len - 1) as usize),
            "expected Resolved with {} hops, got {:?}", len - 1, outcome
        );
    }

    #[test]
    fn chains_past_the_bound_leave_the_slot_untouched(len in 22_u64..60) {
        let graph = CampaignGraph::from_events(chain(len, true)).unwrap();
        let resolver = RedirectResolver::new(&graph);
        let first = graph.get(EventId(1)).unwrap();
        let mut collection: EventCollection<u8> = EventCollection::new();
        collection.insert(0, first.clone());

        let resolved = resolver.resolve_into(first, &mut collection, 0);

        prop_assert_eq!(resolved.id, EventId(1));
        prop_assert_eq!(collection[&0u8].id, EventId(1));
    }
}
