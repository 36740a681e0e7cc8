//! Campaign-wide redirect health check.
//!
//! Cycles come from Tarjan's SCC over the redirect projection; unresolvable
//! events come from running the same walk the resolver uses.

use campaign_core::EventId;
use petgraph::algo::tarjan_scc;
use serde::Serialize;

use super::redirect_graph::RedirectGraph;
use super::CampaignGraph;
use crate::resolver::{ChainOutcome, RedirectResolver};

/// Result of auditing a campaign's redirect links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    /// Each redirect cycle as a sorted list of event ids.
    pub cycles: Vec<Vec<EventId>>,
    /// Events whose redirect target does not exist.
    pub dangling: Vec<EventId>,
    /// Deleted events that do not resolve to a live event.
    pub unresolvable: Vec<EventId>,
}

impl AuditReport {
    pub fn is_healthy(&self) -> bool {
        self.cycles.is_empty() && self.dangling.is_empty() && self.unresolvable.is_empty()
    }
}

/// Audit every redirect link in `campaign` with the given depth bound.
pub fn audit(campaign: &CampaignGraph, max_depth: usize) -> AuditReport {
    let span = campaign_observability::audit_span!(campaign.len());
    let _guard = span.enter();
    let projection = RedirectGraph::build(campaign);

    let mut cycles: Vec<Vec<EventId>> = tarjan_scc(&projection.graph)
        .into_iter()
        .filter(|scc| {
            scc.len() > 1 || projection.graph.contains_edge(scc[0], scc[0])
        })
        .map(|scc| {
            let mut ids: Vec<EventId> = scc.into_iter().map(|idx| projection.graph[idx]).collect();
            ids.sort();
            ids
        })
        .collect();
    cycles.sort();

    let dangling = campaign
        .events()
        .filter(|e| e.redirect_event.is_some_and(|t| !campaign.contains(t)))
        .map(|e| e.id)
        .collect();

    let resolver = RedirectResolver::new(campaign).with_max_depth(max_depth);
    let unresolvable = campaign
        .events()
        .filter(|e| e.should_be_redirected())
        .filter(|e| !matches!(resolver.trace(e), ChainOutcome::Resolved { .. }))
        .map(|e| e.id)
        .collect();

    let report = AuditReport {
        cycles,
        dangling,
        unresolvable,
    };
    if !report.is_healthy() {
        tracing::info!(
            cycles = report.cycles.len(),
            dangling = report.dangling.len(),
            unresolvable = report.unresolvable.len(),
            "campaign redirect audit found problems"
        );
    }
    report
}
