//! Directed graph of redirect links, one edge per deleted event that points
//! at an existing replacement.

use std::collections::HashMap;

use campaign_core::EventId;
use petgraph::graph::{DiGraph, NodeIndex};

use super::CampaignGraph;

/// petgraph projection of a campaign's redirect links with an id index.
pub struct RedirectGraph {
    pub graph: DiGraph<EventId, ()>,
    index: HashMap<EventId, NodeIndex>,
}

impl RedirectGraph {
    /// Project every event as a node and every resolvable redirect link as an
    /// edge. Links to missing events are skipped.
    pub fn build(campaign: &CampaignGraph) -> Self {
        let mut graph = DiGraph::with_capacity(campaign.len(), campaign.len());
        let mut index = HashMap::with_capacity(campaign.len());

        for event in campaign.events() {
            index.insert(event.id, graph.add_node(event.id));
        }
        for event in campaign.events() {
            let Some(target) = event.redirect_event else {
                continue;
            };
            if let (Some(&src), Some(&tgt)) = (index.get(&event.id), index.get(&target)) {
                graph.add_edge(src, tgt, ());
            }
        }

        Self { graph, index }
    }

    pub fn get_node(&self, id: EventId) -> Option<NodeIndex> {
        self.index.get(&id).copied()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
