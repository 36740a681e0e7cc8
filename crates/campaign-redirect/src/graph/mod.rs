//! Campaign event storage and the petgraph projection used for auditing.

pub mod audit;
pub mod redirect_graph;

use campaign_core::errors::{CampaignResult, GraphError};
use campaign_core::{CampaignEvent, EventId, IEventLookup};
use indexmap::IndexMap;

/// The events of one campaign, keyed by id in insertion order.
#[derive(Debug, Clone, Default)]
pub struct CampaignGraph {
    events: IndexMap<EventId, CampaignEvent>,
}

impl CampaignGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from events. Duplicate ids are rejected.
    pub fn from_events(events: impl IntoIterator<Item = CampaignEvent>) -> CampaignResult<Self> {
        let mut graph = Self::new();
        for event in events {
            graph.insert(event)?;
        }
        Ok(graph)
    }

    /// Load a graph from a JSON array of events.
    ///
    /// Redirect targets are not checked here: a link to a missing event is a
    /// dead end for resolution and shows up in [`audit::audit`].
    pub fn from_json(input: &str) -> CampaignResult<Self> {
        let events: Vec<CampaignEvent> =
            serde_json::from_str(input).map_err(|e| GraphError::Parse {
                reason: e.to_string(),
            })?;
        Self::from_events(events)
    }

    pub fn insert(&mut self, event: CampaignEvent) -> Result<(), GraphError> {
        if self.events.contains_key(&event.id) {
            return Err(GraphError::DuplicateEvent { id: event.id.get() });
        }
        self.events.insert(event.id, event);
        Ok(())
    }

    pub fn get(&self, id: EventId) -> Option<&CampaignEvent> {
        self.events.get(&id)
    }

    pub fn contains(&self, id: EventId) -> bool {
        self.events.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> impl Iterator<Item = &CampaignEvent> {
        self.events.values()
    }
}

impl IEventLookup for CampaignGraph {
    fn get_event(&self, id: EventId) -> Option<&CampaignEvent> {
        self.get(id)
    }
}
