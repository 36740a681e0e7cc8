mod event_id;

pub use event_id::EventId;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of campaign step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    #[default]
    Action,
    Decision,
    Condition,
}

/// A single step of a campaign.
///
/// A deleted event keeps its row so contacts already scheduled on it can be
/// moved to `redirect_event`, which may itself be deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignEvent {
    pub id: EventId,
    pub name: String,
    #[serde(default)]
    pub event_type: EventType,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub redirect_event: Option<EventId>,
}

impl CampaignEvent {
    pub fn new(id: impl Into<EventId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            event_type: EventType::default(),
            deleted_at: None,
            redirect_event: None,
        }
    }

    pub fn with_type(mut self, event_type: EventType) -> Self {
        self.event_type = event_type;
        self
    }

    /// Mark the event deleted at `at`.
    pub fn deleted(mut self, at: DateTime<Utc>) -> Self {
        self.deleted_at = Some(at);
        self
    }

    /// Point the event at its replacement.
    pub fn redirect_to(mut self, target: impl Into<EventId>) -> Self {
        self.redirect_event = Some(target.into());
        self
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// True when the event was removed and contacts on it need a replacement.
    pub fn should_be_redirected(&self) -> bool {
        self.is_deleted()
    }
}
