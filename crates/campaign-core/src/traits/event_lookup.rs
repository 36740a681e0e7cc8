use crate::event::{CampaignEvent, EventId};

/// Read access to the events of a campaign.
///
/// Redirect resolution only ever reads through this trait; it never writes
/// back into the owning campaign.
pub trait IEventLookup {
    /// Look up an event by id.
    fn get_event(&self, id: EventId) -> Option<&CampaignEvent>;

    /// The event `event` redirects to, if it has one and it exists.
    fn redirect_target(&self, event: &CampaignEvent) -> Option<&CampaignEvent> {
        event.redirect_event.and_then(|id| self.get_event(id))
    }
}

impl IEventLookup for std::collections::HashMap<EventId, CampaignEvent> {
    fn get_event(&self, id: EventId) -> Option<&CampaignEvent> {
        self.get(&id)
    }
}
