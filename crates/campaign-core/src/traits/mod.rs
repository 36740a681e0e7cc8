mod event_lookup;

pub use event_lookup::IEventLookup;
