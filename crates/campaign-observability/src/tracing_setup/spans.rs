//! Span definitions per operation: redirect resolution, collection redirection, audit.

/// Create a span around resolving one event.
#[macro_export]
macro_rules! redirect_span {
    ($event_id:expr) => {
        tracing::debug_span!("campaign.redirect", event_id = %$event_id)
    };
}

/// Create a span around redirecting a whole collection.
#[macro_export]
macro_rules! collection_span {
    ($size:expr) => {
        tracing::info_span!("campaign.redirect_collection", size = $size)
    };
}

/// Create a span around a campaign audit.
#[macro_export]
macro_rules! audit_span {
    ($event_count:expr) => {
        tracing::info_span!("campaign.audit", event_count = $event_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const REDIRECT: &str = "campaign.redirect";
    pub const REDIRECT_COLLECTION: &str = "campaign.redirect_collection";
    pub const AUDIT: &str = "campaign.audit";
}
