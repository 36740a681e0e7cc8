//! # campaign-core
//!
//! Foundation crate for campaign event redirection.
//! Defines the event model, the lookup trait, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod event;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CampaignConfig;
pub use errors::{CampaignError, CampaignResult};
pub use event::{CampaignEvent, EventId, EventType};
pub use traits::IEventLookup;
