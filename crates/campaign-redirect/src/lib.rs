//! # campaign-redirect
//!
//! Resolves deleted campaign events to the event contacts should run instead.
//!
//! A deleted event may point at a replacement, which may itself be deleted.
//! [`RedirectResolver`] follows that chain with a visited set and a depth
//! bound, so malformed campaigns (cycles, runaway chains, dangling links)
//! fall back to the original event instead of blocking execution.

pub mod graph;
pub mod resolver;

pub use graph::audit::{audit, AuditReport};
pub use graph::CampaignGraph;
pub use resolver::collection::{EventCollection, RedirectSummary};
pub use resolver::{ChainOutcome, RedirectResolver};
