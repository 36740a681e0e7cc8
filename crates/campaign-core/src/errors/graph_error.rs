/// Errors raised while building a campaign graph.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("duplicate event id {id}")]
    DuplicateEvent { id: u64 },

    #[error("failed to parse campaign events: {reason}")]
    Parse { reason: String },
}
