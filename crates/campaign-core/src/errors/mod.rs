mod config_error;
mod graph_error;

pub use config_error::ConfigError;
pub use graph_error::GraphError;

/// Top-level error for the campaign workspace.
#[derive(Debug, thiserror::Error)]
pub enum CampaignError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type CampaignResult<T> = Result<T, CampaignError>;
