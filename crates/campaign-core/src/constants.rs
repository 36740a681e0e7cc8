/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of redirect hops followed from a deleted event.
pub const MAX_REDIRECT_DEPTH: usize = 20;

/// Default log level when neither config nor `RUST_LOG` sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";
