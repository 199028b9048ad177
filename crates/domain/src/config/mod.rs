//! Configuration module for rootwalk
//!
//! - `root`: Main configuration and CLI overrides
//! - `server`: HTTP binding
//! - `resolver`: Root bootstrap, transport and walk limits
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::{ResolverConfig, TransportProtocol};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
