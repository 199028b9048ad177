//! Adapters behind the application ports: wire codec and transports,
//! in-memory cache tables, system clock and root bootstrap.
pub mod dns;
pub mod system;
