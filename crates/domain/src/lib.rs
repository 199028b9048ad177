//! rootwalk domain layer
pub mod config;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod name_binding;
pub mod trace;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{RecordData, RecordType, ResourceRecord};
pub use domain_name::{is_within, normalize_fqdn, suffix_chain, to_fqdn_lossy};
pub use errors::DomainError;
pub use name_binding::NameBinding;
pub use trace::{Trace, TraceEntry};
