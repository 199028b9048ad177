use rootwalk_domain::{NameBinding, TraceEntry};
use serde::{Deserialize, Serialize};

/// Query string of `/get-a-records`. Both fields are optional here so a
/// missing `domain` can be reported in the response body.
#[derive(Deserialize, Debug, Default)]
pub struct ResolveQuery {
    pub domain: Option<String>,
    pub trace: Option<String>,
}

impl ResolveQuery {
    /// Only the literal `true` asks for a full trace.
    pub fn need_trace(&self) -> bool {
        self.trace.as_deref() == Some("true")
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BindingDto {
    pub name: String,
    pub address: Option<String>,
    pub ttl: Option<u32>,
    pub ts: Option<u64>,
}

impl From<NameBinding> for BindingDto {
    fn from(binding: NameBinding) -> Self {
        Self {
            name: binding.name.to_string(),
            address: binding.address.map(|ip| ip.to_string()),
            ttl: binding.ttl,
            ts: binding.acquired_at,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TraceEntryDto {
    pub request_addr: BindingDto,
    pub request_type: String,
    pub response: BindingDto,
}

impl From<TraceEntry> for TraceEntryDto {
    fn from(entry: TraceEntry) -> Self {
        Self {
            request_addr: entry.queried_server.into(),
            request_type: entry.query_type.as_str().to_string(),
            response: entry.response.into(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ResolveResponse {
    Success { response: Vec<TraceEntryDto> },
    Fail { error: String },
}
