use crate::{NameBinding, RecordType};
use serde::{Deserialize, Serialize};

/// One network round trip, or one cache short-circuit, of a resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEntry {
    pub queried_server: NameBinding,
    pub query_type: RecordType,
    pub response: NameBinding,
}

/// Ordered trace; the last entry is the outcome.
pub type Trace = Vec<TraceEntry>;

impl TraceEntry {
    pub fn new(queried_server: NameBinding, query_type: RecordType, response: NameBinding) -> Self {
        Self {
            queried_server,
            query_type,
            response,
        }
    }

    pub fn from_cache(query_type: RecordType, response: NameBinding) -> Self {
        Self::new(NameBinding::cache_marker(), query_type, response)
    }

    pub fn is_cache_hit(&self) -> bool {
        self.queried_server.is_cache_marker()
    }
}
