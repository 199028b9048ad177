use rootwalk_domain::{NameBinding, RecordType, Trace, TraceEntry};

/// Collects the steps of one resolution in order.
#[derive(Debug, Default)]
pub struct TraceRecorder {
    entries: Trace,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, queried_server: NameBinding, query_type: RecordType, response: NameBinding) {
        self.entries
            .push(TraceEntry::new(queried_server, query_type, response));
    }

    pub fn record_cache_hit(&mut self, query_type: RecordType, response: NameBinding) {
        self.entries.push(TraceEntry::from_cache(query_type, response));
    }

    pub fn finish(self) -> Trace {
        self.entries
    }
}
