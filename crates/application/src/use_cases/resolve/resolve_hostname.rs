use crate::services::IterativeResolver;
use rootwalk_domain::{DomainError, Trace};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, instrument, warn};

pub struct ResolveHostnameUseCase {
    resolver: Arc<IterativeResolver>,
}

impl ResolveHostnameUseCase {
    pub fn new(resolver: Arc<IterativeResolver>) -> Self {
        Self { resolver }
    }

    #[instrument(skip(self), name = "resolve_hostname")]
    pub async fn execute(&self, hostname: &str, need_trace: bool) -> Result<Trace, DomainError> {
        let started = Instant::now();

        match self.resolver.resolve(hostname, need_trace).await {
            Ok(trace) => {
                let outcome = trace.last().map(|entry| &entry.response);
                info!(
                    hostname = %hostname,
                    steps = trace.len(),
                    address = ?outcome.and_then(|binding| binding.address),
                    ttl = ?outcome.and_then(|binding| binding.ttl),
                    negative = outcome.is_some_and(|binding| binding.is_negative()),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Resolution finished"
                );
                Ok(trace)
            }
            Err(e) if e.is_transport_error() => {
                warn!(
                    hostname = %hostname,
                    error = %e,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Resolution failed, upstream unreachable"
                );
                Err(e)
            }
            Err(e) => {
                error!(
                    hostname = %hostname,
                    error = %e,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Resolution failed"
                );
                Err(e)
            }
        }
    }
}
