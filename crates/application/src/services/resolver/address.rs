use super::{IterativeResolver, TraceRecorder};
use rootwalk_domain::{DomainError, NameBinding, RecordData, RecordType, ResourceRecord};
use rustc_hash::FxHashMap;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{debug, warn};

/// One hop of an answer section: either another name or the address itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainLink {
    Alias { next: Arc<str> },
    Address { ip: Ipv4Addr },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Link {
    pub link: ChainLink,
    pub ttl: u32,
}

/// Where an alias chain ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ChainEnd {
    Resolved {
        ip: Ipv4Addr,
        min_ttl: u32,
        visited: Vec<Arc<str>>,
    },
    /// The last alias points at a name the answer does not contain.
    Dangling {
        next: Arc<str>,
        min_ttl: u32,
        visited: Vec<Arc<str>>,
    },
}

/// Owner name -> link for every A and CNAME answer. The first record of an
/// owner wins.
pub(crate) fn chain_links(answers: &[ResourceRecord]) -> FxHashMap<Arc<str>, Link> {
    let mut links = FxHashMap::default();
    for record in answers {
        let link = match &record.data {
            RecordData::A(ip) => ChainLink::Address { ip: *ip },
            RecordData::CNAME(next) => ChainLink::Alias { next: next.clone() },
            _ => continue,
        };
        links.entry(record.owner.clone()).or_insert(Link {
            link,
            ttl: record.ttl,
        });
    }
    links
}

/// Follow aliases from `target`, keeping the smallest TTL seen.
///
/// `Ok(None)` when the answer has no record for `target` at all.
pub(crate) fn walk_chain(
    target: &str,
    links: &FxHashMap<Arc<str>, Link>,
) -> Result<Option<ChainEnd>, DomainError> {
    let Some((owner, mut current)) = links.get_key_value(target) else {
        return Ok(None);
    };
    let mut visited = vec![owner.clone()];
    let mut min_ttl = current.ttl;

    loop {
        match &current.link {
            ChainLink::Address { ip } => {
                return Ok(Some(ChainEnd::Resolved {
                    ip: *ip,
                    min_ttl,
                    visited,
                }))
            }
            ChainLink::Alias { next } => match links.get_key_value(&**next) {
                Some((owner, link)) => {
                    if visited.iter().any(|seen| seen == owner) {
                        return Err(DomainError::AliasLoop(target.to_string()));
                    }
                    visited.push(owner.clone());
                    min_ttl = min_ttl.min(link.ttl);
                    current = link;
                }
                None => {
                    return Ok(Some(ChainEnd::Dangling {
                        next: next.clone(),
                        min_ttl,
                        visited,
                    }))
                }
            },
        }
    }
}

impl IterativeResolver {
    /// Ask the authoritative server for `target`'s address and record the
    /// outcome as the final trace entry.
    pub(super) async fn resolve_address(
        &self,
        target: &str,
        server: NameBinding,
        depth: usize,
        trace: &mut TraceRecorder,
    ) -> Result<(), DomainError> {
        let server_ip = server
            .address
            .ok_or_else(|| DomainError::UnresolvableNameserver(server.name.to_string()))?;
        let now = self.clock.now_secs();
        let response = self
            .transport
            .send_query(target, RecordType::A, server_ip)
            .await
            .inspect_err(|e| warn!(server = %server.name, error = %e, "A query failed"))?;

        if response.answers.is_empty() {
            debug!(target = %target, server = %server.name, "Empty answer, no address");
            trace.record(server, RecordType::A, NameBinding::negative(target, now));
            return Ok(());
        }

        let links = chain_links(&response.answers);
        let chain_end = walk_chain(target, &links)?.ok_or_else(|| {
            DomainError::MissingAnswerRecord {
                name: target.to_string(),
                server: server.name.to_string(),
            }
        })?;

        let outcome = match chain_end {
            ChainEnd::Resolved {
                ip,
                min_ttl,
                visited,
            } => {
                self.cache_chain(&visited, ip, min_ttl, now);
                NameBinding::resolved(target, ip, min_ttl, now)
            }
            ChainEnd::Dangling {
                next,
                min_ttl,
                visited,
            } => {
                warn!(target = %target, alias = %next, "Alias target outside answer, resolving it");
                let chased = self.resolve_nested(&next, depth).await?;
                match (chased.address, chased.remaining_ttl(now)) {
                    (Some(ip), Some(ttl)) => {
                        let ttl = min_ttl.min(ttl);
                        self.cache_chain(&visited, ip, ttl, now);
                        NameBinding::resolved(target, ip, ttl, now)
                    }
                    _ => NameBinding::negative(target, now),
                }
            }
        };

        debug!(
            target = %target,
            server = %server.name,
            address = ?outcome.address,
            ttl = ?outcome.ttl,
            "Address resolved"
        );
        trace.record(server, RecordType::A, outcome);
        Ok(())
    }

    /// Every name of the chain maps straight to the final address.
    fn cache_chain(&self, visited: &[Arc<str>], ip: Ipv4Addr, ttl: u32, now: u64) {
        for name in visited {
            self.address_cache
                .store(name, NameBinding::resolved(name.clone(), ip, ttl, now));
        }
    }
}
