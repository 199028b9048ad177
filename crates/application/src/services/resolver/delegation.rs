use super::{IterativeResolver, TraceRecorder};
use crate::ports::QueryResponse;
use rootwalk_domain::{is_within, DomainError, NameBinding, RecordData, RecordType};
use tracing::{debug, warn};

/// The NS referral chosen from an authority section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Delegation<'a> {
    /// Owner name of the NS records (the delegation point)
    pub zone: &'a str,
    pub ttl: u32,
    /// NS targets in the order the server listed them
    pub nameservers: Vec<&'a str>,
}

/// Pick the most specific delegation covering `target`.
///
/// Ties between owner names of equal length go to the first one listed.
pub(crate) fn select_delegation<'a>(
    target: &str,
    response: &'a QueryResponse,
) -> Option<Delegation<'a>> {
    let mut best: Option<&'a str> = None;
    for record in &response.authority {
        if !matches!(record.data, RecordData::NS(_)) || !is_within(target, &record.owner) {
            continue;
        }
        if best.map_or(true, |zone| record.owner.len() > zone.len()) {
            best = Some(&record.owner);
        }
    }
    let zone = best?;

    let mut ttl = u32::MAX;
    let mut nameservers = Vec::new();
    for record in &response.authority {
        if let RecordData::NS(ref nameserver) = record.data {
            if &*record.owner == zone {
                ttl = ttl.min(record.ttl);
                nameservers.push(&**nameserver);
            }
        }
    }

    Some(Delegation {
        zone,
        ttl,
        nameservers,
    })
}

impl IterativeResolver {
    /// Follow referrals for `target` until a server answers for it.
    ///
    /// Returns the authoritative server. Each referral is written to the
    /// authority cache and recorded in `trace`.
    pub(super) async fn walk_delegations(
        &self,
        target: &str,
        need_trace: bool,
        depth: usize,
        trace: &mut TraceRecorder,
    ) -> Result<NameBinding, DomainError> {
        let mut current = self.starting_server(target, need_trace, trace).await?;
        let mut previous: Option<NameBinding> = None;
        let mut referrals = 0usize;

        // A referral that names the server just queried is a fixed point.
        while previous
            .as_ref()
            .map_or(true, |prev| prev.name != current.name)
        {
            if referrals >= self.limits.max_referrals {
                return Err(DomainError::DelegationLoop {
                    name: target.to_string(),
                    limit: self.limits.max_referrals,
                });
            }

            let server_ip = current
                .address
                .ok_or_else(|| DomainError::UnresolvableNameserver(current.name.to_string()))?;
            let queried_at = self.clock.now_secs();
            let response = self
                .transport
                .send_query(target, RecordType::NS, server_ip)
                .await
                .inspect_err(|e| warn!(server = %current.name, error = %e, "NS query failed"))?;

            if response.is_final_answer() {
                debug!(server = %current.name, "Server answered NS query directly");
                break;
            }
            if response.is_soa_only() {
                debug!(server = %current.name, "SOA in authority, server is authoritative");
                break;
            }

            let delegation =
                select_delegation(target, &response).ok_or_else(|| DomainError::NoDelegation {
                    name: target.to_string(),
                    server: current.name.to_string(),
                })?;

            let next = self
                .delegated_server(&delegation, &response, queried_at, depth)
                .await?;

            if delegation.zone != "." {
                self.authority_cache.store(delegation.zone, next.clone());
            }

            debug!(
                target = %target,
                server = %current.name,
                zone = %delegation.zone,
                next = %next.name,
                ttl = ?next.ttl,
                "Referral"
            );

            referrals += 1;
            let prev = std::mem::replace(&mut current, next);
            trace.record(prev.clone(), RecordType::NS, current.clone());
            previous = Some(prev);
        }

        Ok(current)
    }

    async fn starting_server(
        &self,
        target: &str,
        need_trace: bool,
        trace: &mut TraceRecorder,
    ) -> Result<NameBinding, DomainError> {
        if !need_trace {
            if let Some((server, zone)) = self.authority_cache.lookup(target) {
                debug!(target = %target, zone = %zone, server = %server.name, "Authority cache HIT");
                trace.record_cache_hit(RecordType::NS, server.clone());
                return Ok(server);
            }
        }

        let root_ip = self.bootstrap.root_address(&self.root_server).await?;
        Ok(NameBinding::server(self.root_server.clone(), root_ip))
    }

    /// Address of the server a referral points to, with the combined TTL of
    /// the NS record and the address.
    async fn delegated_server(
        &self,
        delegation: &Delegation<'_>,
        response: &QueryResponse,
        queried_at: u64,
        depth: usize,
    ) -> Result<NameBinding, DomainError> {
        for &nameserver in &delegation.nameservers {
            if let Some((ip, glue_ttl)) = response.glue_for(nameserver) {
                return Ok(NameBinding::resolved(
                    nameserver,
                    ip,
                    delegation.ttl.min(glue_ttl),
                    queried_at,
                ));
            }
        }

        let nameserver = *delegation
            .nameservers
            .first()
            .ok_or_else(|| DomainError::UnresolvableNameserver(delegation.zone.to_string()))?;
        warn!(zone = %delegation.zone, nameserver = %nameserver, "Glueless delegation, resolving nameserver");

        let resolved = self.resolve_nested(nameserver, depth).await?;
        match (resolved.address, resolved.ttl, resolved.acquired_at) {
            (Some(ip), Some(ttl), Some(acquired_at)) => Ok(NameBinding::resolved(
                nameserver,
                ip,
                delegation.ttl.min(ttl),
                acquired_at,
            )),
            _ => Err(DomainError::UnresolvableNameserver(nameserver.to_string())),
        }
    }
}
