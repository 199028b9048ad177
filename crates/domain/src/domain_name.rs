//! Domain name helpers shared by the caches and the delegation walk.
//!
//! Every name handled past the entry point is a lowercase FQDN with a
//! trailing dot, so suffix comparisons reduce to plain string operations.

use crate::DomainError;

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Lowercase `input` and terminate it with a dot.
///
/// Rejects empty names, the bare root, empty inner labels and names that
/// exceed the RFC 1035 length limits.
pub fn normalize_fqdn(input: &str) -> Result<String, DomainError> {
    let trimmed = input.trim();
    let bare = trimmed.strip_suffix('.').unwrap_or(trimmed);

    if bare.is_empty() {
        return Err(DomainError::InvalidDomainName(format!(
            "'{}' is empty or the root",
            input
        )));
    }
    if bare.len() > MAX_NAME_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "'{}' exceeds {} characters",
            input, MAX_NAME_LEN
        )));
    }

    for label in bare.split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' contains an empty label",
                input
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "label '{}' exceeds {} characters",
                label, MAX_LABEL_LEN
            )));
        }
        if label.chars().any(|c| c.is_whitespace()) {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' contains whitespace",
                input
            )));
        }
    }

    let mut fqdn = bare.to_ascii_lowercase();
    fqdn.push('.');
    Ok(fqdn)
}

/// Suffixes of `fqdn` from the full name down to the top-level label,
/// excluding the root.
///
/// `"www.example.com."` yields `["www.example.com.", "example.com.", "com."]`.
pub fn suffix_chain(fqdn: &str) -> Vec<&str> {
    let mut suffixes = Vec::new();
    if fqdn.is_empty() || fqdn == "." {
        return suffixes;
    }

    let mut start = 0;
    while start < fqdn.len() {
        let rest = &fqdn[start..];
        if rest == "." {
            break;
        }
        suffixes.push(rest);
        match rest.find('.') {
            Some(dot) => start += dot + 1,
            None => break,
        }
    }
    suffixes
}

/// Whether `name` equals `zone` or sits below it, comparing whole labels.
pub fn is_within(name: &str, zone: &str) -> bool {
    if zone == "." {
        return true;
    }
    if name == zone {
        return true;
    }
    name.len() > zone.len()
        && name.ends_with(zone)
        && name.as_bytes()[name.len() - zone.len() - 1] == b'.'
}

/// Ensure a trailing dot and lowercase, without validation. Used for names
/// that arrive from the wire.
pub fn to_fqdn_lossy(name: &str) -> String {
    let mut fqdn = name.to_ascii_lowercase();
    if !fqdn.ends_with('.') {
        fqdn.push('.');
    }
    fqdn
}
