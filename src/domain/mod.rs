//! Registrable domain resolution.
//!
//! This module resolves cleaned domain strings to their registrable domain
//! using the Public Suffix List (PSL): the public suffix plus the one label
//! immediately to its left (e.g. `example.co.uk` from `www.example.co.uk`).
//!
//! All suffix-matching logic, including wildcard rules like `*.ck` and
//! exception rules like `!www.ck`, is owned by the `psl` crate.

use psl::{List, Psl};

/// Resolves a domain string to its registrable domain.
///
/// # Arguments
///
/// * `list` - The Public Suffix List instance
/// * `raw` - The cleaned domain string
///
/// # Returns
///
/// The registrable domain (e.g., "example.co.uk" from "www.example.co.uk"),
/// or `None` as the failure marker when the string has no registrable domain.
///
/// A failure is a per-item result, never a fatal condition: empty strings,
/// strings without a dot, strings with whitespace, and bare public suffixes
/// all yield `None` rather than an error or panic.
pub fn resolve(list: &List, raw: &str) -> Option<String> {
    // The PSL lookup is lenient, so reject obvious non-domains first
    if raw.is_empty()
        || raw.chars().any(|c| c.is_whitespace())
        || !raw.contains('.')
        || raw.starts_with('.')
        || raw.ends_with('.')
    {
        return None;
    }

    // Domain names are case-insensitive; the list is lowercase
    let candidate = raw.to_lowercase();

    let domain = list.domain(candidate.as_bytes())?;
    Some(String::from_utf8_lossy(domain.as_bytes()).to_string())
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
