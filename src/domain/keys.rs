//! Key layout of the shared keyspace.
//!
//! Forward mappings are keyed by the long URL itself and reverse mappings by
//! the short token. Domain counters live under [`DOMAIN_KEY_PREFIX`].

/// Prefix of every per-domain counter key.
pub const DOMAIN_KEY_PREFIX: &str = "domain:";

/// Builds the counter key for a normalized host, e.g. `domain:example.com`.
pub fn domain_counter_key(host: &str) -> String {
    format!("{DOMAIN_KEY_PREFIX}{host}")
}

/// Extracts the host from a counter key, `None` if the key is not a counter key.
///
/// Normalized hosts never contain `/`, so keys such as `domain://x` are
/// forward mappings sharing the prefix, not counters.
pub fn host_from_counter_key(key: &str) -> Option<&str> {
    key.strip_prefix(DOMAIN_KEY_PREFIX)
        .filter(|host| !host.is_empty() && !host.contains('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_key_roundtrip() {
        let key = domain_counter_key("example.com");
        assert_eq!(key, "domain:example.com");
        assert_eq!(host_from_counter_key(&key), Some("example.com"));
    }

    #[test]
    fn test_host_from_foreign_key() {
        assert_eq!(host_from_counter_key("https://example.com/"), None);
        assert_eq!(host_from_counter_key("1a2b3c4d"), None);
        assert_eq!(host_from_counter_key("domain://evil"), None);
        assert_eq!(host_from_counter_key("domain:"), None);
    }
}
