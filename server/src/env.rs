//! # Process environment snapshot

use std::collections::BTreeMap;

use tracing::debug;

/// # Environment snapshot
///
/// An immutable copy of the process environment. It is captured once at startup and handed to the
/// API router, so handlers never consult ambient global state and tests can substitute their own
/// variables.
///
/// Keys are kept sorted. Variables whose name or value is not valid UTF-8 are not included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Copies the current process environment.
    pub fn capture() -> Self {
        let mut vars = BTreeMap::new();
        for (key, value) in std::env::vars_os() {
            match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => {
                    vars.insert(key, value);
                }
                (Ok(key), Err(_)) => {
                    debug!("skipping environment variable {key}: value is not valid UTF-8");
                }
                (Err(key), _) => {
                    debug!(
                        "skipping environment variable {}: name is not valid UTF-8",
                        key.to_string_lossy()
                    );
                }
            }
        }
        Self { vars }
    }

    /// Returns the raw value of `key`, which may be empty.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Returns the value of `key` only if it is set to a non-empty string.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    /// Whether `key` is set to a non-empty string.
    pub fn is_set(&self, key: &str) -> bool {
        self.get_non_empty(key).is_some()
    }

    /// Variable names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EnvSnapshot;

    #[test]
    fn test_empty_value_is_not_set() {
        let env = EnvSnapshot::from_iter([("A", ""), ("B", "value")]);
        assert_eq!(env.get("A"), Some(""));
        assert_eq!(env.get_non_empty("A"), None);
        assert!(!env.is_set("A"));
        assert!(env.is_set("B"));
        assert!(!env.is_set("C"));
    }

    #[test]
    fn test_values_are_verbatim() {
        let env = EnvSnapshot::from_iter([("A", "  padded value\n")]);
        assert_eq!(env.get_non_empty("A"), Some("  padded value\n"));
    }

    #[test]
    fn test_keys_are_sorted() {
        let env = EnvSnapshot::from_iter([("b", "1"), ("A", "2"), ("a", "3"), ("C", "4")]);
        assert_eq!(env.keys().collect::<Vec<_>>(), ["A", "C", "a", "b"]);
        assert_eq!(env.len(), 4);
    }

    #[test]
    fn test_capture_sees_process_environment() {
        // cargo sets CARGO_* variables for the test process
        let env = EnvSnapshot::capture();
        assert!(!env.is_empty());
    }
}
