//! Client configuration loaded from environment variables.

use std::env;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_LIST_LIMIT: usize = 8;

/// Where the posts service lives and how many posts a load asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub list_limit: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl ClientConfig {
    /// Load configuration from `POSTS_API_URL` and `POSTS_LIST_LIMIT`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like `from_env`, reading through `lookup`. Missing or unparseable
    /// values fall back to the defaults field by field.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            base_url: lookup("POSTS_API_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or(defaults.base_url),
            list_limit: lookup("POSTS_LIST_LIMIT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.list_limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(ClientConfig::from_lookup(lookup(&[])), ClientConfig::default());
    }

    #[test]
    fn values_are_read() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("POSTS_API_URL", "http://127.0.0.1:3000"),
            ("POSTS_LIST_LIMIT", "20"),
        ]));
        assert_eq!(config.base_url, "http://127.0.0.1:3000");
        assert_eq!(config.list_limit, 20);
    }

    #[test]
    fn garbage_limit_falls_back() {
        let config = ClientConfig::from_lookup(lookup(&[("POSTS_LIST_LIMIT", "lots")]));
        assert_eq!(config.list_limit, DEFAULT_LIST_LIMIT);
    }
}
