//! Search configuration.
//!
//! A small immutable struct handed to `QueryService::new` — never read from
//! ambient global state, so the core stays testable without a host
//! framework. [`SearchConfig::from_env`] covers the common deployment path.

pub const DEFAULT_PROVIDER: &str = "substring";
pub const DEFAULT_QUERY_MAX_LENGTH: usize = 256;
pub const DEFAULT_MAX_RESULTS: i64 = 500;

/// Provider selection and limits consumed at call time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Name of the predicate backend, resolved through
    /// [`provider_for`](crate::provider::provider_for).
    pub provider: String,
    /// Maximum accepted query length in characters, measured after
    /// whitespace normalisation. Zero disables the check.
    pub query_max_length: usize,
    /// Result cap hosts pass as the `limit` argument for unpaginated
    /// listings. The service itself never applies it implicitly.
    pub max_results: i64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_PROVIDER.to_string(),
            query_max_length: DEFAULT_QUERY_MAX_LENGTH,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl SearchConfig {
    /// Read `SEARCH_PROVIDER`, `SEARCH_QUERY_MAX_LENGTH` and
    /// `SEARCH_MAX_RESULTS`, falling back to the defaults for unset or
    /// unparsable values.
    pub fn from_env() -> Self {
        Self {
            provider: std::env::var("SEARCH_PROVIDER")
                .unwrap_or_else(|_| DEFAULT_PROVIDER.to_string()),
            query_max_length: env_parsed("SEARCH_QUERY_MAX_LENGTH", DEFAULT_QUERY_MAX_LENGTH),
            max_results: env_parsed("SEARCH_MAX_RESULTS", DEFAULT_MAX_RESULTS),
        }
    }
}

fn env_parsed<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
