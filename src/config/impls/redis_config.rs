use crate::common::common::{resolve_string, resolve_u16, resolve_u64};
use crate::config::structs::redis_config::RedisConfig;

/// Connect and read timeouts are fixed, the drop-in offers no env override.
const TIMEOUT_SECS: u64 = 1;

impl RedisConfig {
    /// Resolves the Redis fragment from the process environment.
    pub fn from_env() -> RedisConfig {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolution core, parameterized over the variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> RedisConfig {
        RedisConfig {
            host: resolve_string(lookup("WP_REDIS_HOST"), "redis"),
            port: resolve_u16(lookup("WP_REDIS_PORT"), 6379),
            database: resolve_u64(lookup("WP_REDIS_DATABASE"), 0),
            timeout: TIMEOUT_SECS,
            read_timeout: TIMEOUT_SECS,
            prefix: resolve_string(lookup("WP_REDIS_PREFIX"), "wp"),
            password: lookup("WP_REDIS_PASSWORD").filter(|value| !value.is_empty()),
            cache_enabled: true,
        }
    }
}
