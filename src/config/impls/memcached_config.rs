use crate::common::common::{resolve_string, resolve_u16};
use crate::config::structs::memcached_config::MemcachedConfig;
use crate::config::structs::memcached_server::MemcachedServer;

impl MemcachedConfig {
    /// Resolves the Memcached fragment from the process environment.
    pub fn from_env() -> MemcachedConfig {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolution core, parameterized over the variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> MemcachedConfig {
        MemcachedConfig {
            key_salt: resolve_string(lookup("WP_CACHE_KEY_SALT"), "wp_"),
            servers: vec![MemcachedServer {
                host: resolve_string(lookup("MEMCACHED_HOST"), "memcached"),
                port: resolve_u16(lookup("MEMCACHED_PORT"), 11211),
            }],
            cache_enabled: true,
        }
    }
}
