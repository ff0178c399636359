use serde::{Deserialize, Serialize};
use crate::config::structs::memcached_server::MemcachedServer;

/// Settings of the Memcached object cache fragment.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MemcachedConfig {
    /// Salt prepended to every cache key, keeps sites on a shared pool apart.
    pub key_salt: String,
    pub servers: Vec<MemcachedServer>,
    /// The `WP_CACHE` flag handed to WordPress.
    pub cache_enabled: bool,
}

impl Default for MemcachedConfig {
    fn default() -> Self {
        Self {
            key_salt: "wp_".to_string(),
            servers: vec![MemcachedServer {
                host: "memcached".to_string(),
                port: 11211,
            }],
            cache_enabled: true,
        }
    }
}
