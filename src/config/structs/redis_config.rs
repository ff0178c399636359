use serde::{Deserialize, Serialize};

/// Settings of the Redis object cache fragment.
///
/// The connect and read timeouts are fixed at one second and are not
/// overridable from the environment.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    /// Logical database index.
    pub database: u64,
    pub timeout: u64,
    pub read_timeout: u64,
    /// Prefix applied to every cache key.
    pub prefix: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// The `WP_CACHE` flag handed to WordPress.
    pub cache_enabled: bool,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            host: "redis".to_string(),
            port: 6379,
            database: 0,
            timeout: 1,
            read_timeout: 1,
            prefix: "wp".to_string(),
            password: None,
            cache_enabled: true,
        }
    }
}
