use serde::{Deserialize, Serialize};
use crate::config::structs::memcached_config::MemcachedConfig;
use crate::config::structs::redis_config::RedisConfig;

/// The full resolved configuration, both fragments side by side.
///
/// Only one fragment is emitted per run; they are alternative backends,
/// not parallel ones, and resolve independently of each other.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub memcached: MemcachedConfig,
    pub redis: RedisConfig,
}
