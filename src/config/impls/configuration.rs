use crate::config::structs::configuration::Configuration;
use crate::config::structs::memcached_config::MemcachedConfig;
use crate::config::structs::redis_config::RedisConfig;

impl Configuration {
    /// Returns the documented default set, no environment consulted.
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            memcached: MemcachedConfig::default(),
            redis: RedisConfig::default(),
        }
    }

    /// Resolves every setting from the process environment.
    pub fn from_env() -> Configuration {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolution core, parameterized over the variable source.
    ///
    /// Both fragments resolve against the same source but never read each
    /// other's variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Configuration {
        Configuration {
            log_level: String::from("info"),
            memcached: MemcachedConfig::from_lookup(&lookup),
            redis: RedisConfig::from_lookup(&lookup),
        }
    }
}
