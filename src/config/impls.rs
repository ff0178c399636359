//! Implementation blocks for the configuration structs.

/// Resolution of the top-level configuration.
pub mod configuration;

/// Resolution of the Memcached fragment.
pub mod memcached_config;

/// Resolution of the Redis fragment.
pub mod redis_config;
