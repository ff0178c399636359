//! Configuration data structures.

/// Top-level resolved configuration.
pub mod configuration;

/// Memcached fragment settings.
pub mod memcached_config;

/// A single Memcached server address.
pub mod memcached_server;

/// Redis fragment settings.
pub mod redis_config;
