//! Implementation blocks for fragment rendering and emission.

/// Emission over engine and format.
pub mod fragment_emitter;

/// PHP rendering of the Memcached fragment.
pub mod memcached_fragment;

/// PHP rendering of the Redis fragment.
pub mod redis_fragment;
