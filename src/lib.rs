//! # WP Cache Config
//!
//! An environment-driven object cache configuration generator for WordPress deployments.
//!
//! ## Overview
//!
//! WordPress delegates object caching to a drop-in plugin that reads its connection
//! settings from constants defined in `wp-config.php`. In containerized deployments
//! those constants are sourced from environment variables with static fallbacks.
//! This crate performs that resolution once at startup, holds the result in typed
//! configuration structs, and emits the configuration for the selected backend.
//!
//! ## Features
//!
//! - **Two Backends**: Memcached and Redis object cache fragments, resolved independently
//! - **Environment Resolution**: every setting falls back to its documented default when
//!   the corresponding variable is unset or empty
//! - **Multiple Output Formats**: the literal `wp-config.php` PHP fragment, TOML, or JSON
//! - **No Live Connections**: configuration only, the cache servers are never contacted
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wp_cache_config::config::structs::configuration::Configuration;
//!
//! // Resolve all settings from the process environment
//! let config = Configuration::from_env();
//! assert_eq!(config.redis.port, 6379);
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Settings resolver primitives and shared helpers
//! - [`config`] - Typed configuration structs and environment resolution
//! - [`fragment`] - Rendering and emission of the resolved configuration
//! - [`logging`] - Logging bootstrap
//! - [`structs`] - CLI argument parsing

/// Shared utilities.
///
/// Contains the settings resolver primitives implementing the env-or-default
/// fallback rule, and the PHP string literal helper used by fragment rendering.
pub mod common;

/// Configuration management module.
///
/// Typed settings for the Memcached and Redis object cache fragments, resolved
/// from environment variables with documented defaults.
pub mod config;

/// Fragment emission module.
///
/// Renders a resolved configuration as a `wp-config.php` fragment, TOML, or JSON
/// and writes it to stdout or a file.
pub mod fragment;

/// Logging bootstrap.
pub mod logging;

/// CLI argument parsing structures.
pub mod structs;
