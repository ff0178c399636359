//! Fragment rendering traits.

/// The `wp-config.php` rendering seam.
pub mod wp_config_fragment;
