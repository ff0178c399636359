/// Rendering seam for the `wp-config.php` output format.
pub trait WpConfigFragment {
    /// Renders the fragment as PHP constant definitions, ready to paste
    /// into a `wp-config.php` file.
    fn wp_config_fragment(&self) -> String;
}
