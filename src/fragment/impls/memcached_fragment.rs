use crate::common::common::php_string_literal;
use crate::config::structs::memcached_config::MemcachedConfig;
use crate::fragment::traits::wp_config_fragment::WpConfigFragment;

impl WpConfigFragment for MemcachedConfig {
    fn wp_config_fragment(&self) -> String {
        let mut fragment = String::new();
        fragment.push_str("// Memcached Object Cache Configuration\n");
        fragment.push_str(&format!(
            "define('WP_CACHE_KEY_SALT', {});\n",
            php_string_literal(&self.key_salt)
        ));
        fragment.push('\n');
        fragment.push_str("// Memcached servers configuration\n");
        fragment.push_str("$memcached_servers = array(\n");
        let entries: Vec<String> = self
            .servers
            .iter()
            .map(|server| {
                format!(
                    "    array(\n        {},\n        {}\n    )",
                    php_string_literal(&server.host),
                    server.port
                )
            })
            .collect();
        fragment.push_str(&entries.join(",\n"));
        fragment.push('\n');
        fragment.push_str(");\n");
        fragment.push('\n');
        fragment.push_str("// Enable WordPress object caching\n");
        fragment.push_str(&format!("define('WP_CACHE', {});\n", self.cache_enabled));
        fragment
    }
}
