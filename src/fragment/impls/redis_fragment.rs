use crate::common::common::php_string_literal;
use crate::config::structs::redis_config::RedisConfig;
use crate::fragment::traits::wp_config_fragment::WpConfigFragment;

impl WpConfigFragment for RedisConfig {
    fn wp_config_fragment(&self) -> String {
        let mut fragment = String::new();
        fragment.push_str("// Redis Object Cache Configuration\n");
        fragment.push_str(&format!(
            "define('WP_REDIS_HOST', {});\n",
            php_string_literal(&self.host)
        ));
        fragment.push_str(&format!("define('WP_REDIS_PORT', {});\n", self.port));
        fragment.push_str(&format!("define('WP_REDIS_DATABASE', {});\n", self.database));
        fragment.push_str(&format!("define('WP_REDIS_TIMEOUT', {});\n", self.timeout));
        fragment.push_str(&format!("define('WP_REDIS_READ_TIMEOUT', {});\n", self.read_timeout));
        if let Some(password) = &self.password {
            fragment.push_str(&format!(
                "define('WP_REDIS_PASSWORD', {});\n",
                php_string_literal(password)
            ));
        }
        fragment.push_str(&format!(
            "define('WP_REDIS_PREFIX', {});\n",
            php_string_literal(&self.prefix)
        ));
        fragment.push('\n');
        fragment.push_str("// Enable Redis object caching\n");
        fragment.push_str(&format!("define('WP_CACHE', {});\n", self.cache_enabled));
        fragment
    }
}
