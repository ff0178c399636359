#[cfg(test)]
mod fragment_tests {
    mod output_format_tests {
        use crate::fragment::enums::output_format::OutputFormat;

        #[test]
        fn test_output_format_display() {
            assert_eq!(format!("{}", OutputFormat::php), "php");
            assert_eq!(format!("{}", OutputFormat::toml), "toml");
            assert_eq!(format!("{}", OutputFormat::json), "json");
        }

        #[test]
        fn test_output_format_file_extension() {
            assert_eq!(OutputFormat::php.file_extension(), ".php");
            assert_eq!(OutputFormat::toml.file_extension(), ".toml");
            assert_eq!(OutputFormat::json.file_extension(), ".json");
        }

        #[test]
        fn test_output_format_serialization() {
            let serialized = serde_json::to_string(&OutputFormat::php).unwrap();
            assert_eq!(serialized, "\"php\"");
            let deserialized: OutputFormat = serde_json::from_str("\"toml\"").unwrap();
            assert_eq!(deserialized, OutputFormat::toml);
        }
    }

    mod memcached_fragment_tests {
        use crate::config::structs::memcached_config::MemcachedConfig;
        use crate::config::structs::memcached_server::MemcachedServer;
        use crate::fragment::traits::wp_config_fragment::WpConfigFragment;

        #[test]
        fn test_default_fragment_matches_documented_output() {
            let fragment = MemcachedConfig::default().wp_config_fragment();
            let expected = "\
// Memcached Object Cache Configuration
define('WP_CACHE_KEY_SALT', 'wp_');

// Memcached servers configuration
$memcached_servers = array(
    array(
        'memcached',
        11211
    )
);

// Enable WordPress object caching
define('WP_CACHE', true);
";
            assert_eq!(fragment, expected);
        }

        #[test]
        fn test_custom_server_rendered() {
            let config = MemcachedConfig {
                key_salt: "site1_".to_string(),
                servers: vec![MemcachedServer {
                    host: "cache.internal".to_string(),
                    port: 11300,
                }],
                cache_enabled: true,
            };
            let fragment = config.wp_config_fragment();
            assert!(fragment.contains("define('WP_CACHE_KEY_SALT', 'site1_');"));
            assert!(fragment.contains("'cache.internal',\n        11300"));
        }

        #[test]
        fn test_multiple_servers_joined_with_commas() {
            let config = MemcachedConfig {
                key_salt: "wp_".to_string(),
                servers: vec![
                    MemcachedServer { host: "mc1".to_string(), port: 11211 },
                    MemcachedServer { host: "mc2".to_string(), port: 11212 },
                ],
                cache_enabled: true,
            };
            let fragment = config.wp_config_fragment();
            assert!(fragment.contains("    ),\n    array("));
            assert!(fragment.contains("'mc1'"));
            assert!(fragment.contains("'mc2'"));
        }

        #[test]
        fn test_salt_with_quote_escaped() {
            let config = MemcachedConfig {
                key_salt: "o'brien_".to_string(),
                ..MemcachedConfig::default()
            };
            let fragment = config.wp_config_fragment();
            assert!(fragment.contains("define('WP_CACHE_KEY_SALT', 'o\\'brien_');"));
        }
    }

    mod redis_fragment_tests {
        use crate::config::structs::redis_config::RedisConfig;
        use crate::fragment::traits::wp_config_fragment::WpConfigFragment;

        #[test]
        fn test_default_fragment_matches_documented_output() {
            let fragment = RedisConfig::default().wp_config_fragment();
            let expected = "\
// Redis Object Cache Configuration
define('WP_REDIS_HOST', 'redis');
define('WP_REDIS_PORT', 6379);
define('WP_REDIS_DATABASE', 0);
define('WP_REDIS_TIMEOUT', 1);
define('WP_REDIS_READ_TIMEOUT', 1);
define('WP_REDIS_PREFIX', 'wp');

// Enable Redis object caching
define('WP_CACHE', true);
";
            assert_eq!(fragment, expected);
        }

        #[test]
        fn test_password_define_only_when_set() {
            let without = RedisConfig::default().wp_config_fragment();
            assert!(!without.contains("WP_REDIS_PASSWORD"));

            let with = RedisConfig {
                password: Some("s3cret".to_string()),
                ..RedisConfig::default()
            }
            .wp_config_fragment();
            assert!(with.contains("define('WP_REDIS_PASSWORD', 's3cret');"));
        }

        #[test]
        fn test_password_precedes_prefix() {
            let fragment = RedisConfig {
                password: Some("s3cret".to_string()),
                ..RedisConfig::default()
            }
            .wp_config_fragment();
            let password_at = fragment.find("WP_REDIS_PASSWORD").unwrap();
            let prefix_at = fragment.find("WP_REDIS_PREFIX").unwrap();
            assert!(password_at < prefix_at);
        }

        #[test]
        fn test_overridden_values_rendered() {
            let config = RedisConfig {
                host: "redis-primary".to_string(),
                port: 6380,
                database: 3,
                prefix: "blog".to_string(),
                ..RedisConfig::default()
            };
            let fragment = config.wp_config_fragment();
            assert!(fragment.contains("define('WP_REDIS_HOST', 'redis-primary');"));
            assert!(fragment.contains("define('WP_REDIS_PORT', 6380);"));
            assert!(fragment.contains("define('WP_REDIS_DATABASE', 3);"));
            assert!(fragment.contains("define('WP_REDIS_PREFIX', 'blog');"));
        }
    }

    mod fragment_emitter_tests {
        use crate::config::enums::cache_engine::CacheEngine;
        use crate::config::structs::configuration::Configuration;
        use crate::config::structs::redis_config::RedisConfig;
        use crate::fragment::enums::output_format::OutputFormat;
        use crate::fragment::structs::fragment_emitter::FragmentEmitter;
        use tempfile::TempDir;

        #[test]
        fn test_emit_php_to_file() {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("object-cache.php");
            let emitter = FragmentEmitter::new(CacheEngine::redis, OutputFormat::php);
            let rendered = emitter
                .emit(&Configuration::init(), Some(path.to_str().unwrap()))
                .unwrap();
            let written = std::fs::read_to_string(&path).unwrap();
            assert_eq!(written, rendered);
            assert!(written.contains("define('WP_REDIS_HOST', 'redis');"));
        }

        #[test]
        fn test_emit_toml_parses_back() {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("redis.toml");
            let emitter = FragmentEmitter::new(CacheEngine::redis, OutputFormat::toml);
            let rendered = emitter
                .emit(&Configuration::init(), Some(path.to_str().unwrap()))
                .unwrap();
            let parsed: RedisConfig = toml::from_str(&rendered).unwrap();
            assert_eq!(parsed.host, "redis");
            assert_eq!(parsed.port, 6379);
            assert_eq!(parsed.timeout, 1);
        }

        #[test]
        fn test_emit_json_parses_back() {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("memcached.json");
            let emitter = FragmentEmitter::new(CacheEngine::memcached, OutputFormat::json);
            let rendered = emitter
                .emit(&Configuration::init(), Some(path.to_str().unwrap()))
                .unwrap();
            let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
            assert_eq!(parsed["key_salt"], "wp_");
            assert_eq!(parsed["servers"][0]["host"], "memcached");
            assert_eq!(parsed["servers"][0]["port"], 11211);
        }

        #[test]
        fn test_emit_selects_engine() {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("fragment.php");
            let emitter = FragmentEmitter::new(CacheEngine::memcached, OutputFormat::php);
            let rendered = emitter
                .emit(&Configuration::init(), Some(path.to_str().unwrap()))
                .unwrap();
            assert!(rendered.contains("$memcached_servers"));
            assert!(!rendered.contains("WP_REDIS_HOST"));
        }

        #[test]
        fn test_emit_write_error_surfaces() {
            let emitter = FragmentEmitter::new(CacheEngine::redis, OutputFormat::php);
            let result = emitter.emit(&Configuration::init(), Some("/nonexistent/dir/out.php"));
            assert!(result.is_err());
        }
    }
}
