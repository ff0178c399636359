#![allow(dead_code)]
use wp_cache_config::config::structs::configuration::Configuration;

pub fn create_test_config() -> Configuration {
    Configuration::init()
}

/// A lookup backed by a fixed variable list, stands in for the process
/// environment without mutating it.
pub fn env_fixture(
    pairs: &'static [(&'static str, &'static str)],
) -> impl Fn(&str) -> Option<String> {
    move |name| {
        pairs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.to_string())
    }
}
