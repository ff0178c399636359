use std::process::exit;
use clap::Parser;
use log::{error, info};
use wp_cache_config::config::enums::cache_engine::CacheEngine;
use wp_cache_config::config::structs::configuration::Configuration;
use wp_cache_config::fragment::structs::fragment_emitter::FragmentEmitter;
use wp_cache_config::logging::setup_logging;
use wp_cache_config::structs::Cli;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let mut config = Configuration::from_env();
    config.log_level = args.log_level.clone();

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    match args.engine {
        CacheEngine::redis => {
            info!(
                "[CONFIG] Redis object cache target {}{}:{} database {}",
                args.engine.url_scheme(),
                config.redis.host,
                config.redis.port,
                config.redis.database
            );
        }
        CacheEngine::memcached => {
            for server in &config.memcached.servers {
                info!(
                    "[CONFIG] Memcached object cache server {}{}:{}",
                    args.engine.url_scheme(),
                    server.host,
                    server.port
                );
            }
        }
    }

    let emitter = FragmentEmitter::new(args.engine, args.format);
    match emitter.emit(&config, args.output.as_deref()) {
        Ok(_) => Ok(()),
        Err(error) => {
            error!("[Fragment] {}", error);
            exit(101)
        }
    }
}
