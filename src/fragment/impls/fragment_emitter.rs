use crate::config::enums::cache_engine::CacheEngine;
use crate::config::structs::configuration::Configuration;
use crate::fragment::enums::output_format::OutputFormat;
use crate::fragment::errors::EmitError;
use crate::fragment::structs::fragment_emitter::FragmentEmitter;
use crate::fragment::traits::wp_config_fragment::WpConfigFragment;
use log::{info, warn};
use serde::Serialize;
use std::fs::File;
use std::io::Write;

impl FragmentEmitter {
    pub fn new(engine: CacheEngine, format: OutputFormat) -> FragmentEmitter {
        FragmentEmitter { engine, format }
    }

    /// Renders the selected fragment and writes it to the given path, or to
    /// stdout when no path is given. Returns the rendered text.
    pub fn emit(&self, config: &Configuration, output: Option<&str>) -> Result<String, EmitError> {
        let rendered = match self.engine {
            CacheEngine::redis => self.render(&config.redis)?,
            CacheEngine::memcached => self.render(&config.memcached)?,
        };
        match output {
            Some(path) => {
                if !path.ends_with(self.format.file_extension()) {
                    warn!(
                        "[Fragment] Output file {} does not carry the {} extension",
                        path,
                        self.format.file_extension()
                    );
                }
                let mut file = File::create(path)?;
                file.write_all(rendered.as_bytes())?;
                info!(
                    "[Fragment] Wrote {} configuration ({}) to {}",
                    self.engine, self.format, path
                );
            }
            None => {
                print!("{}", rendered);
            }
        }
        Ok(rendered)
    }

    fn render<T: Serialize + WpConfigFragment>(&self, section: &T) -> Result<String, EmitError> {
        match self.format {
            OutputFormat::php => Ok(section.wp_config_fragment()),
            OutputFormat::toml => Ok(toml::to_string(section)?),
            OutputFormat::json => {
                let mut rendered = serde_json::to_string_pretty(section)?;
                rendered.push('\n');
                Ok(rendered)
            }
        }
    }
}
