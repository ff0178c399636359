use crate::config::enums::cache_engine::CacheEngine;
use crate::fragment::enums::output_format::OutputFormat;

#[derive(Debug, Clone)]
pub struct FragmentEmitter {
    pub(crate) engine: CacheEngine,
    pub(crate) format: OutputFormat,
}
