use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("Write error: {0}")]
    WriteError(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlError(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}
