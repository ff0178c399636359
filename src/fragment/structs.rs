//! Fragment emitter structures.

/// Emitter combining engine selection and output format.
pub mod fragment_emitter;
