//! Domain primitives for stopping idle custom-label models.
//!
//! This crate owns the trigger contract, the model status vocabulary, the
//! stop decision and the error taxonomy. It intentionally excludes AWS SDK and
//! Lambda runtime concerns; those live in `model_stop_lambda`.

pub mod contract;
pub mod error;
pub mod status;
