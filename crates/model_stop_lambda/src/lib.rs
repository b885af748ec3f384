//! AWS-oriented adapters and the event handler for stopping idle models.
//!
//! This crate owns runtime integration details (the Lambda entry point, the
//! Rekognition adapter, environment configuration and log output). Trigger
//! contracts, status vocabulary and error kinds come from `model_stop_core`.

pub mod adapters;
pub mod config;
pub mod handlers;
pub mod logging;
