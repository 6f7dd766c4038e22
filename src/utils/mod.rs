// Shared utilities: errors, configuration, logging, name checks
pub mod config;
pub mod error;
pub mod logging;
pub mod validation;
