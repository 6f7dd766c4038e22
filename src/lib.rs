// next-scaffold - Next.js project scaffolding
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod templates;
pub mod utils;

// Re-export commonly used types
pub use models::*;
pub use services::*;
