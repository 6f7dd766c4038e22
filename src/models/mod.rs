// Models module for data structures
pub mod external_command;
pub mod package_manager;
pub mod pipeline;
pub mod project;
