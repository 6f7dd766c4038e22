// Services module for process spawning, file writing and orchestration
pub mod command_runner;
pub mod orchestrator;
pub mod scaffold_writer;
