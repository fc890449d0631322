//! `stockroom` interactive shell: line commands on top of the versioned
//! materials service.

pub mod args;
pub mod config;
pub mod demo;
pub mod render;
pub mod shell;

pub use config::CliConfig;
pub use render::OutputFormat;
pub use shell::{Flow, Shell};
