// Loader module - discovers *.yml command files and collects their commands

pub mod config;
pub mod document;
pub mod error;
pub mod types;
pub mod walk;

pub use config::LoaderConfig;
pub use error::{LoaderError, Result};
pub use types::CommandSet;
pub use walk::Loader;
