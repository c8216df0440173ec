pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{FileStore, FixedFetcher};
pub use config::{cli::Cli, AppConfig, FromEnv};
pub use crate::core::app::{execute, run, Outcome, ProgramTimer};
pub use domain::{model::Person, ports::Fetcher, ports::Storer};
pub use utils::error::{Result, ScaffoldError};
