pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{ScriptedConsole, StdConsole};
pub use crate::app::Application;
pub use crate::config::catalog::CatalogConfig;
pub use crate::core::store::Store;
pub use crate::domain::ports::Console;
pub use crate::utils::error::{AppError, Result, StoreError};
