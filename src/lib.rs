pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod view;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CliConfig, Command};

pub use crate::adapters::http::HttpTransport;
pub use crate::app::pages::{DirectoryPage, MartCommand, OutputFormat};
pub use crate::config::{toml_config::TomlConfig, ApiSettings};
pub use crate::core::catalog::{CatalogEvent, CatalogLoader, CatalogState};
pub use crate::core::counter::{Button, ItemCounter};
pub use crate::core::directory::{filter, DirectoryLoader, DirectorySession, SearchQuery};
pub use crate::domain::model::{SaleItem, StudentName, StudentRecord};
pub use crate::domain::ports::{ConfigProvider, Transport};
pub use crate::utils::error::{BadgerError, Result};
