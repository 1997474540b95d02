pub mod adapters;
pub mod config;
pub mod core;
pub mod dom;
pub mod domain;
pub mod site;
pub mod ui;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::HttpContentSource;
pub use config::SiteConfig;
pub use core::search::SearchController;
pub use dom::builder::PageBuilder;
pub use dom::Document;
pub use site::{PageEvent, Site};
pub use ui::Key;
pub use utils::error::{Result, SiteError};
