use crate::config::site::SiteConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "viaje-mundo")]
#[command(about = "Destination search and page interactivity for the Viaje Mundo site")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Path to a site TOML file")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Filter the destination cards and print the result
    Search {
        #[arg(long, default_value = "")]
        query: String,

        #[arg(long, default_value = "", help = "Continent id, or empty/any for all")]
        continent: String,
    },
    /// Load dynamic JSON content (defaults to the configured endpoint)
    Fetch { url: Option<String> },
    /// Validate the site configuration
    Check,
}

impl CliConfig {
    /// 沒有指定檔案時使用內建的範例網站
    pub fn load_site_config(&self) -> Result<SiteConfig> {
        match &self.config {
            Some(path) => SiteConfig::from_file(path),
            None => Ok(SiteConfig::default()),
        }
    }
}
