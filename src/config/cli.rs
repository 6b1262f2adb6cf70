use crate::config::toml_config::TomlConfig;
use crate::config::{ApiSettings, DEFAULT_API_BASE};
use crate::utils::error::Result;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "badger-pages")]
#[command(about = "Student directory search and Badger Mart storefront in the terminal")]
pub struct CliConfig {
    /// Optional TOML file with [api] and [endpoints] sections
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Base URL of the course API (default: https://cs571.org/api/s24)
    #[arg(long, global = true, env = "CS571_API_BASE")]
    pub api_base: Option<String>,

    /// Value sent in the X-CS571-ID header
    #[arg(long, global = true, env = "CS571_ID", hide_env_values = true)]
    pub badger_id: Option<String>,

    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, value_enum, default_value = "compact")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Load the student directory and optionally filter it
    Directory {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        major: String,

        #[arg(long, default_value = "")]
        interest: String,

        /// Read `name|major|interest` searches from stdin
        #[arg(long)]
        interactive: bool,

        /// Print an HTML fragment instead of the text outline
        #[arg(long)]
        html: bool,
    },

    /// Load the sale items and the featured item
    Mart {
        /// Read `+ <n>`, `- <n>` and `hover` commands from stdin
        #[arg(long)]
        interactive: bool,

        #[arg(long)]
        html: bool,
    },
}

impl CliConfig {
    /// 先讀 TOML 檔，再以命令列參數覆蓋
    pub fn resolve(&self) -> Result<ApiSettings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                TomlConfig::from_file(path)?.to_settings()
            }
            None => ApiSettings::new(DEFAULT_API_BASE, ""),
        };

        if let Some(api_base) = &self.api_base {
            settings.api_base = api_base.clone();
        }
        if let Some(badger_id) = &self.badger_id {
            settings.badger_id = badger_id.clone();
        }
        if self.timeout_seconds.is_some() {
            settings.timeout_seconds = self.timeout_seconds;
        }

        Ok(settings)
    }
}
