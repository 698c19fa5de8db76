use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Where the published sheet lives and how to talk to it
#[derive(Debug, Deserialize, Clone)]
pub struct SheetConfig {
    /// Spreadsheet identifier of the published technical-card sheet
    #[serde(default = "default_spreadsheet_id")]
    pub spreadsheet_id: String,
    /// Sheet (tab) identifier within the spreadsheet
    #[serde(default = "default_sheet_gid")]
    pub sheet_gid: String,
    /// Base URL of the export endpoint (override for proxies or tests)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: default_spreadsheet_id(),
            sheet_gid: default_sheet_gid(),
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

// Default value functions
fn default_spreadsheet_id() -> String {
    "1nWyXFaS1G5LZ--C0nHxSy5lzU-9wa06DWoE7ucHRlj8".to_string()
}

fn default_sheet_gid() -> String {
    "0".to_string()
}

fn default_base_url() -> String {
    "https://docs.google.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl SheetConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with TECHCARD__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values (the coffee shop's published sheet)
    ///
    /// Environment variable format: TECHCARD__SPREADSHEET_ID
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("TECHCARD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// CSV export URL for the configured sheet
    pub fn export_url(&self) -> String {
        format!(
            "{}/spreadsheets/d/{}/export?format=csv&gid={}",
            self.base_url, self.spreadsheet_id, self.sheet_gid
        )
    }
}
