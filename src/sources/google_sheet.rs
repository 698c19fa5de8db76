use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::config::SheetConfig;
use crate::error::ImportError;
use crate::model::Recipe;
use crate::sheet::parse_sheet;
use crate::sources::RecipeSource;

/// Reads the published technical-card sheet through its CSV export.
///
/// Stateless between calls: every invocation issues one GET and parses
/// the body it got, nothing is cached. Concurrent callers do not
/// interact.
pub struct GoogleSheetSource {
    client: Client,
    export_url: String,
}

impl GoogleSheetSource {
    pub fn new(config: &SheetConfig) -> Self {
        Self::with_timeout(config, None)
    }

    /// Build a source with an explicit request timeout, overriding the
    /// configured one.
    pub fn with_timeout(config: &SheetConfig, timeout: Option<Duration>) -> Self {
        let timeout = timeout.unwrap_or(Duration::from_secs(config.timeout));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (compatible; TechcardBot/1.0)")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            export_url: config.export_url(),
        }
    }
}

#[async_trait]
impl RecipeSource for GoogleSheetSource {
    fn source_name(&self) -> &str {
        "google-sheet"
    }

    /// Fetch and parse the sheet. A transport failure or non-success
    /// status is the only error this raises; malformed rows are dropped
    /// during parsing and an empty sheet is a valid result.
    async fn recipes(&self) -> Result<Vec<Recipe>, ImportError> {
        debug!("Fetching sheet export from {}", self.export_url);
        let response = self.client.get(&self.export_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImportError::Status(status));
        }

        let body = response.text().await?;
        let recipes = parse_sheet(&body);
        debug!("Parsed {} technical card(s)", recipes.len());

        Ok(recipes)
    }
}
