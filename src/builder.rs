use std::time::Duration;

use crate::config::SheetConfig;
use crate::error::ImportError;
use crate::model::Recipe;
use crate::sources::{FallbackSource, GoogleSheetSource, RecipeSource};

/// Builder for configuring and executing a technical-card import
///
/// Every setting is optional; anything left unset comes from the
/// configuration layer (file, environment, defaults).
#[derive(Debug, Default)]
pub struct TechCardImporterBuilder {
    spreadsheet_id: Option<String>,
    sheet_gid: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    fallback: bool,
}

impl TechCardImporterBuilder {
    /// Import from a specific spreadsheet instead of the configured one
    ///
    /// # Example
    /// ```
    /// use techcard_import::TechCardImporter;
    ///
    /// let builder = TechCardImporter::builder()
    ///     .spreadsheet_id("1nWyXFaS1G5LZ--C0nHxSy5lzU-9wa06DWoE7ucHRlj8");
    /// ```
    pub fn spreadsheet_id(mut self, id: impl Into<String>) -> Self {
        self.spreadsheet_id = Some(id.into());
        self
    }

    /// Select a sheet (tab) within the spreadsheet
    pub fn sheet_gid(mut self, gid: impl Into<String>) -> Self {
        self.sheet_gid = Some(gid.into());
        self
    }

    /// Point the importer at a different export host (proxy or test server)
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set a timeout for the export request
    ///
    /// # Example
    /// ```
    /// use techcard_import::TechCardImporter;
    /// use std::time::Duration;
    ///
    /// let builder = TechCardImporter::builder()
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Serve the built-in catalog when the sheet fails or is empty
    ///
    /// With fallback enabled, `build()` cannot fail with a fetch error.
    pub fn with_fallback(mut self) -> Self {
        self.fallback = true;
        self
    }

    /// Build and execute the import
    ///
    /// # Errors
    /// Returns `ImportError` if the configuration layer fails, or if
    /// the export request fails and fallback is not enabled.
    ///
    /// # Example
    /// ```no_run
    /// # use techcard_import::TechCardImporter;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let cards = TechCardImporter::builder()
    ///     .with_fallback()
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<Vec<Recipe>, ImportError> {
        let mut config = SheetConfig::load()?;
        if let Some(id) = self.spreadsheet_id {
            config.spreadsheet_id = id;
        }
        if let Some(gid) = self.sheet_gid {
            config.sheet_gid = gid;
        }
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }

        let source = GoogleSheetSource::with_timeout(&config, self.timeout);
        if self.fallback {
            Ok(FallbackSource::new(Box::new(source)).load().await)
        } else {
            source.recipes().await
        }
    }
}

/// Main entry point for the builder API
pub struct TechCardImporter;

impl TechCardImporter {
    /// Creates a new builder for importing technical cards
    ///
    /// # Example
    /// ```
    /// use techcard_import::TechCardImporter;
    ///
    /// let builder = TechCardImporter::builder();
    /// ```
    pub fn builder() -> TechCardImporterBuilder {
        TechCardImporterBuilder::default()
    }
}
