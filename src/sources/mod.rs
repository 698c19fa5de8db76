mod catalog;
mod fallback;
mod google_sheet;

pub use catalog::StaticCatalog;
pub use fallback::FallbackSource;
pub use google_sheet::GoogleSheetSource;

use async_trait::async_trait;

use crate::error::ImportError;
use crate::model::Recipe;

/// Unified trait for anything that can supply technical cards
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Get the source name (e.g., "google-sheet", "catalog")
    fn source_name(&self) -> &str;

    /// Produce a fresh set of technical cards
    async fn recipes(&self) -> Result<Vec<Recipe>, ImportError>;
}
