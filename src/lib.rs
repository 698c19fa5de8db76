//! Imports a coffee shop's technical cards (recipes) from a published
//! Google Sheet CSV export, degrading to a built-in catalog when the
//! sheet is unreachable.

pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod sheet;
pub mod sources;

use std::time::Duration;

use log::warn;

pub use builder::{TechCardImporter, TechCardImporterBuilder};
pub use config::SheetConfig;
pub use error::ImportError;
pub use model::Recipe;
pub use sheet::category::{
    category_icon, display_categories, normalize_category, CANONICAL_CATEGORIES, CATEGORY_ALL,
    CATEGORY_OTHER,
};
pub use sources::{FallbackSource, GoogleSheetSource, RecipeSource, StaticCatalog};

/// Fetch technical cards from the configured sheet.
///
/// One request, no retry, no caching. Malformed rows are dropped while
/// parsing, so an `Ok` result may hold fewer cards than the sheet has
/// rows, or none at all.
pub async fn fetch_recipes() -> Result<Vec<Recipe>, ImportError> {
    fetch_recipes_with_timeout(None).await
}

/// Same as [`fetch_recipes`], with an explicit request timeout.
pub async fn fetch_recipes_with_timeout(
    timeout: Option<Duration>,
) -> Result<Vec<Recipe>, ImportError> {
    let config = SheetConfig::load()?;
    GoogleSheetSource::with_timeout(&config, timeout)
        .recipes()
        .await
}

/// Load technical cards for display: the sheet when it answers, the
/// built-in catalog otherwise. Never fails.
pub async fn load_recipes() -> Vec<Recipe> {
    match SheetConfig::load() {
        Ok(config) => {
            FallbackSource::new(Box::new(GoogleSheetSource::new(&config)))
                .load()
                .await
        }
        Err(e) => {
            warn!("Configuration failed: {}; serving built-in catalog", e);
            StaticCatalog::cards()
        }
    }
}
