use async_trait::async_trait;
use log::{debug, warn};

use crate::error::ImportError;
use crate::model::Recipe;
use crate::sources::{RecipeSource, StaticCatalog};

type Notifier = Box<dyn Fn(&ImportError) + Send + Sync>;

/// Serves cards from a primary source, degrading to the built-in
/// catalog so the technical-card screen always has content.
///
/// The primary gets exactly one attempt per load; there is no retry.
pub struct FallbackSource {
    primary: Box<dyn RecipeSource>,
    notifier: Option<Notifier>,
}

impl FallbackSource {
    pub fn new(primary: Box<dyn RecipeSource>) -> Self {
        Self {
            primary,
            notifier: None,
        }
    }

    /// Register a hook invoked once per failed load. The UI surfaces
    /// it as a dismissible notice; an empty-but-successful load does
    /// not notify.
    pub fn with_notifier(
        mut self,
        notifier: impl Fn(&ImportError) + Send + Sync + 'static,
    ) -> Self {
        self.notifier = Some(Box::new(notifier));
        self
    }

    /// Load cards, substituting the catalog when the primary source
    /// fails or comes back empty.
    pub async fn load(&self) -> Vec<Recipe> {
        match self.primary.recipes().await {
            Ok(recipes) if !recipes.is_empty() => recipes,
            Ok(_) => {
                debug!(
                    "{} returned no rows, serving built-in catalog",
                    self.primary.source_name()
                );
                StaticCatalog::cards()
            }
            Err(e) => {
                warn!(
                    "{} failed: {}; serving built-in catalog",
                    self.primary.source_name(),
                    e
                );
                if let Some(notifier) = &self.notifier {
                    notifier(&e);
                }
                StaticCatalog::cards()
            }
        }
    }
}

#[async_trait]
impl RecipeSource for FallbackSource {
    fn source_name(&self) -> &str {
        "fallback"
    }

    async fn recipes(&self) -> Result<Vec<Recipe>, ImportError> {
        Ok(self.load().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct FixedSource(Vec<Recipe>);

    #[async_trait]
    impl RecipeSource for FixedSource {
        fn source_name(&self) -> &str {
            "fixed"
        }

        async fn recipes(&self) -> Result<Vec<Recipe>, ImportError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl RecipeSource for FailingSource {
        fn source_name(&self) -> &str {
            "failing"
        }

        async fn recipes(&self) -> Result<Vec<Recipe>, ImportError> {
            Err(ImportError::Status(StatusCode::INTERNAL_SERVER_ERROR))
        }
    }

    #[tokio::test]
    async fn test_primary_result_passes_through() {
        let cards = StaticCatalog::cards();
        let fallback = FallbackSource::new(Box::new(FixedSource(cards[..2].to_vec())));

        let loaded = fallback.load().await;
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].name, "Капучино");
    }

    #[tokio::test]
    async fn test_empty_primary_serves_catalog_without_notice() {
        let notices = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&notices);
        let fallback = FallbackSource::new(Box::new(FixedSource(Vec::new())))
            .with_notifier(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        let loaded = fallback.load().await;
        assert_eq!(loaded, StaticCatalog::cards());
        assert_eq!(notices.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failure_serves_catalog_and_notifies_once() {
        let notices = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&notices);
        let fallback = FallbackSource::new(Box::new(FailingSource)).with_notifier(move |e| {
            assert!(matches!(e, ImportError::Status(_)));
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let loaded = fallback.load().await;
        assert_eq!(loaded, StaticCatalog::cards());
        assert_eq!(notices.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_source_name() {
        let fallback = FallbackSource::new(Box::new(FailingSource));
        assert_eq!(fallback.source_name(), "fallback");
    }
}
