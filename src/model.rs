use serde::{Deserialize, Serialize};

/// A single technical card as served to the application.
///
/// Built once per import and not mutated afterwards. `id` is derived
/// from the source row position and is only unique within one import
/// result, not across reloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    /// Always one of [`crate::sheet::category::CANONICAL_CATEGORIES`].
    pub category: String,
    pub ingredients: Vec<String>,
    /// Preparation steps, in serving order.
    pub preparation: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
