//! Category taxonomy for technical cards.
//!
//! Raw sheet cells carry free-text labels; everything downstream works
//! with the fixed canonical set below. The substring probes and their
//! order are a pinned contract: reordering them changes how ambiguous
//! labels classify, which is a behavior change, not a cleanup.

/// Wildcard label the UI puts ahead of the canonical tabs.
///
/// Injected by consumers only; the ingestion pipeline never produces it.
pub const CATEGORY_ALL: &str = "все";

/// Catch-all for labels no probe recognizes.
pub const CATEGORY_OTHER: &str = "другое";

/// Every category an imported card can carry.
pub const CANONICAL_CATEGORIES: [&str; 8] = [
    "классические",
    "авторские",
    "чай",
    "сезонные",
    "горячие",
    "холодные",
    "десерты",
    "другое",
];

// Checked top to bottom, first hit wins.
const PROBES: [(&str, &str); 8] = [
    ("классич", "классические"),
    ("класс", "классические"),
    ("автор", "авторские"),
    ("чай", "чай"),
    ("сезон", "сезонные"),
    ("горяч", "горячие"),
    ("холод", "холодные"),
    ("десерт", "десерты"),
];

/// Map a raw category cell onto the canonical set.
///
/// Trims, keeps only the text before the first comma or newline,
/// lowercases, then tries an exact canonical match before falling back
/// to the ordered substring probes. Unknown or empty input lands on
/// [`CATEGORY_OTHER`].
pub fn normalize_category(raw: &str) -> &'static str {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CATEGORY_OTHER;
    }

    // A comma or newline means the cell carries extra text; only the
    // leading part names the category.
    let head = trimmed
        .split([',', '\n'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase();

    if let Some(canonical) = CANONICAL_CATEGORIES.iter().copied().find(|&c| c == head) {
        return canonical;
    }

    for (probe, canonical) in PROBES {
        if head.contains(probe) {
            return canonical;
        }
    }

    CATEGORY_OTHER
}

/// Tab labels in display order: the wildcard first, then the canonical set.
pub fn display_categories() -> Vec<&'static str> {
    let mut categories = Vec::with_capacity(CANONICAL_CATEGORIES.len() + 1);
    categories.push(CATEGORY_ALL);
    categories.extend(CANONICAL_CATEGORIES);
    categories
}

/// Icon slug the card list shows next to a category label.
pub fn category_icon(category: &str) -> &'static str {
    let lower = category.to_lowercase();
    if lower.contains("кофе") || lower.contains("классич") || lower.contains("автор") {
        "coffee"
    } else if lower.contains("чай") {
        "cup-soda"
    } else if lower.contains("десс") || lower.contains("выпеч") {
        "croissant"
    } else {
        "cherry"
    }
}
