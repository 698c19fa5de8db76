use log::debug;

use crate::model::Recipe;
use crate::sheet::category::normalize_category;
use crate::sheet::csv::split_fields;

// Positional layout of the published sheet
const COL_CATEGORY: usize = 0;
const COL_NAME: usize = 1;
const COL_INGREDIENTS: usize = 2;
const COL_PREPARATION: usize = 3;
const COL_IMAGE: usize = 4;

const MIN_FIELDS: usize = 4;

/// Parse a CSV export body into technical cards.
///
/// The first line is the header. Rows with fewer than four fields or an
/// empty name are dropped silently; an empty result is a valid outcome
/// (e.g. a header-only sheet). Output order follows input order, and
/// ids number the raw input lines, so a dropped row leaves a gap.
pub(crate) fn parse_sheet(body: &str) -> Vec<Recipe> {
    let mut recipes = Vec::new();

    for (index, line) in body.split('\n').enumerate() {
        // Skip header row
        if index == 0 || line.trim().is_empty() {
            continue;
        }

        let row = split_fields(line);
        if row.len() < MIN_FIELDS {
            debug!("Skipping row {}: {} field(s)", index, row.len());
            continue;
        }

        let name = row[COL_NAME].trim();
        if name.is_empty() {
            debug!("Skipping row {}: empty name", index);
            continue;
        }

        let image = row
            .get(COL_IMAGE)
            .map(|cell| cell.trim())
            .filter(|url| url.starts_with("http://") || url.starts_with("https://"))
            .map(str::to_string);

        recipes.push(Recipe {
            id: format!("r{}", index),
            name: name.to_string(),
            category: normalize_category(&row[COL_CATEGORY]).to_string(),
            ingredients: split_list(&row[COL_INGREDIENTS]),
            preparation: split_list(&row[COL_PREPARATION]),
            image,
        });
    }

    recipes
}

/// Split a list cell on `;`, treating embedded newlines as the same
/// delimiter. Tokens are trimmed; empty tokens are dropped; order is
/// preserved (preparation steps are a sequence, not a set).
fn split_list(cell: &str) -> Vec<String> {
    cell.replace('\n', ";")
        .split(';')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
