use async_trait::async_trait;

use crate::error::ImportError;
use crate::model::Recipe;
use crate::sources::RecipeSource;

/// Built-in technical cards served when the sheet is unreachable.
///
/// A snapshot of the shop's core menu; never fails and never changes
/// at runtime.
pub struct StaticCatalog;

fn card(
    id: &str,
    name: &str,
    category: &str,
    ingredients: &[&str],
    preparation: &[&str],
    image: Option<&str>,
) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        preparation: preparation.iter().map(|s| s.to_string()).collect(),
        image: image.map(str::to_string),
    }
}

impl StaticCatalog {
    /// The cards every build ships with.
    pub fn cards() -> Vec<Recipe> {
        vec![
            card(
                "r1",
                "Капучино",
                "классические",
                &["Эспрессо", "Молоко"],
                &[
                    "Приготовить эспрессо (30 мл)",
                    "Взбить молоко до образования микропены",
                    "Влить молоко в эспрессо, создавая слоистую структуру",
                    "При подаче можно украсить корицей или какао",
                ],
                Some("https://images.unsplash.com/photo-1572442388796-11668a67e53d?w=800&auto=format&fit=crop&q=60&ixlib=rb-4.0.3"),
            ),
            card(
                "r2",
                "Латте",
                "классические",
                &["Эспрессо", "Молоко", "Сироп (опционально)"],
                &[
                    "Приготовить эспрессо (30 мл)",
                    "Взбить молоко до образования микропены",
                    "Влить молоко в эспрессо, создавая слоистую структуру",
                    "При желании добавить сироп",
                ],
                None,
            ),
            card(
                "r3",
                "Американо",
                "классические",
                &["Эспрессо", "Горячая вода"],
                &[
                    "Приготовить эспрессо (30 мл)",
                    "Добавить горячую воду (90-150 мл в зависимости от желаемой крепости)",
                ],
                None,
            ),
            card(
                "r4",
                "Чай Эрл Грей",
                "чай",
                &["Чай Эрл Грей", "Горячая вода"],
                &["Нагреть воду до 90-95°C", "Заварить чай 3-5 минут"],
                None,
            ),
            card(
                "r5",
                "Раф кофе",
                "авторские",
                &["Эспрессо", "Сливки", "Ванильный сахар"],
                &[
                    "Приготовить эспрессо (30 мл)",
                    "Взбить сливки с ванильным сахаром",
                    "Смешать с эспрессо",
                ],
                None,
            ),
        ]
    }
}

#[async_trait]
impl RecipeSource for StaticCatalog {
    fn source_name(&self) -> &str {
        "catalog"
    }

    async fn recipes(&self) -> Result<Vec<Recipe>, ImportError> {
        Ok(Self::cards())
    }
}
