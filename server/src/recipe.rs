use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::BackendError;
use crate::i18n::Lang;
use crate::user::Id;

/// The fixed display grouping for recipes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Classic,
    World,
    Soup,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Classic => "classic",
            Category::World => "world",
            Category::Soup => "soup",
        }
    }
}

impl FromStr for Category {
    type Err = BackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(Category::Classic),
            "world" => Ok(Category::World),
            "soup" => Ok(Category::Soup),
            other => Err(BackendError::InvalidCategory(other.to_owned())),
        }
    }
}

/// One entry of an ingredient list. Quantities are stated for the
/// recipe's base portion count; `p`/`f`/`c` are the macro-nutrient gram
/// estimates at that quantity.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub p: f64,
    pub f: f64,
    pub c: f64,
}

/// A single recipe with both language variants.
///
/// Recipes are seeded at startup and never created or edited through the
/// HTTP surface, so there is no `NewRecipe` counterpart.
#[derive(Clone, Debug, Serialize)]
pub struct Recipe {
    /// The ID of the recipe.
    pub id: Id,

    /// The static asset path of the illustration.
    pub image: String,

    /// The portion count all ingredient quantities are stated for.
    pub base_portions: i64,

    /// The display grouping.
    pub category: Category,

    pub title_uk: String,
    pub description_uk: String,
    pub ingredients_uk: Vec<Ingredient>,
    pub instructions_uk: String,

    pub title_en: String,
    pub description_en: String,
    pub ingredients_en: Vec<Ingredient>,
    pub instructions_en: String,
}

impl Recipe {
    pub fn title(&self, lang: Lang) -> &str {
        match lang {
            Lang::Uk => &self.title_uk,
            Lang::En => &self.title_en,
        }
    }

    pub fn description(&self, lang: Lang) -> &str {
        match lang {
            Lang::Uk => &self.description_uk,
            Lang::En => &self.description_en,
        }
    }

    pub fn ingredients(&self, lang: Lang) -> &[Ingredient] {
        match lang {
            Lang::Uk => &self.ingredients_uk,
            Lang::En => &self.ingredients_en,
        }
    }

    pub fn instructions(&self, lang: Lang) -> &str {
        match lang {
            Lang::Uk => &self.instructions_uk,
            Lang::En => &self.instructions_en,
        }
    }

    /// Numbered instruction lines for display.
    pub fn instruction_lines(&self, lang: Lang) -> Vec<&str> {
        self.instructions(lang)
            .lines()
            .filter(|l| !l.trim().is_empty())
            .collect()
    }
}

/// Splits recipes into the three fixed category groups, preserving order.
pub fn partition_by_category(recipes: &[Recipe]) -> (Vec<&Recipe>, Vec<&Recipe>, Vec<&Recipe>) {
    let mut classic = vec![];
    let mut world = vec![];
    let mut soup = vec![];

    for recipe in recipes {
        match recipe.category {
            Category::Classic => classic.push(recipe),
            Category::World => world.push(recipe),
            Category::Soup => soup.push(recipe),
        }
    }

    (classic, world, soup)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: i64, category: Category) -> Recipe {
        Recipe {
            id,
            image: "images/x.jpg".into(),
            base_portions: 4,
            category,
            title_uk: "Тест".into(),
            description_uk: String::new(),
            ingredients_uk: vec![],
            instructions_uk: "1. Раз.\n2. Два.".into(),
            title_en: "Test".into(),
            description_en: String::new(),
            ingredients_en: vec![],
            instructions_en: "1. One.\n\n2. Two.".into(),
        }
    }

    #[test]
    fn category_round_trips_through_strings() {
        for category in &[Category::Classic, Category::World, Category::Soup] {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), *category);
        }
        assert!("dessert".parse::<Category>().is_err());
    }

    #[test]
    fn partitions_preserve_order_within_group() {
        let recipes = vec![
            recipe(1, Category::Classic),
            recipe(2, Category::Soup),
            recipe(3, Category::Classic),
            recipe(4, Category::World),
        ];

        let (classic, world, soup) = partition_by_category(&recipes);

        assert_eq!(classic.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(world.iter().map(|r| r.id).collect::<Vec<_>>(), vec![4]);
        assert_eq!(soup.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn instruction_lines_skip_blanks() {
        let r = recipe(1, Category::Classic);
        assert_eq!(r.instruction_lines(Lang::En), vec!["1. One.", "2. Two."]);
    }
}
