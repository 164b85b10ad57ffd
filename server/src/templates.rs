use askama::Template;
use serde::Serialize;

use crate::errors::BackendError;
use crate::i18n::{dictionary, Lang};
use crate::recipe::{Ingredient, Recipe};
use crate::review::Review;
use crate::user::{Id, User};

/// A review flattened for display.
pub struct ReviewView {
    pub author: String,
    pub text: String,
    pub photo: Option<String>,
}

/// One recipe projected into the requested language, with its reviews.
pub struct RecipeView {
    pub id: Id,
    pub image: String,
    pub base_portions: i64,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub instruction_lines: Vec<String>,
    pub reviews: Vec<ReviewView>,
}

pub struct UserView {
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
}

/// One category tab of the listing page.
pub struct SectionView {
    pub tab_id: &'static str,
    pub recipes: Vec<RecipeView>,
}

/// The single page of the site. Everything hangs off tabs on one
/// template, so this carries the whole catalog plus session state.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub lang: Lang,
    pub error_tab: Option<String>,
    pub flash: Option<String>,
    pub user: Option<UserView>,
    pub sections: Vec<SectionView>,
    pub calculator_json: String,
}

impl IndexPage {
    /// Localized UI string lookup used throughout the template.
    pub fn t(&self, key: &str) -> &'static str {
        dictionary(self.lang).get(key)
    }

    pub fn error_tab_is(&self, tab: &str) -> bool {
        self.error_tab.as_deref() == Some(tab)
    }
}

#[derive(Serialize)]
struct CalculatorRecipe<'a> {
    id: Id,
    title: &'a str,
    base_portions: i64,
    ingredients: &'a [Ingredient],
}

/// Assembles the page model: recipes are partitioned into the three
/// category groups and projected into `lang`, reviews are attached to
/// their recipes, and the calculator data is embedded as JSON.
pub fn index_page(
    lang: Lang,
    error_tab: Option<String>,
    flash: Option<String>,
    user: Option<&User>,
    recipes: &[Recipe],
    reviews: &[Review],
) -> Result<IndexPage, BackendError> {
    let (classic, world, soup) = crate::recipe::partition_by_category(recipes);

    let calculator: Vec<CalculatorRecipe> = recipes
        .iter()
        .map(|r| CalculatorRecipe {
            id: r.id,
            title: r.title(lang),
            base_portions: r.base_portions,
            ingredients: r.ingredients(lang),
        })
        .collect();

    let calculator_json =
        serde_json::to_string(&calculator).map_err(|source| BackendError::Json { source })?;

    let flash = flash.map(|key| dictionary(lang).get(&key).to_owned());

    Ok(IndexPage {
        lang,
        error_tab,
        flash,
        user: user.map(user_view),
        sections: vec![
            SectionView {
                tab_id: "classic",
                recipes: views(&classic, lang, reviews),
            },
            SectionView {
                tab_id: "world",
                recipes: views(&world, lang, reviews),
            },
            SectionView {
                tab_id: "soups",
                recipes: views(&soup, lang, reviews),
            },
        ],
        calculator_json,
    })
}

fn user_view(user: &User) -> UserView {
    UserView {
        first_name: user.first_name.clone().unwrap_or_default(),
        last_name: user.last_name.clone().unwrap_or_default(),
        display_name: user.display_name(),
    }
}

fn views(recipes: &[&Recipe], lang: Lang, reviews: &[Review]) -> Vec<RecipeView> {
    recipes
        .iter()
        .map(|recipe| RecipeView {
            id: recipe.id,
            image: recipe.image.clone(),
            base_portions: recipe.base_portions,
            title: recipe.title(lang).to_owned(),
            description: recipe.description(lang).to_owned(),
            ingredients: recipe.ingredients(lang).to_vec(),
            instruction_lines: recipe
                .instruction_lines(lang)
                .into_iter()
                .map(str::to_owned)
                .collect(),
            reviews: reviews
                .iter()
                .filter(|r| r.recipe_id == recipe.id)
                .map(|r| ReviewView {
                    author: r.author.clone(),
                    text: r.text.clone(),
                    photo: r.photo.clone(),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::index_page;
    use crate::i18n::Lang;
    use crate::seed;

    #[test]
    fn page_renders_in_both_languages() {
        let recipes = seed::catalog();

        for lang in &[Lang::Uk, Lang::En] {
            let page = index_page(*lang, None, None, None, &recipes, &[]).unwrap();
            let html = askama::Template::render(&page).unwrap();

            assert!(html.contains(recipes[0].title(*lang)));
            assert!(html.contains("recipes-data"));
        }
    }

    #[test]
    fn flash_keys_are_localized() {
        let recipes = seed::catalog();

        let page = index_page(
            Lang::En,
            Some("login".into()),
            Some("flash_login_fail".into()),
            None,
            &recipes,
            &[],
        )
        .unwrap();

        assert_eq!(page.flash.as_deref(), Some("Incorrect email or password."));
        assert!(page.error_tab_is("login"));
        assert!(!page.error_tab_is("register"));
    }
}
