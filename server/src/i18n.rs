use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Serialize;

/// A language supported by the site. Anything else is rejected at the
/// boundary, so the rest of the code only ever sees these two.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Lang {
    Uk,
    En,
}

impl Lang {
    pub fn parse(code: &str) -> Option<Lang> {
        match code {
            "uk" => Some(Lang::Uk),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::Uk => "uk",
            Lang::En => "en",
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::Uk
    }
}

/// A static key→string mapping for one language.
pub struct Dictionary {
    entries: HashMap<&'static str, &'static str>,
}

impl Dictionary {
    fn new(entries: &[(&'static str, &'static str)]) -> Self {
        Dictionary {
            entries: entries.iter().copied().collect(),
        }
    }

    /// Looks up a key. Both dictionaries are kept in lock-step (see the
    /// parity test below), so a miss means a programming error; the key
    /// itself is returned to keep rendering total.
    pub fn get(&self, key: &str) -> &'static str {
        debug_assert!(self.entries.contains_key(key), "missing i18n key: {}", key);
        self.entries.get(key).copied().unwrap_or("")
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.entries.keys().copied().collect();
        keys.sort_unstable();
        keys
    }
}

pub fn dictionary(lang: Lang) -> &'static Dictionary {
    match lang {
        Lang::Uk => &UK,
        Lang::En => &EN,
    }
}

/// Both mappings must carry exactly the same keys. Checked by a startup
/// assertion in `main` and by the test at the bottom of this module.
pub fn in_parity() -> bool {
    UK.keys() == EN.keys()
}

lazy_static! {
    static ref UK: Dictionary = Dictionary::new(TRANSLATIONS_UK);
    static ref EN: Dictionary = Dictionary::new(TRANSLATIONS_EN);
}

static TRANSLATIONS_UK: &[(&str, &str)] = &[
    ("app_title", "Книга рецептів"),
    ("nav_title", "Книга рецептів"),
    ("nav_home", "Головна"),
    ("nav_classic", "Класичні рецепти"),
    ("nav_world", "Картопля у світі"),
    ("nav_soups", "Супи"),
    ("nav_calculator", "Калькулятор"),
    ("nav_login", "Увійти"),
    ("nav_register", "Реєстрація"),
    ("nav_logout", "Вийти"),
    ("nav_profile", "Профіль"),
    ("welcome_title", "Ласкаво просимо до Книги Рецептів!"),
    ("welcome_text", "Будь ласка, оберіть рецепт з меню вище, щоб почати."),
    ("login_title", "Вхід"),
    ("register_title", "Реєстрація"),
    ("email_label", "Email"),
    ("password_label", "Пароль"),
    ("confirm_password_label", "Підтвердіть пароль"),
    ("profile_title", "Редагувати профіль"),
    ("profile_first_name", "Ім'я:"),
    ("profile_last_name", "Прізвище:"),
    ("profile_button_save", "Зберегти зміни"),
    ("profile_overlay_title", "Ваш профіль"),
    ("profile_overlay_name", "Ім'я:"),
    ("profile_overlay_surname", "Прізвище:"),
    ("profile_overlay_not_set", "Не вказано"),
    ("profile_overlay_edit_btn", "Редагувати профіль"),
    (
        "reviews_login_prompt",
        "Ви повинні увійти в акаунт, щоб залишити відгук.",
    ),
    ("calculator_title", "Калькулятор інгредієнтів"),
    ("calculator_select", "Оберіть рецепт:"),
    ("calculator_select_default", "-- Оберіть --"),
    ("calculator_base_text_1", "Рецепт розрахований на"),
    ("calculator_base_text_2", "порції."),
    ("calculator_portions_label", "Скільки порцій вам потрібно?"),
    ("calculator_button", "Перерахувати"),
    ("calculator_results_title_1", "Інгредієнти на"),
    ("calculator_results_title_2", "порцій:"),
    ("calculator_nutrition_title", "Орієнтовне БЖУ"),
    ("nutrition_total", "Всього на"),
    ("nutrition_protein", "Білки"),
    ("nutrition_fats", "Жири"),
    ("nutrition_carbs", "Вуглеводи"),
    ("nutrition_unit", "г"),
    ("recipe_ingredients_title", "Інгредієнти"),
    ("recipe_portions", "порції"),
    ("recipe_instructions", "Інструкція"),
    ("reviews_title", "Залишити відгук"),
    ("reviews_label_text", "Ваш відгук:"),
    ("reviews_label_photo", "Прикріпити фото (необов'язково):"),
    ("reviews_button", "Надіслати відгук"),
    ("reviews_existing_title", "Відгуки"),
    ("reviews_none", "Відгуків поки що немає. Будьте першим!"),
    (
        "potato_greeting",
        "Привіт! Я твій Картопляний Друг. Оберіть рецепт!",
    ),
    ("potato_switch_tab", "О, подивимось цей рецепт!"),
    ("potato_calc_many", "Ого, {portions} порцій! Це буде вечірка!"),
    ("potato_calc_few", "Хм, сьогодні готуємо небагато!"),
    ("potato_calc_butter", "Ого, це ДУЖЕ багато масла!"),
    (
        "fact_1",
        "Чи знали ви, що до Європи картоплю спочатку завезли як декоративну рослину?",
    ),
    (
        "fact_2",
        "У Франції Антуан-Огюст Пармантьє влаштував 'рекламну кампанію', виставивши озброєну охорону біля картопляних полів.",
    ),
    (
        "fact_3",
        "Картопля стала першою овочем, вирощеним у космосі на борту шатлу 'Колумбія' у 1995 році.",
    ),
    (
        "ad_1",
        "Спробуйте рецепти з усього світу! Наприклад, Іспанську Тортилью.",
    ),
    ("ad_2", "Потрібно більше порцій? Використовуйте наш калькулятор!"),
    ("flash_password_mismatch", "Паролі не співпадають!"),
    ("flash_email_exists", "Користувач з таким email вже існує."),
    ("flash_login_fail", "Неправильний email або пароль."),
    (
        "flash_login_required",
        "Будь ласка, увійдіть, щоб продовжити.",
    ),
    ("flash_recipe_not_found", "Рецепт не знайдено."),
];

static TRANSLATIONS_EN: &[(&str, &str)] = &[
    ("app_title", "Recipe Book"),
    ("nav_title", "Recipe Book"),
    ("nav_home", "Home"),
    ("nav_classic", "Classic Recipes"),
    ("nav_world", "Potatoes in the World"),
    ("nav_soups", "Soups"),
    ("nav_calculator", "Calculator"),
    ("nav_login", "Login"),
    ("nav_register", "Register"),
    ("nav_logout", "Logout"),
    ("nav_profile", "Profile"),
    ("welcome_title", "Welcome to the Recipe Book!"),
    (
        "welcome_text",
        "Please select a recipe from the menu above to get started.",
    ),
    ("login_title", "Login"),
    ("register_title", "Register"),
    ("email_label", "Email"),
    ("password_label", "Password"),
    ("confirm_password_label", "Confirm Password"),
    ("profile_title", "Edit Profile"),
    ("profile_first_name", "First Name:"),
    ("profile_last_name", "Last Name:"),
    ("profile_button_save", "Save Changes"),
    ("profile_overlay_title", "Your Profile"),
    ("profile_overlay_name", "Name:"),
    ("profile_overlay_surname", "Surname:"),
    ("profile_overlay_not_set", "Not set"),
    ("profile_overlay_edit_btn", "Edit Profile"),
    (
        "reviews_login_prompt",
        "You must be logged in to leave a review.",
    ),
    ("calculator_title", "Ingredient Calculator"),
    ("calculator_select", "Select a recipe:"),
    ("calculator_select_default", "-- Select --"),
    ("calculator_base_text_1", "Recipe based on"),
    ("calculator_base_text_2", "portions."),
    ("calculator_portions_label", "How many portions do you need?"),
    ("calculator_button", "Recalculate"),
    ("calculator_results_title_1", "Ingredients for"),
    ("calculator_results_title_2", "portions:"),
    ("calculator_nutrition_title", "Estimated Macros"),
    ("nutrition_total", "Total for"),
    ("nutrition_protein", "Protein"),
    ("nutrition_fats", "Fats"),
    ("nutrition_carbs", "Carbs"),
    ("nutrition_unit", "g"),
    ("recipe_ingredients_title", "Ingredients"),
    ("recipe_portions", "portions"),
    ("recipe_instructions", "Instructions"),
    ("reviews_title", "Leave a review"),
    ("reviews_label_text", "Your review:"),
    ("reviews_label_photo", "Attach a photo (optional):"),
    ("reviews_button", "Submit Review"),
    ("reviews_existing_title", "Reviews"),
    ("reviews_none", "No reviews yet. Be the first!"),
    ("potato_greeting", "Hi! I'm your Potato Buddy. Pick a recipe!"),
    ("potato_switch_tab", "Oh, let's check out this recipe!"),
    ("potato_calc_many", "Wow, {portions} portions! That's a party!"),
    ("potato_calc_few", "Hm, cooking just a little today!"),
    ("potato_calc_butter", "Whoa, that's a LOT of butter!"),
    (
        "fact_1",
        "Did you know that potatoes were first brought to Europe as an ornamental plant?",
    ),
    (
        "fact_2",
        "In France, Antoine-Augustin Parmentier ran a 'publicity campaign' by placing armed guards around potato fields.",
    ),
    (
        "fact_3",
        "The potato was the first vegetable to be grown in space aboard the Space Shuttle Columbia in 1995.",
    ),
    (
        "ad_1",
        "Try recipes from around the world!\nFor example, the Spanish Tortilla.",
    ),
    ("ad_2", "Need more portions? Use our calculator!"),
    ("flash_password_mismatch", "Passwords do not match!"),
    ("flash_email_exists", "A user with this email already exists."),
    ("flash_login_fail", "Incorrect email or password."),
    ("flash_login_required", "Please log in to continue."),
    ("flash_recipe_not_found", "Recipe not found."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionaries_have_the_same_keys() {
        assert!(in_parity());
    }

    #[test]
    fn rejects_unknown_language_codes() {
        assert_eq!(Lang::parse("uk"), Some(Lang::Uk));
        assert_eq!(Lang::parse("en"), Some(Lang::En));
        assert_eq!(Lang::parse("fr"), None);
        assert_eq!(Lang::parse(""), None);
        assert_eq!(Lang::parse("UK"), None);
    }

    #[test]
    fn flash_keys_are_present_in_both_languages() {
        for key in &[
            "flash_password_mismatch",
            "flash_email_exists",
            "flash_login_fail",
            "flash_login_required",
            "flash_recipe_not_found",
            "reviews_login_prompt",
        ] {
            assert!(dictionary(Lang::Uk).contains(key));
            assert!(dictionary(Lang::En).contains(key));
        }
    }
}
