use futures::future::BoxFuture;

use crate::errors::BackendError;
use crate::i18n::Lang;
use crate::recipe::Recipe;
use crate::review::Review;
use crate::session::Session;
use crate::user::{Id, User};

/// Repository-style access to the three tables plus the session store.
///
/// Relationships are explicit foreign keys and named query functions;
/// there are no object graphs to keep consistent.
pub trait Db {
    /// Creates all tables if they do not exist yet.
    fn ensure_schema(&self) -> BoxFuture<Result<(), BackendError>>;

    fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        created_at: i64,
    ) -> BoxFuture<Result<User, BackendError>>;

    fn user_by_email(&self, email: &str) -> BoxFuture<Result<Option<User>, BackendError>>;

    fn user_by_id(&self, id: Id) -> BoxFuture<Result<Option<User>, BackendError>>;

    fn update_profile(
        &self,
        id: Id,
        first_name: &str,
        last_name: &str,
    ) -> BoxFuture<Result<(), BackendError>>;

    fn count_users(&self) -> BoxFuture<Result<i64, BackendError>>;

    fn all_recipes(&self) -> BoxFuture<Result<Vec<Recipe>, BackendError>>;

    fn recipe_exists(&self, id: Id) -> BoxFuture<Result<bool, BackendError>>;

    fn count_recipes(&self) -> BoxFuture<Result<i64, BackendError>>;

    /// Inserts the seed catalog in one transaction.
    fn insert_recipes(&self, recipes: &[Recipe]) -> BoxFuture<Result<(), BackendError>>;

    fn insert_review(
        &self,
        user_id: Id,
        recipe_id: Id,
        text: &str,
        photo: Option<&str>,
    ) -> BoxFuture<Result<Id, BackendError>>;

    fn reviews_for_recipe(&self, recipe_id: Id) -> BoxFuture<Result<Vec<Review>, BackendError>>;

    fn reviews_by_user(&self, user_id: Id) -> BoxFuture<Result<Vec<Review>, BackendError>>;

    /// All reviews joined with their authors, ordered by recipe. Used to
    /// render the listing page in one query.
    fn all_reviews(&self) -> BoxFuture<Result<Vec<Review>, BackendError>>;

    fn count_reviews(&self) -> BoxFuture<Result<i64, BackendError>>;

    fn create_session(
        &self,
        token_hash: &str,
        lang: Lang,
        created_at: i64,
        expires_at: i64,
    ) -> BoxFuture<Result<(), BackendError>>;

    fn session_by_token_hash(
        &self,
        token_hash: &str,
        now: i64,
    ) -> BoxFuture<Result<Option<Session>, BackendError>>;

    fn set_session_user(
        &self,
        token_hash: &str,
        user_id: Option<Id>,
    ) -> BoxFuture<Result<(), BackendError>>;

    fn set_session_lang(&self, token_hash: &str, lang: Lang)
        -> BoxFuture<Result<(), BackendError>>;

    fn set_session_flash(
        &self,
        token_hash: &str,
        flash: Option<&str>,
    ) -> BoxFuture<Result<(), BackendError>>;

    fn delete_expired_sessions(&self, now: i64) -> BoxFuture<Result<u64, BackendError>>;
}

pub use self::sqlite::*;

mod sqlite {
    use std::str::FromStr;

    use futures::future::BoxFuture;
    use futures::FutureExt;
    use sqlx::sqlite::{SqlitePool, SqliteRow};

    use crate::errors::BackendError;
    use crate::i18n::Lang;
    use crate::recipe::{Category, Ingredient, Recipe};
    use crate::review::Review;
    use crate::session::Session;
    use crate::user::{Id, User};

    const USERS_EMAIL_CONSTRAINT: &str = "users.email";

    pub struct SqliteDb {
        pool: SqlitePool,
    }

    impl SqliteDb {
        pub fn new(pool: SqlitePool) -> Self {
            SqliteDb { pool }
        }
    }

    // these can be simplified once async functions in traits are stabilized
    impl super::Db for SqliteDb {
        fn ensure_schema(&self) -> BoxFuture<Result<(), BackendError>> {
            async move {
                // the sqlite driver prepares one statement at a time, so
                // the schema file is applied statement by statement
                for statement in include_str!("queries/schema.sql").split(';') {
                    let statement = statement.trim();

                    if statement.is_empty() {
                        continue;
                    }

                    sqlx::query(statement)
                        .execute(&self.pool)
                        .await
                        .map_err(map_sqlx_error)?;
                }

                Ok(())
            }
            .boxed()
        }

        fn create_user(
            &self,
            email: &str,
            password_hash: &str,
            created_at: i64,
        ) -> BoxFuture<Result<User, BackendError>> {
            let email = email.to_owned();
            let password_hash = password_hash.to_owned();

            async move {
                let query = sqlx::query(include_str!("queries/create_user.sql"));

                let result = query
                    .bind(&email)
                    .bind(&password_hash)
                    .bind(created_at)
                    .execute(&self.pool)
                    .await
                    .map_err(map_sqlx_error)?;

                Ok(User {
                    id: result.last_insert_rowid(),
                    email,
                    password_hash,
                    first_name: None,
                    last_name: None,
                    created_at,
                })
            }
            .boxed()
        }

        fn user_by_email(&self, email: &str) -> BoxFuture<Result<Option<User>, BackendError>> {
            let email = email.to_owned();

            async move {
                let query = sqlx::query(include_str!("queries/user_by_email.sql"));

                let user = query
                    .bind(email)
                    .try_map(|row: SqliteRow| user_from_row(&row))
                    .fetch_optional(&self.pool)
                    .await
                    .map_err(map_sqlx_error)?;

                Ok(user)
            }
            .boxed()
        }

        fn user_by_id(&self, id: Id) -> BoxFuture<Result<Option<User>, BackendError>> {
            async move {
                let query = sqlx::query(include_str!("queries/user_by_id.sql"));

                let user = query
                    .bind(id)
                    .try_map(|row: SqliteRow| user_from_row(&row))
                    .fetch_optional(&self.pool)
                    .await
                    .map_err(map_sqlx_error)?;

                Ok(user)
            }
            .boxed()
        }

        fn update_profile(
            &self,
            id: Id,
            first_name: &str,
            last_name: &str,
        ) -> BoxFuture<Result<(), BackendError>> {
            let first_name = first_name.to_owned();
            let last_name = last_name.to_owned();

            async move {
                let query = sqlx::query(include_str!("queries/update_profile.sql"));

                query
                    .bind(first_name)
                    .bind(last_name)
                    .bind(id)
                    .execute(&self.pool)
                    .await
                    .map_err(map_sqlx_error)?;

                Ok(())
            }
            .boxed()
        }

        fn count_users(&self) -> BoxFuture<Result<i64, BackendError>> {
            async move {
                let query =
                    sqlx::query_as::<_, (i64,)>(include_str!("queries/count_users.sql"));

                let (count,) = query.fetch_one(&self.pool).await.map_err(map_sqlx_error)?;

                Ok(count)
            }
            .boxed()
        }

        fn all_recipes(&self) -> BoxFuture<Result<Vec<Recipe>, BackendError>> {
            async move {
                let query = sqlx::query(include_str!("queries/all_recipes.sql"));

                let recipes = query
                    .try_map(|row: SqliteRow| recipe_from_row(&row))
                    .fetch_all(&self.pool)
                    .await
                    .map_err(map_sqlx_error)?;

                Ok(recipes)
            }
            .boxed()
        }

        fn recipe_exists(&self, id: Id) -> BoxFuture<Result<bool, BackendError>> {
            async move {
                let query =
                    sqlx::query_as::<_, (i64,)>(include_str!("queries/recipe_exists.sql"));

                let (count,) = query
                    .bind(id)
                    .fetch_one(&self.pool)
                    .await
                    .map_err(map_sqlx_error)?;

                Ok(count > 0)
            }
            .boxed()
        }

        fn count_recipes(&self) -> BoxFuture<Result<i64, BackendError>> {
            async move {
                let query =
                    sqlx::query_as::<_, (i64,)>(include_str!("queries/count_recipes.sql"));

                let (count,) = query.fetch_one(&self.pool).await.map_err(map_sqlx_error)?;

                Ok(count)
            }
            .boxed()
        }

        fn insert_recipes(&self, recipes: &[Recipe]) -> BoxFuture<Result<(), BackendError>> {
            let recipes = recipes.to_vec();

            async move {
                let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

                for recipe in &recipes {
                    let ingredients_uk = serialize_ingredients(recipe.id, &recipe.ingredients_uk)?;
                    let ingredients_en = serialize_ingredients(recipe.id, &recipe.ingredients_en)?;

                    sqlx::query(include_str!("queries/insert_recipe.sql"))
                        .bind(recipe.id)
                        .bind(&recipe.image)
                        .bind(recipe.base_portions)
                        .bind(recipe.category.as_str())
                        .bind(&recipe.title_uk)
                        .bind(&recipe.description_uk)
                        .bind(&ingredients_uk)
                        .bind(&recipe.instructions_uk)
                        .bind(&recipe.title_en)
                        .bind(&recipe.description_en)
                        .bind(&ingredients_en)
                        .bind(&recipe.instructions_en)
                        .execute(&mut tx)
                        .await
                        .map_err(map_sqlx_error)?;
                }

                tx.commit().await.map_err(map_sqlx_error)?;

                Ok(())
            }
            .boxed()
        }

        fn insert_review(
            &self,
            user_id: Id,
            recipe_id: Id,
            text: &str,
            photo: Option<&str>,
        ) -> BoxFuture<Result<Id, BackendError>> {
            let text = text.to_owned();
            let photo = photo.map(str::to_owned);

            async move {
                let query = sqlx::query(include_str!("queries/insert_review.sql"));

                let result = query
                    .bind(text)
                    .bind(photo)
                    .bind(recipe_id)
                    .bind(user_id)
                    .bind(crate::session::now())
                    .execute(&self.pool)
                    .await
                    .map_err(map_sqlx_error)?;

                Ok(result.last_insert_rowid())
            }
            .boxed()
        }

        fn reviews_for_recipe(
            &self,
            recipe_id: Id,
        ) -> BoxFuture<Result<Vec<Review>, BackendError>> {
            async move {
                let query = sqlx::query(include_str!("queries/reviews_for_recipe.sql"));

                let reviews = query
                    .bind(recipe_id)
                    .try_map(|row: SqliteRow| review_from_row(&row))
                    .fetch_all(&self.pool)
                    .await
                    .map_err(map_sqlx_error)?;

                Ok(reviews)
            }
            .boxed()
        }

        fn reviews_by_user(&self, user_id: Id) -> BoxFuture<Result<Vec<Review>, BackendError>> {
            async move {
                let query = sqlx::query(include_str!("queries/reviews_by_user.sql"));

                let reviews = query
                    .bind(user_id)
                    .try_map(|row: SqliteRow| review_from_row(&row))
                    .fetch_all(&self.pool)
                    .await
                    .map_err(map_sqlx_error)?;

                Ok(reviews)
            }
            .boxed()
        }

        fn all_reviews(&self) -> BoxFuture<Result<Vec<Review>, BackendError>> {
            async move {
                let query = sqlx::query(include_str!("queries/all_reviews.sql"));

                let reviews = query
                    .try_map(|row: SqliteRow| review_from_row(&row))
                    .fetch_all(&self.pool)
                    .await
                    .map_err(map_sqlx_error)?;

                Ok(reviews)
            }
            .boxed()
        }

        fn count_reviews(&self) -> BoxFuture<Result<i64, BackendError>> {
            async move {
                let query =
                    sqlx::query_as::<_, (i64,)>(include_str!("queries/count_reviews.sql"));

                let (count,) = query.fetch_one(&self.pool).await.map_err(map_sqlx_error)?;

                Ok(count)
            }
            .boxed()
        }

        fn create_session(
            &self,
            token_hash: &str,
            lang: Lang,
            created_at: i64,
            expires_at: i64,
        ) -> BoxFuture<Result<(), BackendError>> {
            let token_hash = token_hash.to_owned();

            async move {
                let query = sqlx::query(include_str!("queries/create_session.sql"));

                query
                    .bind(token_hash)
                    .bind(lang.code())
                    .bind(created_at)
                    .bind(expires_at)
                    .execute(&self.pool)
                    .await
                    .map_err(map_sqlx_error)?;

                Ok(())
            }
            .boxed()
        }

        fn session_by_token_hash(
            &self,
            token_hash: &str,
            now: i64,
        ) -> BoxFuture<Result<Option<Session>, BackendError>> {
            let token_hash = token_hash.to_owned();

            async move {
                let query = sqlx::query(include_str!("queries/session_by_token_hash.sql"));

                let session = query
                    .bind(token_hash)
                    .bind(now)
                    .try_map(|row: SqliteRow| session_from_row(&row))
                    .fetch_optional(&self.pool)
                    .await
                    .map_err(map_sqlx_error)?;

                Ok(session)
            }
            .boxed()
        }

        fn set_session_user(
            &self,
            token_hash: &str,
            user_id: Option<Id>,
        ) -> BoxFuture<Result<(), BackendError>> {
            let token_hash = token_hash.to_owned();

            async move {
                let query = sqlx::query(include_str!("queries/set_session_user.sql"));

                query
                    .bind(user_id)
                    .bind(token_hash)
                    .execute(&self.pool)
                    .await
                    .map_err(map_sqlx_error)?;

                Ok(())
            }
            .boxed()
        }

        fn set_session_lang(
            &self,
            token_hash: &str,
            lang: Lang,
        ) -> BoxFuture<Result<(), BackendError>> {
            let token_hash = token_hash.to_owned();

            async move {
                let query = sqlx::query(include_str!("queries/set_session_lang.sql"));

                query
                    .bind(lang.code())
                    .bind(token_hash)
                    .execute(&self.pool)
                    .await
                    .map_err(map_sqlx_error)?;

                Ok(())
            }
            .boxed()
        }

        fn set_session_flash(
            &self,
            token_hash: &str,
            flash: Option<&str>,
        ) -> BoxFuture<Result<(), BackendError>> {
            let token_hash = token_hash.to_owned();
            let flash = flash.map(str::to_owned);

            async move {
                let query = sqlx::query(include_str!("queries/set_session_flash.sql"));

                query
                    .bind(flash)
                    .bind(token_hash)
                    .execute(&self.pool)
                    .await
                    .map_err(map_sqlx_error)?;

                Ok(())
            }
            .boxed()
        }

        fn delete_expired_sessions(&self, now: i64) -> BoxFuture<Result<u64, BackendError>> {
            async move {
                let query = sqlx::query(include_str!("queries/delete_expired_sessions.sql"));

                let result = query
                    .bind(now)
                    .execute(&self.pool)
                    .await
                    .map_err(map_sqlx_error)?;

                Ok(result.rows_affected())
            }
            .boxed()
        }
    }

    fn user_from_row(row: &SqliteRow) -> Result<User, sqlx::Error> {
        Ok(User {
            id: try_get(row, "id")?,
            email: try_get(row, "email")?,
            password_hash: try_get(row, "password_hash")?,
            first_name: try_get(row, "first_name")?,
            last_name: try_get(row, "last_name")?,
            created_at: try_get(row, "created_at")?,
        })
    }

    fn recipe_from_row(row: &SqliteRow) -> Result<Recipe, sqlx::Error> {
        let id: Id = try_get(row, "id")?;

        let category: String = try_get(row, "category")?;
        let category =
            Category::from_str(&category).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        let ingredients_uk = parse_ingredients(id, try_get(row, "ingredients_uk")?)?;
        let ingredients_en = parse_ingredients(id, try_get(row, "ingredients_en")?)?;

        Ok(Recipe {
            id,
            image: try_get(row, "image")?,
            base_portions: try_get(row, "base_portions")?,
            category,
            title_uk: try_get(row, "title_uk")?,
            description_uk: try_get(row, "description_uk")?,
            ingredients_uk,
            instructions_uk: try_get(row, "instructions_uk")?,
            title_en: try_get(row, "title_en")?,
            description_en: try_get(row, "description_en")?,
            ingredients_en,
            instructions_en: try_get(row, "instructions_en")?,
        })
    }

    fn review_from_row(row: &SqliteRow) -> Result<Review, sqlx::Error> {
        let author = User {
            id: try_get(row, "user_id")?,
            email: try_get(row, "email")?,
            password_hash: String::new(),
            first_name: try_get(row, "first_name")?,
            last_name: try_get(row, "last_name")?,
            created_at: 0,
        }
        .display_name();

        Ok(Review {
            id: try_get(row, "id")?,
            text: try_get(row, "text")?,
            photo: try_get(row, "photo")?,
            recipe_id: try_get(row, "recipe_id")?,
            user_id: try_get(row, "user_id")?,
            created_at: try_get(row, "created_at")?,
            author,
        })
    }

    fn session_from_row(row: &SqliteRow) -> Result<Session, sqlx::Error> {
        let lang: String = try_get(row, "lang")?;
        let lang = Lang::parse(&lang)
            .ok_or_else(|| sqlx::Error::Decode(format!("unknown language code: {}", lang).into()))?;

        Ok(Session {
            token_hash: try_get(row, "token_hash")?,
            user_id: try_get(row, "user_id")?,
            lang,
            flash: try_get(row, "flash")?,
            created_at: try_get(row, "created_at")?,
            expires_at: try_get(row, "expires_at")?,
        })
    }

    fn parse_ingredients(id: Id, raw: String) -> Result<Vec<Ingredient>, sqlx::Error> {
        serde_json::from_str(&raw).map_err(|source| {
            sqlx::Error::Decode(Box::new(BackendError::InvalidIngredientData { id, source }))
        })
    }

    fn serialize_ingredients(id: Id, ingredients: &[Ingredient]) -> Result<String, BackendError> {
        serde_json::to_string(ingredients)
            .map_err(|source| BackendError::InvalidIngredientData { id, source })
    }

    fn try_get<'a, T>(row: &'a SqliteRow, column: &str) -> Result<T, sqlx::Error>
    where
        T: sqlx::Type<sqlx::Sqlite> + sqlx::decode::Decode<'a, sqlx::Sqlite>,
    {
        use sqlx::Row;

        row.try_get(column)
    }

    fn map_sqlx_error(error: sqlx::Error) -> BackendError {
        use sqlx::Error;

        match error {
            Error::Database(ref e) if e.message().contains(USERS_EMAIL_CONSTRAINT) => {
                BackendError::EmailTaken
            }
            _ => BackendError::Sqlx { source: error },
        }
    }
}
