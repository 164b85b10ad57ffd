use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;
use warp::http::StatusCode;
use warp::Filter;

use recipebook::auth;
use recipebook::db::{Db, SqliteDb};
use recipebook::environment::{Config, Environment};
use recipebook::errors::BackendError;
use recipebook::i18n::{self, Lang};
use recipebook::review::{self, PhotoUpload};
use recipebook::routes;
use recipebook::seed;
use recipebook::store::mock::MockStore;
use recipebook::store::Store;

const SECRET: &str = "test-secret";

// in-memory sqlite gives every connection its own database, so the pool
// is pinned to a single connection
async fn make_db() -> Arc<SqliteDb> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect to in-memory database");

    let db = SqliteDb::new(pool);
    db.ensure_schema().await.expect("create schema");

    Arc::new(db)
}

fn make_environment(db: Arc<SqliteDb>, store: Arc<MockStore>) -> Environment {
    let logger = Arc::new(log::initialize_logger());

    let config = Arc::new(Config::new(
        SECRET.to_owned(),
        3600,
        vec!["png".into(), "jpg".into(), "jpeg".into(), "gif".into()],
    ));

    Environment::new(logger, db, store as Arc<dyn Store + Send + Sync>, config)
}

/// Registers an account and returns a logged-in session cookie token.
async fn logged_in_token(db: &(dyn Db + Send + Sync)) -> String {
    let user = auth::register(db, "cook@example.com", "secret", "secret")
        .await
        .unwrap();

    let new = auth::issue_session(db, SECRET, Lang::default(), 3600)
        .await
        .unwrap();
    let session = auth::resolve_session(db, SECRET, &new.token)
        .await
        .unwrap()
        .unwrap();

    auth::login_user(db, &session, user.id).await.unwrap();

    new.token
}

/// Builds a multipart review form the way a browser would.
fn multipart_body(boundary: &str, text: &str, photo: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();

    body.extend_from_slice(
        format!(
            "--{}\r\ncontent-disposition: form-data; name=\"review_text\"\r\n\r\n{}\r\n",
            boundary, text
        )
        .as_bytes(),
    );

    if let Some((filename, data)) = photo {
        body.extend_from_slice(
            format!(
                "--{}\r\ncontent-disposition: form-data; name=\"review_photo\"; filename=\"{}\"\r\ncontent-type: application/octet-stream\r\n\r\n",
                boundary, filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());

    body
}

fn extract_session_token(response: &warp::http::Response<warp::hyper::body::Bytes>) -> String {
    let cookie = response
        .headers()
        .get("set-cookie")
        .expect("set-cookie header")
        .to_str()
        .unwrap();

    let token = cookie
        .strip_prefix("session=")
        .expect("session cookie")
        .split(';')
        .next()
        .unwrap();

    token.to_owned()
}

#[tokio::test]
async fn seeding_is_idempotent() {
    let db = make_db().await;
    let logger = Arc::new(log::initialize_logger());

    seed::bootstrap(logger.clone(), &*db).await.unwrap();
    seed::bootstrap(logger, &*db).await.unwrap();

    assert_eq!(db.count_recipes().await.unwrap(), 14);
}

#[tokio::test]
async fn duplicate_registration_is_rejected() {
    let db = make_db().await;

    auth::register(&*db, "cook@example.com", "secret", "secret")
        .await
        .unwrap();

    let result = auth::register(&*db, "cook@example.com", "other", "other").await;

    assert!(matches!(result, Err(BackendError::EmailTaken)));
    assert_eq!(db.count_users().await.unwrap(), 1);
}

#[tokio::test]
async fn password_mismatch_creates_no_account() {
    let db = make_db().await;

    let result = auth::register(&*db, "cook@example.com", "secret", "something-else").await;

    assert!(matches!(result, Err(BackendError::PasswordMismatch)));
    assert_eq!(db.count_users().await.unwrap(), 0);
}

#[tokio::test]
async fn login_failures_are_uniform() {
    let db = make_db().await;

    auth::register(&*db, "cook@example.com", "secret", "secret")
        .await
        .unwrap();

    let wrong_password = auth::login(&*db, "cook@example.com", "nope").await;
    let unknown_email = auth::login(&*db, "nobody@example.com", "secret").await;

    assert!(matches!(
        wrong_password,
        Err(BackendError::InvalidCredentials)
    ));
    assert!(matches!(unknown_email, Err(BackendError::InvalidCredentials)));
    assert_eq!(
        format!("{}", wrong_password.unwrap_err()),
        format!("{}", unknown_email.unwrap_err()),
    );
}

#[tokio::test]
async fn registration_session_authorizes_profile_update() {
    let db = make_db().await;
    let environment = make_environment(db.clone(), Arc::new(MockStore::default()));

    let register = routes::make_register_route(environment.clone());
    let profile = routes::make_profile_route(environment);
    let filter = register.or(profile);

    let response = warp::test::request()
        .method("POST")
        .path("/register")
        .header("content-type", "application/x-www-form-urlencoded")
        .body("email=cook%40example.com&password=secret&confirm_password=secret")
        .reply(&filter)
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/");
    let token = extract_session_token(&response);

    let response = warp::test::request()
        .method("POST")
        .path("/profile")
        .header("content-type", "application/x-www-form-urlencoded")
        .header("cookie", format!("session={}", token))
        .body("first_name=Ada&last_name=Lovelace")
        .reply(&filter)
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let user = db
        .user_by_email("cook@example.com")
        .await
        .unwrap()
        .expect("registered user");
    assert_eq!(user.first_name.as_deref(), Some("Ada"));
    assert_eq!(user.last_name.as_deref(), Some("Lovelace"));
}

#[tokio::test]
async fn profile_update_without_login_redirects_to_login_tab() {
    let db = make_db().await;
    let environment = make_environment(db.clone(), Arc::new(MockStore::default()));

    let filter = routes::make_profile_route(environment);

    let response = warp::test::request()
        .method("POST")
        .path("/profile")
        .header("content-type", "application/x-www-form-urlencoded")
        .body("first_name=Ada&last_name=Lovelace")
        .reply(&filter)
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/?error_tab=login");

    let token = extract_session_token(&response);
    let session = auth::resolve_session(&*db, SECRET, &token)
        .await
        .unwrap()
        .expect("anonymous session for flash");
    assert_eq!(session.flash.as_deref(), Some("flash_login_required"));
    assert_eq!(db.count_users().await.unwrap(), 0);
}

#[tokio::test]
async fn failed_login_redirects_to_login_tab_with_flash() {
    let db = make_db().await;
    let environment = make_environment(db.clone(), Arc::new(MockStore::default()));

    let filter = routes::make_login_route(environment);

    let response = warp::test::request()
        .method("POST")
        .path("/login")
        .header("content-type", "application/x-www-form-urlencoded")
        .body("email=nobody%40example.com&password=nope")
        .reply(&filter)
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/?error_tab=login");

    let token = extract_session_token(&response);
    let session = auth::resolve_session(&*db, SECRET, &token)
        .await
        .unwrap()
        .expect("session for flash");
    assert_eq!(session.flash.as_deref(), Some("flash_login_fail"));
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn listing_page_renders_seeded_recipes() {
    let db = make_db().await;
    let logger = Arc::new(log::initialize_logger());
    seed::bootstrap(logger, &*db).await.unwrap();

    let environment = make_environment(db, Arc::new(MockStore::default()));
    let filter = routes::make_index_route(environment);

    let response = warp::test::request().path("/").reply(&filter).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = String::from_utf8_lossy(response.body());
    // default language is Ukrainian
    assert!(body.contains("Картопля по-селянськи"));
    assert!(body.contains("recipes-data"));
}

#[tokio::test]
async fn review_against_unknown_recipe_is_rejected() {
    let db = make_db().await;
    let logger = Arc::new(log::initialize_logger());
    seed::bootstrap(logger, &*db).await.unwrap();

    let store: Arc<dyn Store + Send + Sync> = Arc::new(MockStore::default());
    let user = auth::register(&*db, "cook@example.com", "secret", "secret")
        .await
        .unwrap();

    let result = review::submit_review(
        &*db,
        &store,
        &["png".to_owned()],
        user.id,
        999,
        "great".into(),
        None,
    )
    .await;

    assert!(matches!(result, Err(BackendError::UnknownRecipe(999))));
    assert_eq!(db.count_reviews().await.unwrap(), 0);
}

#[tokio::test]
async fn disallowed_photo_extension_is_dropped_silently() {
    let db = make_db().await;
    let logger = Arc::new(log::initialize_logger());
    seed::bootstrap(logger, &*db).await.unwrap();

    let mock = Arc::new(MockStore::default());
    let store: Arc<dyn Store + Send + Sync> = mock.clone();
    let user = auth::register(&*db, "cook@example.com", "secret", "secret")
        .await
        .unwrap();

    let id = review::submit_review(
        &*db,
        &store,
        &["png".to_owned(), "jpg".to_owned()],
        user.id,
        1,
        "nice".into(),
        Some(PhotoUpload {
            filename: "payload.exe".into(),
            data: vec![1, 2, 3],
        }),
    )
    .await
    .unwrap();

    let reviews = db.reviews_for_recipe(1).await.unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].id, id);
    assert_eq!(reviews[0].photo, None);
    assert!(mock.map.read().unwrap().is_empty());

    let by_user = db.reviews_by_user(user.id).await.unwrap();
    assert_eq!(by_user.len(), 1);
    assert_eq!(by_user[0].id, id);
}

#[tokio::test]
async fn photo_paths_cannot_escape_the_upload_directory() {
    let db = make_db().await;
    let logger = Arc::new(log::initialize_logger());
    seed::bootstrap(logger, &*db).await.unwrap();

    let mock = Arc::new(MockStore::default());
    let store: Arc<dyn Store + Send + Sync> = mock.clone();
    let user = auth::register(&*db, "cook@example.com", "secret", "secret")
        .await
        .unwrap();

    review::submit_review(
        &*db,
        &store,
        &["png".to_owned()],
        user.id,
        1,
        "nice".into(),
        Some(PhotoUpload {
            filename: "../../escape attempt!.png".into(),
            data: vec![1, 2, 3],
        }),
    )
    .await
    .unwrap();

    let reviews = db.reviews_for_recipe(1).await.unwrap();
    assert_eq!(
        reviews[0].photo.as_deref(),
        Some("uploads/escape_attempt_.png")
    );
    assert!(mock
        .map
        .read()
        .unwrap()
        .contains_key("uploads/escape_attempt_.png"));
}

#[tokio::test]
async fn review_route_accepts_a_text_only_submission() {
    let db = make_db().await;
    let logger = Arc::new(log::initialize_logger());
    seed::bootstrap(logger, &*db).await.unwrap();

    let environment = make_environment(db.clone(), Arc::new(MockStore::default()));
    let filter = routes::make_add_review_route(environment);

    let token = logged_in_token(&*db).await;
    let boundary = "review-form-boundary";

    let response = warp::test::request()
        .method("POST")
        .path("/recipes/1/reviews")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", boundary),
        )
        .header("cookie", format!("session={}", token))
        .body(multipart_body(boundary, "Smachno!", None))
        .reply(&filter)
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/");

    let reviews = db.reviews_for_recipe(1).await.unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].text, "Smachno!");
    assert_eq!(reviews[0].photo, None);
}

#[tokio::test]
async fn review_route_stores_an_allowed_photo() {
    let db = make_db().await;
    let logger = Arc::new(log::initialize_logger());
    seed::bootstrap(logger, &*db).await.unwrap();

    let mock = Arc::new(MockStore::default());
    let environment = make_environment(db.clone(), mock.clone());
    let filter = routes::make_add_review_route(environment);

    let token = logged_in_token(&*db).await;
    let boundary = "review-form-boundary";

    let response = warp::test::request()
        .method("POST")
        .path("/recipes/2/reviews")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", boundary),
        )
        .header("cookie", format!("session={}", token))
        .body(multipart_body(
            boundary,
            "Dobre!",
            Some(("snap.png", &b"png bytes"[..])),
        ))
        .reply(&filter)
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/");

    let reviews = db.reviews_for_recipe(2).await.unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].photo.as_deref(), Some("uploads/snap.png"));
    assert_eq!(
        mock.map.read().unwrap().get("uploads/snap.png"),
        Some(&b"png bytes".to_vec())
    );
}

#[tokio::test]
async fn review_route_redirects_unknown_recipe_with_flash() {
    let db = make_db().await;
    let logger = Arc::new(log::initialize_logger());
    seed::bootstrap(logger, &*db).await.unwrap();

    let environment = make_environment(db.clone(), Arc::new(MockStore::default()));
    let filter = routes::make_add_review_route(environment);

    let token = logged_in_token(&*db).await;
    let boundary = "review-form-boundary";

    let response = warp::test::request()
        .method("POST")
        .path("/recipes/999/reviews")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", boundary),
        )
        .header("cookie", format!("session={}", token))
        .body(multipart_body(boundary, "great", None))
        .reply(&filter)
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/");

    let session = auth::resolve_session(&*db, SECRET, &token)
        .await
        .unwrap()
        .expect("session for flash");
    assert_eq!(session.flash.as_deref(), Some("flash_recipe_not_found"));
    assert_eq!(db.count_reviews().await.unwrap(), 0);
}

#[tokio::test]
async fn review_form_without_text_is_a_bad_request() {
    let db = make_db().await;
    let logger = Arc::new(log::initialize_logger());
    seed::bootstrap(logger, &*db).await.unwrap();

    let environment = make_environment(db.clone(), Arc::new(MockStore::default()));
    let logger = environment.logger.clone();
    let filter = routes::make_add_review_route(environment)
        .recover(move |r| routes::format_rejection(logger.clone(), r));

    let token = logged_in_token(&*db).await;
    let boundary = "review-form-boundary";

    let response = warp::test::request()
        .method("POST")
        .path("/recipes/1/reviews")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", boundary),
        )
        .header("cookie", format!("session={}", token))
        .body(format!("--{}--\r\n", boundary))
        .reply(&filter)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(db.count_reviews().await.unwrap(), 0);
}

#[tokio::test]
async fn unknown_language_codes_are_ignored() {
    let db = make_db().await;

    let new = auth::issue_session(&*db, SECRET, Lang::default(), 3600)
        .await
        .unwrap();
    let session = auth::resolve_session(&*db, SECRET, &new.token)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(auth::set_language(&*db, &session, "fr").await.unwrap(), None);

    let session = auth::resolve_session(&*db, SECRET, &new.token)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(session.lang, Lang::Uk);

    assert_eq!(
        auth::set_language(&*db, &session, "en").await.unwrap(),
        Some(Lang::En)
    );

    let session = auth::resolve_session(&*db, SECRET, &new.token)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(session.lang, Lang::En);
}

#[tokio::test]
async fn logout_keeps_the_session_language() {
    let db = make_db().await;

    let user = auth::register(&*db, "cook@example.com", "secret", "secret")
        .await
        .unwrap();

    let new = auth::issue_session(&*db, SECRET, Lang::default(), 3600)
        .await
        .unwrap();
    let session = auth::resolve_session(&*db, SECRET, &new.token)
        .await
        .unwrap()
        .unwrap();

    auth::login_user(&*db, &session, user.id).await.unwrap();
    auth::set_language(&*db, &session, "en").await.unwrap();
    auth::logout_user(&*db, &session).await.unwrap();

    let session = auth::resolve_session(&*db, SECRET, &new.token)
        .await
        .unwrap()
        .unwrap();
    assert!(!session.is_authenticated());
    assert_eq!(session.lang, Lang::En);
}

#[tokio::test]
async fn expired_sessions_stop_resolving() {
    let db = make_db().await;

    let new = auth::issue_session(&*db, SECRET, Lang::default(), -1)
        .await
        .unwrap();

    let session = auth::resolve_session(&*db, SECRET, &new.token).await.unwrap();
    assert!(session.is_none());

    let swept = db
        .delete_expired_sessions(recipebook::session::now())
        .await
        .unwrap();
    assert_eq!(swept, 1);
}

#[test]
fn translations_cover_both_languages_equally() {
    assert!(i18n::in_parity());
}
