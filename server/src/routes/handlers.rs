use warp::http::header::{LOCATION, SET_COOKIE};
use warp::http::{Response, StatusCode};
use warp::hyper::Body;
use warp::multipart::FormData;
use warp::reject;
use warp::Reply;

use log::debug;

use super::query::{IndexQuery, LoginForm, ProfileForm, RegisterForm};
use super::rejection::{Context, Rejection};
use crate::auth;
use crate::environment::Environment;
use crate::errors::BackendError;
use crate::io::parse_review_submission;
use crate::review;
use crate::session::{Session, SESSION_COOKIE};
use crate::templates;
use crate::user::Id;

pub type RouteResult = Result<Box<dyn Reply>, reject::Rejection>;

pub async fn index(
    environment: Environment,
    query: IndexQuery,
    token: Option<String>,
) -> RouteResult {
    let Environment { logger, db, .. } = environment.clone();

    let error_handler = |e: BackendError| Rejection::new(Context::index(), e);

    let session = resolve(&environment, token.as_deref())
        .await
        .map_err(error_handler)?;

    let lang = session.as_ref().map(|s| s.lang).unwrap_or_default();

    debug!(logger, "Rendering listing page"; "lang" => lang.code());

    let user = match &session {
        Some(session) => auth::current_user(&*db, session)
            .await
            .map_err(error_handler)?,
        None => None,
    };

    // the flash is consumed by this render
    let flash = match &session {
        Some(session) if session.flash.is_some() => {
            db.set_session_flash(&session.token_hash, None)
                .await
                .map_err(error_handler)?;
            session.flash.clone()
        }
        _ => None,
    };

    let recipes = db.all_recipes().await.map_err(error_handler)?;
    let reviews = db.all_reviews().await.map_err(error_handler)?;

    let page = templates::index_page(
        lang,
        query.error_tab,
        flash,
        user.as_ref(),
        &recipes,
        &reviews,
    )
    .map_err(error_handler)?;

    let html = askama::Template::render(&page)
        .map_err(BackendError::from)
        .map_err(error_handler)?;

    Ok(Box::new(warp::reply::html(html)))
}

pub async fn set_language(
    environment: Environment,
    code: String,
    token: Option<String>,
) -> RouteResult {
    let Environment { logger, db, .. } = environment.clone();

    let error_handler = |e: BackendError| Rejection::new(Context::set_language(code.clone()), e);

    let (session, issued) = ensure_session(&environment, token.as_deref())
        .await
        .map_err(&error_handler)?;

    debug!(logger, "Switching language"; "code" => %code);

    auth::set_language(&*db, &session, &code)
        .await
        .map_err(&error_handler)?;

    Ok(see_other("/", cookie_for(&environment, issued)))
}

pub async fn register(
    environment: Environment,
    token: Option<String>,
    form: RegisterForm,
) -> RouteResult {
    let Environment { logger, db, .. } = environment.clone();

    let error_handler = |e: BackendError| Rejection::new(Context::register(), e);

    let (session, issued) = ensure_session(&environment, token.as_deref())
        .await
        .map_err(&error_handler)?;

    debug!(logger, "Registering user...");

    match auth::register(&*db, &form.email, &form.password, &form.confirm_password).await {
        Ok(user) => {
            auth::login_user(&*db, &session, user.id)
                .await
                .map_err(&error_handler)?;

            Ok(see_other("/", cookie_for(&environment, issued)))
        }
        Err(e @ BackendError::PasswordMismatch) | Err(e @ BackendError::EmailTaken) => {
            let flash = match e {
                BackendError::PasswordMismatch => "flash_password_mismatch",
                _ => "flash_email_exists",
            };

            db.set_session_flash(&session.token_hash, Some(flash))
                .await
                .map_err(&error_handler)?;

            Ok(see_other(
                "/?error_tab=register",
                cookie_for(&environment, issued),
            ))
        }
        Err(e) => Err(error_handler(e).into()),
    }
}

pub async fn login(
    environment: Environment,
    token: Option<String>,
    form: LoginForm,
) -> RouteResult {
    let Environment { logger, db, .. } = environment.clone();

    let error_handler = |e: BackendError| Rejection::new(Context::login(), e);

    let (session, issued) = ensure_session(&environment, token.as_deref())
        .await
        .map_err(&error_handler)?;

    debug!(logger, "Logging in user...");

    match auth::login(&*db, &form.email, &form.password).await {
        Ok(user) => {
            auth::login_user(&*db, &session, user.id)
                .await
                .map_err(&error_handler)?;

            Ok(see_other("/", cookie_for(&environment, issued)))
        }
        Err(BackendError::InvalidCredentials) => {
            db.set_session_flash(&session.token_hash, Some("flash_login_fail"))
                .await
                .map_err(&error_handler)?;

            Ok(see_other(
                "/?error_tab=login",
                cookie_for(&environment, issued),
            ))
        }
        Err(e) => Err(error_handler(e).into()),
    }
}

pub async fn logout(environment: Environment, token: Option<String>) -> RouteResult {
    let Environment { logger, db, .. } = environment.clone();

    let error_handler = |e: BackendError| Rejection::new(Context::logout(), e);

    if let Some(session) = resolve(&environment, token.as_deref())
        .await
        .map_err(&error_handler)?
    {
        if session.is_authenticated() {
            debug!(logger, "Logging out user...");
            auth::logout_user(&*db, &session)
                .await
                .map_err(&error_handler)?;
        }
    }

    Ok(see_other("/", None))
}

pub async fn profile(
    environment: Environment,
    token: Option<String>,
    form: ProfileForm,
) -> RouteResult {
    let Environment { logger, db, .. } = environment.clone();

    let error_handler = |e: BackendError| Rejection::new(Context::profile(), e);

    let (session, issued) = ensure_session(&environment, token.as_deref())
        .await
        .map_err(&error_handler)?;

    let user_id = match session.user_id {
        Some(id) => id,
        None => {
            db.set_session_flash(&session.token_hash, Some("flash_login_required"))
                .await
                .map_err(&error_handler)?;

            return Ok(see_other(
                "/?error_tab=login",
                cookie_for(&environment, issued),
            ));
        }
    };

    debug!(logger, "Updating profile...");

    db.update_profile(user_id, &form.first_name, &form.last_name)
        .await
        .map_err(&error_handler)?;

    Ok(see_other("/", cookie_for(&environment, issued)))
}

pub async fn add_review(
    environment: Environment,
    recipe_id: Id,
    token: Option<String>,
    content: FormData,
) -> RouteResult {
    let Environment {
        logger,
        db,
        store,
        config,
    } = environment.clone();

    let error_handler = |e: BackendError| Rejection::new(Context::add_review(recipe_id), e);

    let (session, issued) = ensure_session(&environment, token.as_deref())
        .await
        .map_err(&error_handler)?;

    let user_id = match session.user_id {
        Some(id) => id,
        None => {
            db.set_session_flash(&session.token_hash, Some("flash_login_required"))
                .await
                .map_err(&error_handler)?;

            return Ok(see_other(
                "/?error_tab=login",
                cookie_for(&environment, issued),
            ));
        }
    };

    debug!(logger, "Parsing review submission..."; "recipe_id" => recipe_id);

    let submission = parse_review_submission(content)
        .await
        .map_err(&error_handler)?;

    debug!(logger, "Saving review..."; "recipe_id" => recipe_id, "has_photo" => submission.photo.is_some());

    match review::submit_review(
        &*db,
        &store,
        &config.allowed_photo_extensions,
        user_id,
        recipe_id,
        submission.text,
        submission.photo,
    )
    .await
    {
        Ok(_) => Ok(see_other("/", cookie_for(&environment, issued))),
        Err(BackendError::UnknownRecipe(_)) => {
            db.set_session_flash(&session.token_hash, Some("flash_recipe_not_found"))
                .await
                .map_err(&error_handler)?;

            Ok(see_other("/", cookie_for(&environment, issued)))
        }
        Err(e) => Err(error_handler(e).into()),
    }
}

/// Resolves the session for a cookie token, if the cookie is present and
/// the session has not expired.
async fn resolve(
    environment: &Environment,
    token: Option<&str>,
) -> Result<Option<Session>, BackendError> {
    match token {
        Some(token) => {
            auth::resolve_session(&*environment.db, &environment.config.session_secret, token)
                .await
        }
        None => Ok(None),
    }
}

/// Resolves the session or creates a fresh anonymous one. Returns the new
/// cookie token when one was issued.
async fn ensure_session(
    environment: &Environment,
    token: Option<&str>,
) -> Result<(Session, Option<String>), BackendError> {
    if let Some(session) = resolve(environment, token).await? {
        return Ok((session, None));
    }

    let new = auth::issue_session(
        &*environment.db,
        &environment.config.session_secret,
        Default::default(),
        environment.config.session_ttl_seconds,
    )
    .await?;

    let session = auth::resolve_session(
        &*environment.db,
        &environment.config.session_secret,
        &new.token,
    )
    .await?
    .ok_or(BackendError::NotAuthenticated)?;

    Ok((session, Some(new.token)))
}

fn cookie_for(environment: &Environment, issued: Option<String>) -> Option<String> {
    issued.map(|token| {
        format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
            SESSION_COOKIE, token, environment.config.session_ttl_seconds
        )
    })
}

/// A 303 redirect, optionally setting the session cookie. Built by hand
/// because the target may carry a query string.
fn see_other(location: &str, cookie: Option<String>) -> Box<dyn Reply> {
    let mut builder = Response::builder()
        .status(StatusCode::SEE_OTHER)
        .header(LOCATION, location);

    if let Some(cookie) = cookie {
        builder = builder.header(SET_COOKIE, cookie);
    }

    // the builder only fails on malformed header values, which these are not
    Box::new(
        builder
            .body(Body::empty())
            .unwrap_or_else(|_| Response::new(Body::empty())),
    )
}
