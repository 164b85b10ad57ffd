use std::sync::Arc;

use log::{error, Logger};
use warp::http::StatusCode;
use warp::reject;
use warp::reply::{json, with_status, Json, WithStatus};

use crate::errors::BackendError;

pub mod admin;
mod handlers;
mod query;
mod rejection;

pub use internal::*;

/// The maximum review form size to accept, photo included.
const MAX_CONTENT_LENGTH: u64 = 16 * 1024 * 1024;

pub async fn format_rejection(
    logger: Arc<Logger>,
    rej: reject::Rejection,
) -> Result<WithStatus<Json>, reject::Rejection> {
    if let Some(r) = rej.find::<rejection::Rejection>() {
        let e = &r.error;
        error!(logger, "Backend error"; "context" => ?r.context, "error" => ?r.error, "status" => %status_code_for(e), "message" => %r.error);
        let flattened = r.flatten();

        return Ok(with_status(json(&flattened), status_code_for(e)));
    }

    Err(rej)
}

fn status_code_for(e: &BackendError) -> StatusCode {
    use BackendError::*;

    match e {
        MalformedFormSubmission | PasswordMismatch => StatusCode::BAD_REQUEST,
        EmailTaken => StatusCode::FORBIDDEN,
        InvalidCredentials | NotAuthenticated => StatusCode::UNAUTHORIZED,
        UnknownRecipe(..) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

mod internal {
    use std::path::PathBuf;

    use warp::cookie::optional as cookie;
    use warp::filters::multipart::form;
    use warp::filters::BoxedFilter;
    use warp::path::end;
    use warp::Filter;
    use warp::Reply;
    use warp::{get as g, path as p, post, query};

    use super::{handlers, query as q, MAX_CONTENT_LENGTH};
    use crate::environment::Environment;
    use crate::session::SESSION_COOKIE;
    use crate::user::Id;

    type Route = BoxedFilter<(Box<dyn Reply>,)>;

    fn with_environment(
        environment: Environment,
    ) -> impl Filter<Extract = (Environment,), Error = std::convert::Infallible> + Clone {
        warp::any().map(move || environment.clone())
    }

    pub fn make_index_route(environment: Environment) -> Route {
        with_environment(environment)
            .and(end())
            .and(g())
            .and(query::<q::IndexQuery>())
            .and(cookie(SESSION_COOKIE))
            .and_then(handlers::index)
            .boxed()
    }

    pub fn make_set_language_route(environment: Environment) -> Route {
        with_environment(environment)
            .and(warp::path!("lang" / String))
            .and(g())
            .and(cookie(SESSION_COOKIE))
            .and_then(handlers::set_language)
            .boxed()
    }

    pub fn make_register_route(environment: Environment) -> Route {
        with_environment(environment)
            .and(p("register"))
            .and(end())
            .and(post())
            .and(cookie(SESSION_COOKIE))
            .and(warp::body::form::<q::RegisterForm>())
            .and_then(handlers::register)
            .boxed()
    }

    pub fn make_login_route(environment: Environment) -> Route {
        with_environment(environment)
            .and(p("login"))
            .and(end())
            .and(post())
            .and(cookie(SESSION_COOKIE))
            .and(warp::body::form::<q::LoginForm>())
            .and_then(handlers::login)
            .boxed()
    }

    pub fn make_logout_route(environment: Environment) -> Route {
        with_environment(environment)
            .and(p("logout"))
            .and(end())
            .and(g())
            .and(cookie(SESSION_COOKIE))
            .and_then(handlers::logout)
            .boxed()
    }

    pub fn make_profile_route(environment: Environment) -> Route {
        with_environment(environment)
            .and(p("profile"))
            .and(end())
            .and(post())
            .and(cookie(SESSION_COOKIE))
            .and(warp::body::form::<q::ProfileForm>())
            .and_then(handlers::profile)
            .boxed()
    }

    pub fn make_add_review_route(environment: Environment) -> Route {
        with_environment(environment)
            .and(warp::path!("recipes" / Id / "reviews"))
            .and(post())
            .and(cookie(SESSION_COOKIE))
            .and(form().max_length(MAX_CONTENT_LENGTH))
            .and_then(handlers::add_review)
            .boxed()
    }

    pub fn make_static_route(static_dir: PathBuf) -> Route {
        p("static")
            .and(warp::fs::dir(static_dir))
            .map(|file: warp::fs::File| Box::new(file) as Box<dyn Reply>)
            .boxed()
    }
}
