use serde::Serialize;
use warp::reject;

use crate::errors::BackendError;
use crate::user::Id;

#[derive(Debug)]
pub struct Rejection {
    pub(crate) context: Context,
    pub(crate) error: BackendError,
}

impl Rejection {
    pub fn new(context: Context, error: BackendError) -> Self {
        Rejection { context, error }
    }

    pub fn flatten(&self) -> FlattenedRejection {
        FlattenedRejection {
            context: self.context.clone(),
            message: format!("{}", self.error),
        }
    }
}

impl reject::Reject for Rejection {}

#[derive(Debug, Serialize)]
pub struct FlattenedRejection {
    #[serde(flatten)]
    pub(crate) context: Context,
    pub(crate) message: String,
}

/// Which operation a rejection came from. Variants without data stay
/// struct-like so the untagged serialization flattens into a map.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum Context {
    Index {},
    SetLanguage { code: String },
    Register {},
    Login {},
    Logout {},
    Profile {},
    AddReview { recipe_id: Id },
}

impl Context {
    pub fn index() -> Context {
        Context::Index {}
    }

    pub fn set_language(code: String) -> Context {
        Context::SetLanguage { code }
    }

    pub fn register() -> Context {
        Context::Register {}
    }

    pub fn login() -> Context {
        Context::Login {}
    }

    pub fn logout() -> Context {
        Context::Logout {}
    }

    pub fn profile() -> Context {
        Context::Profile {}
    }

    pub fn add_review(recipe_id: Id) -> Context {
        Context::AddReview { recipe_id }
    }
}
