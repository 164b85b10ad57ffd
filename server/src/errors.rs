use thiserror::Error;
use warp::reject;

/// Enumerates high-level errors returned by this library.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Represents an SQL error.
    #[error("SQLx error")]
    Sqlx { source: sqlx::Error },

    /// Represents a registration where the two passwords differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// Represents a registration with an email that is already taken.
    #[error("a user with this email already exists")]
    EmailTaken,

    /// Represents a failed login. Deliberately carries no detail about
    /// whether the email exists.
    #[error("incorrect email or password")]
    InvalidCredentials,

    /// Represents a protected operation attempted without a logged-in user.
    #[error("not authenticated")]
    NotAuthenticated,

    /// Represents a review submitted against a recipe that does not exist.
    #[error("no recipe with ID {0}")]
    UnknownRecipe(i64),

    /// Represents a failure to derive or parse a password hash.
    #[error("password hashing error")]
    PasswordHash,

    /// Represents an error caused by missing or unreadable parts in a
    /// form submission.
    #[error("malformed form submission")]
    MalformedFormSubmission,

    /// Represents ingredient JSON in the database that does not parse.
    #[error("invalid ingredient data for recipe {id}")]
    InvalidIngredientData {
        id: i64,
        source: serde_json::Error,
    },

    /// Represents an unrecognized recipe category in the database.
    #[error("invalid recipe category: {0}")]
    InvalidCategory(String),

    /// Represents a failure serializing embedded page data.
    #[error("JSON serialization error")]
    Json { source: serde_json::Error },

    /// Represents an error saving an uploaded file.
    #[error("store error")]
    Store { source: StoreError },

    /// Represents a template rendering failure.
    #[error("template rendering error")]
    Render { source: askama::Error },
}

/// Enumerates errors returned by the upload store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Represents a disk I/O failure while saving an upload.
    #[error("could not write upload")]
    Io { source: std::io::Error },
}

impl From<StoreError> for BackendError {
    fn from(source: StoreError) -> Self {
        BackendError::Store { source }
    }
}

impl From<askama::Error> for BackendError {
    fn from(source: askama::Error) -> Self {
        BackendError::Render { source }
    }
}

impl reject::Reject for BackendError {}
