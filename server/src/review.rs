use std::sync::Arc;

use serde::Serialize;

use crate::db::Db;
use crate::errors::BackendError;
use crate::store::{has_allowed_extension, Store};
use crate::user::Id;

/// A review as stored, joined with enough of its author to display.
#[derive(Clone, Debug, Serialize)]
pub struct Review {
    /// The ID of the review.
    pub id: Id,

    /// The free-text body.
    pub text: String,

    /// The stored photo path relative to the static directory, if any.
    pub photo: Option<String>,

    /// The recipe this review belongs to.
    pub recipe_id: Id,

    /// The author.
    pub user_id: Id,

    /// When the review was submitted, as unix seconds.
    pub created_at: i64,

    /// The author's display name (profile name or email).
    pub author: String,
}

/// An uploaded review photo before any validation.
#[derive(Clone, Debug)]
pub struct PhotoUpload {
    /// The client-supplied filename, untrusted.
    pub filename: String,

    /// The raw file contents.
    pub data: Vec<u8>,
}

/// Creates a review for the logged-in user.
///
/// The recipe must exist. A photo whose filename fails the extension
/// allow-list is dropped silently and the review is stored text-only;
/// a disallowed extension is never a hard error.
pub async fn submit_review(
    db: &(dyn Db + Send + Sync),
    store: &Arc<dyn Store + Send + Sync>,
    allowed_extensions: &[String],
    user_id: Id,
    recipe_id: Id,
    text: String,
    photo: Option<PhotoUpload>,
) -> Result<Id, BackendError> {
    if !db.recipe_exists(recipe_id).await? {
        return Err(BackendError::UnknownRecipe(recipe_id));
    }

    let photo_path = match photo {
        Some(upload) if has_allowed_extension(&upload.filename, allowed_extensions) => {
            Some(store.save(&upload.filename, upload.data).await?)
        }
        _ => None,
    };

    db.insert_review(user_id, recipe_id, &text, photo_path.as_deref())
        .await
}
