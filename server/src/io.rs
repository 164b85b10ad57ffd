use std::io;

use bytes::{Buf, Bytes};
use futures::stream::{StreamExt, TryStreamExt};
use warp::multipart::{FormData, Part};

use crate::errors::BackendError;
use crate::review::PhotoUpload;

/// The fields of a review form, decoded from its multipart body.
pub struct ReviewSubmission {
    pub text: String,
    pub photo: Option<PhotoUpload>,
}

/// Walks the multipart stream and picks out the review fields. Unknown
/// parts are ignored. A photo part without a filename or without content
/// counts as no photo, which is what browsers send for an empty file
/// input.
pub async fn parse_review_submission(
    mut content: FormData,
) -> Result<ReviewSubmission, BackendError> {
    let mut text = None;
    let mut photo = None;

    // each part body must be drained before the next part is requested
    while let Some(part) = content
        .try_next()
        .await
        .map_err(|_| BackendError::MalformedFormSubmission)?
    {
        match part.name() {
            "review_text" => {
                let raw = part_as_vec(part)
                    .await
                    .map_err(|_| BackendError::MalformedFormSubmission)?;

                let value = String::from_utf8(raw)
                    .map_err(|_| BackendError::MalformedFormSubmission)?;

                text = Some(value);
            }
            "review_photo" => {
                let filename = part.filename().map(str::to_owned);

                let data = part_as_vec(part)
                    .await
                    .map_err(|_| BackendError::MalformedFormSubmission)?;

                match filename {
                    Some(filename) if !filename.is_empty() && !data.is_empty() => {
                        photo = Some(PhotoUpload { filename, data });
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }

    let text = text.ok_or(BackendError::MalformedFormSubmission)?;

    Ok(ReviewSubmission { text, photo })
}

/// Collects chunks of [`Part`].
pub async fn part_as_vec(raw: Part) -> Result<Vec<u8>, ()> {
    let vec_of_results = part_as_stream(raw).collect::<Vec<_>>().await;

    let vec_of_vecs = vec_of_results
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ())?;

    Ok(vec_of_vecs.concat())
}

/// Collects raw data from [`Part`].
pub fn part_as_stream(raw: Part) -> impl futures::Stream<Item = Result<Bytes, io::Error>> {
    raw.stream().map(|r| {
        r.map(|mut x| x.copy_to_bytes(x.remaining()))
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "could not retrieve chunk"))
    })
}
