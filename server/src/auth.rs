use crate::db::Db;
use crate::errors::BackendError;
use crate::i18n::Lang;
use crate::session::{self, Session};
use crate::user::{Id, User};

pub mod crypto;

/// A freshly issued session. The token goes into the cookie; only the
/// digest is ever stored or looked up.
pub struct NewSession {
    pub token: String,
    pub token_hash: String,
}

/// Registers a new account. The caller passes both password fields so the
/// mismatch check happens before any hashing work.
pub async fn register(
    db: &(dyn Db + Send + Sync),
    email: &str,
    password: &str,
    confirmation: &str,
) -> Result<User, BackendError> {
    if password != confirmation {
        return Err(BackendError::PasswordMismatch);
    }

    let password_hash = crypto::hash_password(password)?;

    // a duplicate email surfaces here as `EmailTaken`
    db.create_user(email, &password_hash, session::now()).await
}

/// Verifies credentials. Unknown emails and wrong passwords produce the
/// same error.
pub async fn login(
    db: &(dyn Db + Send + Sync),
    email: &str,
    password: &str,
) -> Result<User, BackendError> {
    let user = db
        .user_by_email(email)
        .await?
        .ok_or(BackendError::InvalidCredentials)?;

    if !crypto::verify_password(password, &user.password_hash) {
        return Err(BackendError::InvalidCredentials);
    }

    Ok(user)
}

/// Creates an anonymous session row and returns the cookie token for it.
pub async fn issue_session(
    db: &(dyn Db + Send + Sync),
    secret: &str,
    lang: Lang,
    ttl_seconds: i64,
) -> Result<NewSession, BackendError> {
    let token = crypto::generate_token();
    let token_hash = crypto::hash_token(secret, &token);
    let now = session::now();

    db.create_session(&token_hash, lang, now, now + ttl_seconds)
        .await?;

    Ok(NewSession { token, token_hash })
}

/// Looks up the unexpired session for a cookie token, if any.
pub async fn resolve_session(
    db: &(dyn Db + Send + Sync),
    secret: &str,
    token: &str,
) -> Result<Option<Session>, BackendError> {
    let token_hash = crypto::hash_token(secret, token);

    db.session_by_token_hash(&token_hash, session::now()).await
}

/// Attaches a user to an existing session, preserving its language.
pub async fn login_user(
    db: &(dyn Db + Send + Sync),
    session: &Session,
    user_id: Id,
) -> Result<(), BackendError> {
    db.set_session_user(&session.token_hash, Some(user_id)).await
}

/// Detaches the user from a session. The session itself survives, so the
/// language choice does too.
pub async fn logout_user(
    db: &(dyn Db + Send + Sync),
    session: &Session,
) -> Result<(), BackendError> {
    db.set_session_user(&session.token_hash, None).await
}

/// Switches the session language. Unknown codes are ignored and leave the
/// session untouched.
pub async fn set_language(
    db: &(dyn Db + Send + Sync),
    session: &Session,
    code: &str,
) -> Result<Option<Lang>, BackendError> {
    let lang = match Lang::parse(code) {
        Some(lang) => lang,
        None => return Ok(None),
    };

    db.set_session_lang(&session.token_hash, lang).await?;

    Ok(Some(lang))
}

/// The logged-in user for a session, if the session has one and the user
/// still exists.
pub async fn current_user(
    db: &(dyn Db + Send + Sync),
    session: &Session,
) -> Result<Option<User>, BackendError> {
    match session.user_id {
        Some(id) => db.user_by_id(id).await,
        None => Ok(None),
    }
}
