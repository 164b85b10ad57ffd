use crate::i18n::Lang;
use crate::user::Id;

/// The cookie that carries the session token.
pub const SESSION_COOKIE: &str = "session";

/// One browser session, resolved from the opaque cookie token.
///
/// Sessions exist for anonymous visitors too: the language choice lives
/// here before any login. The database stores only a keyed digest of the
/// token, never the token itself.
#[derive(Clone, Debug)]
pub struct Session {
    /// The keyed SHA-256 digest of the cookie token.
    pub token_hash: String,

    /// The logged-in user, if any.
    pub user_id: Option<Id>,

    /// The language chosen for this session.
    pub lang: Lang,

    /// A pending flash message key, consumed by the next page render.
    pub flash: Option<String>,

    /// When the session was created, as unix seconds.
    pub created_at: i64,

    /// When the session stops resolving, as unix seconds.
    pub expires_at: i64,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }
}

/// Returns the current time as unix seconds.
pub fn now() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
