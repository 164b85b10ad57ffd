use std::sync::Arc;

use log::Logger;

use crate::db::Db;
use crate::store::Store;

pub type SharedStore = dyn Store + Send + Sync;

/// Everything the route handlers need, cloned into each filter.
#[derive(Clone)]
pub struct Environment {
    pub logger: Arc<Logger>,
    pub db: Arc<dyn Db + Send + Sync>,
    pub store: Arc<SharedStore>,
    pub config: Arc<Config>,
}

impl Environment {
    pub fn new(
        logger: Arc<Logger>,
        db: Arc<dyn Db + Send + Sync>,
        store: Arc<SharedStore>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            logger,
            db,
            store,
            config,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Key for the session token digests. Rotating it invalidates every
    /// outstanding cookie.
    pub session_secret: String,

    /// How long a session stays valid, in seconds.
    pub session_ttl_seconds: i64,

    /// Lowercased file extensions accepted for review photos.
    pub allowed_photo_extensions: Vec<String>,
}

impl Config {
    pub fn new(
        session_secret: String,
        session_ttl_seconds: i64,
        allowed_photo_extensions: Vec<String>,
    ) -> Self {
        Self {
            session_secret,
            session_ttl_seconds,
            allowed_photo_extensions,
        }
    }
}
