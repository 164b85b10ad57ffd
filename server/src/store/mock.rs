use std::collections::HashMap;
use std::sync::RwLock;

use futures::future::{BoxFuture, FutureExt};

use crate::errors::StoreError;
use crate::store::{sanitize_filename, Store};

/// An in-memory store for tests.
#[derive(Default)]
pub struct MockStore {
    pub map: RwLock<HashMap<String, Vec<u8>>>,
}

impl Store for MockStore {
    fn save(&self, filename: &str, raw: Vec<u8>) -> BoxFuture<Result<String, StoreError>> {
        let public_path = format!("uploads/{}", sanitize_filename(filename));

        async move {
            self.map.write().unwrap().insert(public_path.clone(), raw);

            Ok(public_path)
        }
        .boxed()
    }
}
