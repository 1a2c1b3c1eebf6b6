//! Actions under the `_snapshot` endpoint family.

mod get_repository;

pub use get_repository::{GET_REPOSITORY, GET_REPOSITORY_PARAMS, GetRepositoryRequest};

use crate::client::Client;

/// Snapshot namespace of a [`Client`], returned by [`Client::snapshot`].
pub struct Snapshot<'a, T> {
    pub(crate) client: &'a Client<T>,
}

impl<'a, T> Snapshot<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }
}
