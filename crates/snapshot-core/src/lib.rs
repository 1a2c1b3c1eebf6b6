pub mod actions;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod params;
pub mod path;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_support;

pub use actions::snapshot::{GetRepositoryRequest, Snapshot};
pub use client::Client;
pub use error::{Error, Result};
pub use model::{
    Arguments, HttpMethod, IgnoreStatuses, QueryParams, RepositoryIdentifier, ResponseBody,
};
pub use transport::{NotFoundPolicy, Response, Transport};
