use super::Snapshot;
use crate::error::Result;
use crate::model::{
    Arguments, HttpMethod, IgnoreStatuses, QueryParams, RepositoryIdentifier, ResponseBody,
};
use crate::params::validate_and_extract_params;
use crate::path::{check_segment, listify, pathify};
use crate::transport::{NotFoundPolicy, Transport};

pub const GET_REPOSITORY: &str = "snapshot.get_repository";

/// Query parameters `GET /_snapshot/{repository}` accepts.
pub const GET_REPOSITORY_PARAMS: &[&str] = &["master_timeout", "local"];

/// Typed options for [`Snapshot::get_repository_with`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetRepositoryRequest {
    pub repository: RepositoryIdentifier,
    /// Timeout for the connection to the master node, e.g. `30s`.
    pub master_timeout: Option<String>,
    /// Read from the local node instead of the master.
    pub local: Option<bool>,
    pub ignore: IgnoreStatuses,
}

impl GetRepositoryRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repository(mut self, repository: impl Into<RepositoryIdentifier>) -> Self {
        self.repository = repository.into();
        self
    }

    pub fn master_timeout(mut self, timeout: impl Into<String>) -> Self {
        self.master_timeout = Some(timeout.into());
        self
    }

    pub fn local(mut self, local: bool) -> Self {
        self.local = Some(local);
        self
    }

    pub fn ignore(mut self, statuses: impl IntoIterator<Item = u16>) -> Self {
        self.ignore = IgnoreStatuses::new(statuses);
        self
    }

    pub fn path(&self) -> Result<String> {
        repository_path(&self.repository)
    }

    pub fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if let Some(timeout) = &self.master_timeout {
            params.push(("master_timeout".to_string(), timeout.clone()));
        }
        if let Some(local) = self.local {
            params.push(("local".to_string(), local.to_string()));
        }
        params
    }
}

fn repository_path(repository: &RepositoryIdentifier) -> Result<String> {
    for name in repository.names() {
        check_segment("repository", name)?;
    }
    let names = listify(repository.names());
    Ok(pathify(&["_snapshot", names.as_str()]))
}

impl<T: Transport> Snapshot<'_, T> {
    /// Returns information about snapshot repositories.
    ///
    /// `repository` may be a name or a list of names; leaving it out (or
    /// passing `_all`) returns every repository. `master_timeout` and `local`
    /// are forwarded as query parameters. Set `ignore` to `404` to get the
    /// server's body back instead of [`Error::NotFound`](crate::Error::NotFound).
    /// Any other key fails with `UnrecognizedParameter` before a request is sent.
    pub fn get_repository(&self, mut arguments: Arguments) -> Result<ResponseBody> {
        let repository =
            RepositoryIdentifier::from_value("repository", arguments.remove("repository"))?;
        let path = repository_path(&repository)?;
        let params = validate_and_extract_params(&arguments, GET_REPOSITORY)?;
        let ignore = IgnoreStatuses::from_value(arguments.get("ignore"));
        let policy = NotFoundPolicy::from_ignore(&ignore);

        self.client
            .perform_request(GET_REPOSITORY, HttpMethod::Get, &path, &params, None, policy)
    }

    /// Same as [`Snapshot::get_repository`] with options checked at compile time.
    pub fn get_repository_with(&self, request: &GetRepositoryRequest) -> Result<ResponseBody> {
        let path = request.path()?;
        let policy = NotFoundPolicy::from_ignore(&request.ignore);
        self.client.perform_request(
            GET_REPOSITORY,
            HttpMethod::Get,
            &path,
            &request.params(),
            None,
            policy,
        )
    }
}
