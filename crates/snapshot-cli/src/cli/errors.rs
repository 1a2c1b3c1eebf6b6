use super::*;
/// Turns well-known statuses into a message that says what to check.
pub(super) fn map_api_error(repository: &[String], err: Error) -> anyhow::Error {
    if let Some(message) = status_message(repository, &err) {
        return anyhow::anyhow!(message);
    }
    anyhow::Error::new(err)
}

pub(super) fn status_message(repository: &[String], err: &Error) -> Option<String> {
    let target = if repository.is_empty() {
        "_all".to_string()
    } else {
        repository.join(",")
    };
    let status = err.status()?;
    match status {
        401 | 403 => Some(format!(
            "Access denied reading snapshot repositories {target} (HTTP {status}). Check cluster credentials.",
        )),
        404 => Some(format!(
            "Snapshot repository not found: {target} (HTTP 404). Pass --ignore 404 to print the response instead.",
        )),
        _ => None,
    }
}
