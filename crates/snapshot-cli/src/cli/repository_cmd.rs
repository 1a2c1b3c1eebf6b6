use super::*;
pub(super) fn handle_get_repository(
    args: GetRepositoryArgs,
    config: &ClientConfig,
) -> anyhow::Result<()> {
    let transport = HttpTransport::new(config)?;
    let client = Client::new(transport);
    let request = args.to_request();
    let body = client
        .snapshot()
        .get_repository_with(&request)
        .map_err(|err| map_api_error(&args.repository, err))?;
    let data = serde_json::to_string_pretty(&body).context("serialize response")?;
    println!("{data}");
    Ok(())
}
