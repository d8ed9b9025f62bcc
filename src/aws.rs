use aws_config::BehaviorVersion;
use aws_config::environment::{
    credentials::EnvironmentVariableCredentialsProvider, region::EnvironmentVariableRegionProvider,
};
use aws_config::meta::region::ProvideRegion;
use aws_sdk_dynamodb::config::ProvideCredentials;
use color_eyre::eyre::{Result, bail, eyre};

/// Client for the table commands. Region and credentials come only from the
/// environment; `endpoint_url` redirects requests, e.g. to DynamoDB Local.
pub async fn new_client(endpoint_url: Option<&str>) -> Result<aws_sdk_dynamodb::Client> {
    let endpoint_url = endpoint_url.map(check_endpoint).transpose()?;

    let region = EnvironmentVariableRegionProvider::new()
        .region()
        .await
        .ok_or_else(|| {
            eyre!("no region for the table. Set AWS_REGION or AWS_DEFAULT_REGION.")
        })?;

    let credentials = EnvironmentVariableCredentialsProvider::new();
    if let Err(err) = credentials.provide_credentials().await {
        bail!(
            "cannot access the table without credentials. \
             Set AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY ({err})"
        );
    }

    let loader = aws_config::defaults(BehaviorVersion::latest())
        .region(region)
        .credentials_provider(credentials);
    let loader = match endpoint_url {
        Some(url) => {
            tracing::debug!(endpoint_url = %url, "Sending table requests to custom endpoint");
            loader.endpoint_url(url)
        }
        None => loader,
    };

    Ok(aws_sdk_dynamodb::Client::new(&loader.load().await))
}

/// Endpoints need an explicit scheme and a host.
fn check_endpoint(url: &str) -> Result<&str> {
    let url = url.trim();
    let host = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .ok_or_else(|| eyre!("endpoint {url:?} must start with http:// or https://"))?;
    if host.is_empty() || host.starts_with('/') {
        bail!("endpoint {url:?} has no host");
    }
    Ok(url)
}
