//! Auth.

use std::time::Duration;

use http::{header, HeaderMap};
use prwatch_config::Config;
use reqwest::ClientBuilder;

use crate::errors::GitHubError;

const GITHUB_ACCEPT_HEADER: &str = "application/vnd.github+json";

/// Get an authenticated GitHub client builder.
pub fn get_authenticated_client_builder(config: &Config) -> Result<ClientBuilder, GitHubError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static(GITHUB_ACCEPT_HEADER),
    );

    let mut authorization =
        header::HeaderValue::from_str(&format!("Bearer {}", config.api.github.token)).map_err(
            |e| GitHubError::InvalidHeaderError {
                name: "Authorization",
                source: e,
            },
        )?;
    authorization.set_sensitive(true);
    headers.insert(header::AUTHORIZATION, authorization);

    Ok(ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.api.github.connect_timeout))
        .user_agent(format!("prwatch/{}", config.version))
        .default_headers(headers))
}

/// Build a GitHub URL.
pub fn build_github_url<T: Into<String>>(config: &Config, path: T) -> String {
    format!(
        "{}{}",
        config.api.github.root_url.trim_end_matches('/'),
        path.into()
    )
}
