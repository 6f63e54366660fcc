use std::path::Path;

use logwindow_core::errors::LogWindowError;
use logwindow_protocol::logs::{FailureBody, ShowLogsQuery, ShowLogsResponse, WindowRequest};
use logwindow_service::{get_window, Dataset};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("HTTP request failed: {0}")]
    Http(String),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("{}", .0.error)]
    Rejected(FailureBody),
    #[error("failed to load dataset: {0}")]
    Dataset(#[from] LogWindowError),
    #[error("failed to render output: {0}")]
    Render(String),
    #[error("{0}")]
    Validation(String),
}

impl From<reqwest::Error> for CliError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value.to_string())
    }
}

/// Talks to a running show-logs service.
pub struct ShowLogsClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ShowLogsClient {
    pub fn new(base_url: &str) -> Result<Self, CliError> {
        let mut url = Url::parse(base_url)
            .map_err(|err| CliError::Validation(format!("invalid server URL: {err}")))?;
        // Relative joins replace the last segment unless the path ends with a slash.
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self {
            base_url: url,
            http: reqwest::Client::new(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, CliError> {
        self.base_url
            .join(path)
            .map_err(|err| CliError::Validation(format!("invalid path: {err}")))
    }

    pub async fn show_logs(&self, request: &WindowRequest) -> Result<ShowLogsResponse, CliError> {
        let url = self.endpoint("show-logs/")?;
        let response = self
            .http
            .get(url)
            .query(&ShowLogsQuery::from(request))
            .send()
            .await?;
        parse_response(response).await
    }
}

/// Runs the request in-process against an NDJSON file.
pub fn show_logs_local(
    dataset_path: &Path,
    request: &WindowRequest,
) -> Result<ShowLogsResponse, CliError> {
    let dataset = Dataset::load(dataset_path)?;
    get_window(&dataset, request)
        .map(Into::into)
        .map_err(|err| CliError::Rejected(err.to_failure_body()))
}

async fn parse_response(response: reqwest::Response) -> Result<ShowLogsResponse, CliError> {
    if response.status().is_success() {
        return response
            .json::<ShowLogsResponse>()
            .await
            .map_err(|err| CliError::Http(err.to_string()));
    }

    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<FailureBody>(&body) {
        Ok(failure) => Err(CliError::Rejected(failure)),
        Err(_) => Err(CliError::Server { status, body }),
    }
}
