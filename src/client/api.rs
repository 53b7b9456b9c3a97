use serde_json::Value;

use crate::models::{CreateSubmission, Submission};

#[derive(Debug)]
pub enum ClientError {
    /// Transport-level failure (connection refused, timeout, bad body).
    Transport(reqwest::Error),
    /// Non-OK response; carries the server's error text when it sent one.
    Api {
        status: reqwest::StatusCode,
        message: Option<String>,
    },
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Transport(err) => write!(f, "request failed: {err}"),
            ClientError::Api { status, message } => match message {
                Some(msg) => write!(f, "{msg}"),
                None => write!(f, "request failed with status {status}"),
            },
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err)
    }
}

impl ClientError {
    /// Server-provided message, if any, for surfacing in the UI.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Api { message, .. } => message.as_deref(),
            ClientError::Transport(_) => None,
        }
    }
}

/// Thin typed wrapper over the three API endpoints. No retries.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Probe the health endpoint. Any failure reads as unhealthy.
    pub async fn health(&self) -> bool {
        match self.http.get(self.url("/api/health")).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    pub async fn list(&self) -> Result<Vec<Submission>, ClientError> {
        let resp = self.http.get(self.url("/api/submissions")).send().await?;
        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        Ok(resp.json().await?)
    }

    pub async fn create(&self, req: &CreateSubmission) -> Result<Submission, ClientError> {
        let resp = self
            .http
            .post(self.url("/api/submissions"))
            .json(req)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::api_error(resp).await);
        }
        Ok(resp.json().await?)
    }

    async fn api_error(resp: reqwest::Response) -> ClientError {
        let status = resp.status();
        let message = resp
            .json::<Value>()
            .await
            .ok()
            .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string));
        ClientError::Api { status, message }
    }
}
