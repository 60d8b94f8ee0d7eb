//! HttpSubmitter: JSON POST to the submission endpoint.

use reqwest::Client;
use serde::Deserialize;
use url::Url;

use super::{SubmitResponse, Submitter};
use crate::error::SubmitError;
use crate::form::AnswerPayload;
use crate::storage::config::EndpointConfig;

/// Error body the server sends with non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Posts answers to `{base_url}{submit_path}`.
pub struct HttpSubmitter {
    url: Url,
    http_client: Client,
}

impl HttpSubmitter {
    /// Create a submitter for the configured endpoint.
    pub fn new(endpoint: &EndpointConfig) -> Result<Self, SubmitError> {
        Ok(Self {
            url: endpoint.submit_url()?,
            http_client: Client::new(),
        })
    }

    /// Target URL of the POST.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Submitter for HttpSubmitter {
    async fn submit(&self, payload: &AnswerPayload) -> Result<SubmitResponse, SubmitError> {
        tracing::debug!(url = %self.url, "posting questionnaire answers");

        let resp = self
            .http_client
            .post(self.url.clone())
            .json(payload)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error);
            return Err(SubmitError::Server {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
