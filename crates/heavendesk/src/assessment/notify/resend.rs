use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use super::super::repository::{Notice, Notifier, NotifyError};
use super::email;

const RESEND_API_BASE: &str = "https://api.resend.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for the Resend transactional e-mail API.
#[derive(Debug, Clone)]
pub struct ResendConfig {
    pub api_key: String,
    /// `From` header, e.g. `HeavenDesk.ai <hello@heavendeskai.com>`.
    pub from: String,
    pub booking_url: String,
    pub api_base_url: String,
}

impl ResendConfig {
    pub fn new(
        api_key: impl Into<String>,
        from: impl Into<String>,
        booking_url: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            from: from.into(),
            booking_url: booking_url.into(),
            api_base_url: RESEND_API_BASE.to_string(),
        }
    }

    /// Point at a different API host (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

/// Sends rendered notices through `POST /emails`.
pub struct ResendNotifier {
    config: ResendConfig,
    http_client: reqwest::Client,
}

impl ResendNotifier {
    pub fn new(config: ResendConfig) -> Result<Self, NotifyError> {
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| NotifyError::Transport(err.to_string()))?;
        Ok(Self {
            config,
            http_client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.config.api_base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Notifier for ResendNotifier {
    async fn notify(&self, notice: Notice) -> Result<(), NotifyError> {
        let rendered = email::render(&notice, &self.config.booking_url);
        let request = SendEmailRequest {
            from: &self.config.from,
            to: [notice.recipient.as_str()],
            subject: &rendered.subject,
            html: &rendered.html,
        };

        let response = self
            .http_client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| NotifyError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(recipient = %notice.recipient, subject = %rendered.subject, "e-mail accepted");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(NotifyError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
