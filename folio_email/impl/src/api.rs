//! Transactional email over an HTTP API (Resend-compatible).

use std::{sync::Arc, time::Duration};

use folio_email_contracts::{Email, EmailError, EmailService};
use folio_models::{
    email::{EmailErrorKind, EmailId},
    email_address::EmailAddress,
};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use url::Url;

use crate::http;

#[derive(Debug, Clone)]
pub struct ApiEmailService {
    config: Arc<ApiEmailServiceConfig>,
    client: reqwest::Client,
}

#[derive(Clone)]
pub struct ApiEmailServiceConfig {
    pub endpoint: Url,
    pub api_key: String,
    pub from: EmailAddress,
    /// Upper bound for the whole request, including reading the response.
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl std::fmt::Debug for ApiEmailServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiEmailServiceConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &"<redacted>")
            .field("from", &self.from)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl ApiEmailService {
    pub fn new(config: ApiEmailServiceConfig) -> anyhow::Result<Self> {
        let client = http::client(config.timeout, config.connect_timeout)?;

        Ok(Self {
            config: config.into(),
            client,
        })
    }
}

impl EmailService for ApiEmailService {
    async fn send(&self, email: Email) -> Result<EmailId, EmailError> {
        let request = SendRequest {
            from: self.config.from.as_str(),
            to: [email.recipient.as_str()],
            subject: &email.subject,
            text: &email.body,
            reply_to: email.reply_to.as_ref().map(EmailAddress::as_str),
        };

        let response = self
            .client
            .post(self.config.endpoint.clone())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                error!("Failed to send email via mail api: {err}");
                classify_request_error(&err)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, %body, "mail api refused message");
            return Err(EmailError::with_context(
                classify_status(status),
                format_args!("HTTP {}", status.as_u16()),
            ));
        }

        let SendResponse { id } = response.json().await.map_err(|err| {
            error!("Failed to read mail api response: {err}");
            if err.is_timeout() {
                EmailError::new(EmailErrorKind::Timeout)
            } else {
                EmailError::new(EmailErrorKind::Rejected)
            }
        })?;
        debug!(%id, "mail api accepted message");

        Ok(EmailId::new(id))
    }
}

fn classify_request_error(err: &reqwest::Error) -> EmailError {
    let kind = if err.is_timeout() {
        EmailErrorKind::Timeout
    } else if err.is_builder() {
        EmailErrorKind::Configuration
    } else {
        EmailErrorKind::Network
    };
    kind.into()
}

fn classify_status(status: StatusCode) -> EmailErrorKind {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => EmailErrorKind::Authentication,
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => EmailErrorKind::Timeout,
        StatusCode::TOO_MANY_REQUESTS => EmailErrorKind::Network,
        status if status.is_server_error() => EmailErrorKind::Network,
        _ => EmailErrorKind::Rejected,
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

#[derive(Deserialize)]
struct SendResponse {
    id: String,
}
