use folio_email_contracts::{Email, EmailError, EmailService};
use folio_models::email::EmailId;

pub use self::{
    api::{ApiEmailService, ApiEmailServiceConfig},
    smtp::{SmtpEmailService, SmtpEmailServiceConfig},
};

pub mod api;
mod http;
pub mod smtp;

/// The configured mail transport.
#[derive(Debug, Clone)]
pub enum EmailServiceImpl {
    Smtp(SmtpEmailService),
    Api(ApiEmailService),
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> Result<EmailId, EmailError> {
        match self {
            Self::Smtp(smtp) => smtp.send(email).await,
            Self::Api(api) => api.send(email).await,
        }
    }
}

impl From<SmtpEmailService> for EmailServiceImpl {
    fn from(value: SmtpEmailService) -> Self {
        Self::Smtp(value)
    }
}

impl From<ApiEmailService> for EmailServiceImpl {
    fn from(value: ApiEmailService) -> Self {
        Self::Api(value)
    }
}
