use std::future::Future;

use folio_email_contracts::EmailError;
use folio_models::{config_status::ConfigStatus, contact::ContactMessage, email::EmailId};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    /// Relay a contact form submission to the configured recipient.
    fn send_message(
        &self,
        message: ContactMessage,
    ) -> impl Future<Output = Result<ContactReceipt, ContactSendMessageError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactReceipt {
    /// The mail provider accepted the message.
    Sent(EmailId),
    /// The message is being sent in the background.
    Accepted,
}

#[derive(Debug, Error)]
pub enum ContactSendMessageError {
    #[error("Missing configuration: {}", .0.missing().join(", "))]
    Configuration(ConfigStatus),
    #[error(transparent)]
    Send(#[from] EmailError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
