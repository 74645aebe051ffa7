use std::{panic::AssertUnwindSafe, sync::Arc};

use anyhow::Context;
use folio_core_contact_contracts::{ContactReceipt, ContactSendMessageError, ContactService};
use folio_email_contracts::{Email, EmailService};
use folio_models::{
    config_status::ConfigStatus,
    contact::{ContactMessage, DispatchMode},
    email_address::EmailAddress,
};
use futures::FutureExt;
use tracing::{debug, error, info};

#[derive(Debug)]
pub struct ContactServiceImpl<Email> {
    email: Option<Arc<Email>>,
    config: Arc<ContactServiceConfig>,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    pub recipient: Option<EmailAddress>,
    pub dispatch: DispatchMode,
    pub status: ConfigStatus,
}

impl<EmailS> ContactServiceImpl<EmailS> {
    /// `email` is `None` if no mail transport could be configured.
    pub fn new(email: Option<Arc<EmailS>>, config: Arc<ContactServiceConfig>) -> Self {
        Self { email, config }
    }
}

impl<EmailS> ContactService for ContactServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    async fn send_message(
        &self,
        message: ContactMessage,
    ) -> Result<ContactReceipt, ContactSendMessageError> {
        info!(
            name = message.author.name.as_str(),
            email = %message.author.email,
            "Received contact message"
        );

        let (Some(email_service), Some(recipient)) = (&self.email, &self.config.recipient) else {
            error!(
                missing = ?self.config.status.missing(),
                "Refusing to relay contact message, configuration is incomplete"
            );
            return Err(ContactSendMessageError::Configuration(self.config.status));
        };

        let email = make_email(recipient.clone(), message);
        debug!(recipient = %email.recipient, subject = %email.subject, "Dispatching contact email");

        match self.config.dispatch {
            DispatchMode::Sync => {
                // The send runs on its own task and completes even if the
                // caller stops waiting for it.
                let email_service = Arc::clone(email_service);
                let id = tokio::spawn(async move { email_service.send(email).await })
                    .await
                    .inspect_err(|err| error!("Contact email dispatch failed: {err}"))
                    .context("Contact email dispatch failed")?
                    .inspect_err(|err| {
                        error!(kind = %err.kind, "Failed to send contact email: {err}")
                    })?;
                info!(%id, "Contact email sent");
                Ok(ContactReceipt::Sent(id))
            }
            DispatchMode::Background => {
                tokio::spawn(send_detached(Arc::clone(email_service), email));
                Ok(ContactReceipt::Accepted)
            }
        }
    }
}

fn make_email(recipient: EmailAddress, message: ContactMessage) -> Email {
    let ContactMessage { author, content } = message;
    Email {
        recipient,
        subject: format!("New Message from {}", *author.name),
        body: format!(
            "Name: {}\nEmail: {}\nMessage: {}",
            *author.name, author.email, *content
        ),
        reply_to: Some(author.email),
    }
}

/// Outcomes of detached sends only reach the logs. Panics stay inside this
/// task.
async fn send_detached<EmailS: EmailService>(email_service: Arc<EmailS>, email: Email) {
    let result = AssertUnwindSafe(async { email_service.send(email).await })
        .catch_unwind()
        .await;

    match result {
        Ok(Ok(id)) => info!(%id, "Contact email sent in background"),
        Ok(Err(err)) => {
            error!(kind = %err.kind, "Failed to send contact email in background: {err}")
        }
        Err(_) => error!("Background contact email dispatch panicked"),
    }
}
