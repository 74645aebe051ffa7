use std::time::Duration;

use folio_email_contracts::{Email, EmailError, EmailService};
use folio_models::{
    email::{EmailErrorKind, EmailId},
    email_address::EmailAddress,
};
use folio_utils::Apply;
use lettre::{
    message::{header::ContentType, Mailbox, MessageBuilder},
    transport::smtp::{
        self,
        authentication::Credentials,
        response::{Category, Code, Detail, Severity},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{debug, error};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct SmtpEmailService {
    from: EmailAddress,
    timeout: Duration,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

#[derive(Clone)]
pub struct SmtpEmailServiceConfig {
    /// e.g. `smtps://smtp.gmail.com` or `smtp://localhost:2525`
    pub url: String,
    pub username: String,
    pub password: String,
    pub from: EmailAddress,
    /// Upper bound for a whole send, from connecting to the final reply.
    pub timeout: Duration,
}

impl std::fmt::Debug for SmtpEmailServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpEmailServiceConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("from", &self.from)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl SmtpEmailService {
    pub fn new(config: SmtpEmailServiceConfig) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(&config.url)?
            .credentials(Credentials::new(config.username, config.password))
            .timeout(Some(config.timeout))
            .build();

        Ok(Self {
            from: config.from,
            timeout: config.timeout,
            transport,
        })
    }

    fn build_message(&self, email: Email, message_id: &str) -> Result<Message, EmailError> {
        Message::builder()
            .message_id(Some(format!("<{message_id}>")))
            .from(Mailbox::new(None, self.from.0.clone()))
            .to(Mailbox::new(None, email.recipient.0))
            .apply_map(
                email.reply_to.map(|x| Mailbox::new(None, x.0)),
                MessageBuilder::reply_to,
            )
            .subject(email.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(email.body)
            .map_err(|err| {
                error!("Failed to build email: {err}");
                EmailError::new(EmailErrorKind::Configuration)
            })
    }
}

impl EmailService for SmtpEmailService {
    async fn send(&self, email: Email) -> Result<EmailId, EmailError> {
        let message_id = format!("{}@{}", Uuid::new_v4(), self.from.domain());
        let message = self.build_message(email, &message_id)?;

        let Ok(result) = tokio::time::timeout(self.timeout, self.transport.send(message)).await
        else {
            error!(timeout = ?self.timeout, "smtp exchange timed out");
            return Err(EmailErrorKind::Timeout.into());
        };

        match result {
            Ok(response) if response.is_positive() => {
                debug!(code = %response.code(), %message_id, "smtp server accepted message");
                Ok(EmailId::new(message_id))
            }
            Ok(response) => {
                let code = response.code();
                error!(%code, "smtp server refused message");
                Err(EmailError::with_context(
                    classify_code(code),
                    format_args!("SMTP {code}"),
                ))
            }
            Err(err) => {
                error!("Failed to send email via smtp: {err}");
                Err(classify_error(&err))
            }
        }
    }
}

fn classify_error(err: &smtp::Error) -> EmailError {
    if err.is_timeout() {
        return EmailErrorKind::Timeout.into();
    }

    if let Some(code) = err.status() {
        return EmailError::with_context(classify_code(code), format_args!("SMTP {code}"));
    }

    if err.is_client() {
        return EmailErrorKind::Configuration.into();
    }

    EmailErrorKind::Network.into()
}

/// Maps a negative SMTP reply to an error kind.
fn classify_code(code: Code) -> EmailErrorKind {
    match (code.severity, code.category, code.detail) {
        // 530, 534, 535
        (
            Severity::PermanentNegativeCompletion,
            Category::Unspecified3,
            Detail::Zero | Detail::Four | Detail::Five,
        ) => EmailErrorKind::Authentication,
        // 421 service not available
        (Severity::TransientNegativeCompletion, Category::Connections, Detail::One) => {
            EmailErrorKind::Network
        }
        _ => EmailErrorKind::Rejected,
    }
}
