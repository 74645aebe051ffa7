use std::{fmt::Display, future::Future};

use folio_models::{
    email::{EmailErrorKind, EmailId},
    email_address::EmailAddress,
};
use thiserror::Error;

/// Outbound mail transport.
///
/// Implementations classify every failure into an [`EmailErrorKind`] and never
/// put raw provider output into [`EmailError::detail`].
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    /// Send a single email. At most one delivery attempt is made.
    fn send(&self, email: Email) -> impl Future<Output = Result<EmailId, EmailError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub recipient: EmailAddress,
    pub subject: String,
    pub body: String,
    pub reply_to: Option<EmailAddress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{detail}")]
pub struct EmailError {
    pub kind: EmailErrorKind,
    pub detail: String,
}

impl EmailError {
    pub fn new(kind: EmailErrorKind) -> Self {
        Self {
            kind,
            detail: kind.description().into(),
        }
    }

    /// Appends sanitized context, such as an SMTP reply code or an HTTP
    /// status, to the description of `kind`.
    pub fn with_context(kind: EmailErrorKind, context: impl Display) -> Self {
        Self {
            kind,
            detail: format!("{} ({context})", kind.description()),
        }
    }
}

impl From<EmailErrorKind> for EmailError {
    fn from(kind: EmailErrorKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_send(mut self, email: Email, result: Result<EmailId, EmailError>) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_send_never(mut self) -> Self {
        self.expect_send().never();
        self
    }
}
