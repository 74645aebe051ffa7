use folio_models::{
    contact::{
        ContactMessage, ContactMessageAuthor, ContactMessageAuthorName, ContactMessageContent,
    },
    email::EmailId,
    email_address::EmailAddress,
};
use serde::{Deserialize, Serialize};

/// Contact form submission. Every field is optional here so that missing and
/// blank fields produce the same error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiContactMessage {
    /// Full name of the sender
    #[serde(default)]
    pub name: Option<String>,
    /// Email address of the sender
    #[serde(default)]
    pub email: Option<String>,
    /// Content of the message
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiContactMessageError {
    Missing(Vec<&'static str>),
    InvalidEmail,
    TooLong(&'static str),
}

impl TryFrom<ApiContactMessage> for ContactMessage {
    type Error = ApiContactMessageError;

    fn try_from(value: ApiContactMessage) -> Result<Self, Self::Error> {
        let missing = [
            ("name", &value.name),
            ("email", &value.email),
            ("message", &value.message),
        ]
        .into_iter()
        .filter(|(_, field)| !field.as_deref().is_some_and(|s| !s.trim().is_empty()))
        .map(|(name, _)| name)
        .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(ApiContactMessageError::Missing(missing));
        }

        let ApiContactMessage {
            name,
            email,
            message,
        } = value;

        let email = email
            .unwrap_or_default()
            .trim()
            .parse::<EmailAddress>()
            .map_err(|_| ApiContactMessageError::InvalidEmail)?;
        let name = ContactMessageAuthorName::try_from(name.unwrap_or_default())
            .map_err(|_| ApiContactMessageError::TooLong("name"))?;
        let content = ContactMessageContent::try_from(message.unwrap_or_default())
            .map_err(|_| ApiContactMessageError::TooLong("message"))?;

        Ok(Self {
            author: ContactMessageAuthor { name, email },
            content,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSendMessageResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_id: Option<EmailId>,
}
