use nutype::nutype;
use serde::Deserialize;

use crate::email_address::EmailAddress;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub author: ContactMessageAuthor,
    pub content: ContactMessageContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageAuthor {
    pub name: ContactMessageAuthorName,
    pub email: EmailAddress,
}

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageAuthorName(String);

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 4096),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageContent(String);

/// How the relay responds to a contact form submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchMode {
    /// Wait for the mail provider and report its outcome.
    #[default]
    Sync,
    /// Acknowledge right after validation and send in a detached task.
    #[serde(alias = "fire_and_forget", alias = "fire-and-forget")]
    Background,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed() {
        let name = ContactMessageAuthorName::try_from("  Ada  ").unwrap();
        assert_eq!(*name, "Ada");
    }

    #[test]
    fn name_rejects_blank() {
        assert!(ContactMessageAuthorName::try_from("   ").is_err());
        assert!(ContactMessageAuthorName::try_from("").is_err());
    }

    #[test]
    fn content_length_limit() {
        assert!(ContactMessageContent::try_from("x".repeat(4096)).is_ok());
        assert!(ContactMessageContent::try_from("x".repeat(4097)).is_err());
    }

    #[test]
    fn dispatch_mode_aliases() {
        for (input, expected) in [
            ("sync", DispatchMode::Sync),
            ("background", DispatchMode::Background),
            ("fire_and_forget", DispatchMode::Background),
            ("fire-and-forget", DispatchMode::Background),
        ] {
            let parsed: DispatchMode =
                serde_json::from_value(serde_json::Value::String(input.into())).unwrap();
            assert_eq!(parsed, expected);
        }
    }
}
