use std::fmt;

use serde::Serialize;

/// Identifier the mail provider (or the SMTP `Message-ID` header) assigned to
/// an outbound email.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EmailId(String);

impl EmailId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for EmailId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Classification of a failed send attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmailErrorKind {
    /// The provider rejected the configured credentials.
    Authentication,
    /// The provider could not be reached or the connection broke.
    Network,
    /// The provider did not answer within the configured timeout.
    Timeout,
    /// The outbound message could not be built from the configuration.
    Configuration,
    /// The provider accepted the connection but refused the message.
    Rejected,
}

impl EmailErrorKind {
    pub fn description(self) -> &'static str {
        match self {
            Self::Authentication => {
                "Authentication with the mail provider failed. Check the configured credentials; \
                 providers such as Gmail require an app-specific password."
            }
            Self::Network => "Could not reach the mail provider.",
            Self::Timeout => "The mail provider did not respond in time.",
            Self::Configuration => "The mail transport is misconfigured.",
            Self::Rejected => "The mail provider rejected the message.",
        }
    }
}

impl fmt::Display for EmailErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Authentication => "authentication",
            Self::Network => "network",
            Self::Timeout => "timeout",
            Self::Configuration => "configuration",
            Self::Rejected => "rejected",
        };
        f.write_str(name)
    }
}
