use serde::Serialize;

/// Which configuration values are defined. Never carries the values
/// themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfigStatus {
    pub email_credentials: bool,
    pub email_sender: bool,
    pub recipient_email: bool,
    pub frontend_url: bool,
}

impl ConfigStatus {
    /// Returns `true` if everything needed to relay a message is defined.
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Human readable names of the required values that are not defined.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (self.email_credentials, "mail provider credentials"),
            (self.email_sender, "sender address"),
            (self.recipient_email, "recipient address"),
        ]
        .into_iter()
        .filter(|&(defined, _)| !defined)
        .map(|(_, name)| name)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete() {
        let status = ConfigStatus {
            email_credentials: true,
            email_sender: true,
            recipient_email: true,
            frontend_url: false,
        };
        assert!(status.is_complete());
        assert!(status.missing().is_empty());
    }

    #[test]
    fn missing() {
        let status = ConfigStatus {
            email_credentials: false,
            email_sender: true,
            recipient_email: false,
            frontend_url: true,
        };
        assert!(!status.is_complete());
        assert_eq!(
            status.missing(),
            ["mail provider credentials", "recipient address"]
        );
    }
}
