use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress(pub lettre::Address);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }

    pub fn domain(&self) -> &str {
        self.0.domain()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmailAddress {
    type Err = <lettre::Address as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = <Self as FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        for (input, ok) in [
            ("ada@example.com", true),
            ("first.last+tag@sub.example.org", true),
            ("x@y.com", true),
            ("", false),
            ("no-at-sign", false),
            ("@example.com", false),
            ("ada@", false),
            ("two@@example.com", false),
        ] {
            assert_eq!(input.parse::<EmailAddress>().is_ok(), ok, "{input:?}");
        }
    }

    #[test]
    fn domain() {
        let address: EmailAddress = "ada@example.com".parse().unwrap();
        assert_eq!(address.domain(), "example.com");
        assert_eq!(address.to_string(), "ada@example.com");
    }
}
