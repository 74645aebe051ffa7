use std::ops::Deref;

use serde::Deserialize;

/// Human readable duration such as `"10s"` or `"1m 30s"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let mut out = std::time::Duration::default();
        for part in s.split_whitespace() {
            let (value, unit) = part
                .find(|c: char| !c.is_ascii_digit())
                .map(|idx| part.split_at(idx))
                .ok_or_else(|| serde::de::Error::custom("Missing duration unit"))?;
            let value = value
                .parse::<u64>()
                .map_err(|_| serde::de::Error::custom("Invalid duration"))?;
            out += match unit {
                "ms" => std::time::Duration::from_millis(value),
                "s" => std::time::Duration::from_secs(value),
                "m" => std::time::Duration::from_secs(value * 60),
                "h" => std::time::Duration::from_secs(value * 3600),
                _ => return Err(serde::de::Error::custom("Invalid duration")),
            };
        }
        Ok(Self(out))
    }
}
