use std::{
    collections::HashMap,
    fmt::Display,
    net::IpAddr,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Context;
use config::{Environment, File, FileFormat};
use folio_models::{
    config_status::ConfigStatus, contact::DispatchMode, email_address::EmailAddress,
};
use serde::{Deserialize, Deserializer};
use url::Url;

pub use self::{duration::Duration, secret::Secret};

mod duration;
mod secret;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Colon separated list of config files, later files override earlier ones.
pub const CONFIG_PATH_ENV: &str = "FOLIO_CONFIG_PATH";

/// Prefix of environment overrides, e.g. `FOLIO__EMAIL__SMTP__PASSWORD`.
pub const ENV_PREFIX: &str = "FOLIO";

/// Plain environment variables mapped onto config keys. Applied before the
/// prefixed overrides.
pub const ENV_ALIASES: &[(&str, &str)] = &[
    ("EMAIL_USER", "email.smtp.username"),
    ("EMAIL_PASSWORD", "email.smtp.password"),
    ("EMAIL_API_KEY", "email.api.api_key"),
    ("SENDER_EMAIL", "email.from"),
    ("RECIPIENT_EMAIL", "contact.recipient"),
    ("FRONTEND_URL", "http.frontend_url"),
    ("PORT", "http.port"),
];

/// Load the config from the files listed in [`CONFIG_PATH_ENV`] (or
/// [`DEFAULT_CONFIG_PATH`]), a `.env` file if one is found in the working
/// directory or its parents, and the process environment.
pub fn load() -> anyhow::Result<Config> {
    let dotenv = match dotenvy::dotenv_iter() {
        Ok(iter) => iter
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to parse .env file")?,
        Err(err) if err.not_found() => Vec::new(),
        Err(err) => return Err(err).context("Failed to read .env file"),
    };
    let env = with_dotenv(dotenv, std::env::vars());
    let paths = match env.get(CONFIG_PATH_ENV) {
        Some(paths) => std::env::split_paths(paths).collect(),
        None => vec![PathBuf::from(DEFAULT_CONFIG_PATH)],
    };
    load_from(&paths, env)
}

/// Merges `.env` entries into the environment. Variables already set in the
/// environment take precedence.
pub fn with_dotenv(
    dotenv: impl IntoIterator<Item = (String, String)>,
    env: impl IntoIterator<Item = (String, String)>,
) -> HashMap<String, String> {
    dotenv.into_iter().chain(env).collect()
}

pub fn load_from(
    paths: &[impl AsRef<Path>],
    env: HashMap<String, String>,
) -> anyhow::Result<Config> {
    let aliases = ENV_ALIASES
        .iter()
        .try_fold(config::Config::builder(), |builder, &(var, key)| {
            builder.set_override_option(key, env.get(var).cloned())
        })?
        .build()
        .context("Failed to read environment aliases")?;

    let environment = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("http.allowed_origins")
        .try_parsing(true)
        .source(Some(env));

    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .add_source(aliases)
        .add_source(environment)
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub contact: ContactConfig,
    pub email: EmailConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub frontend_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    #[serde(default)]
    pub dispatch: DispatchMode,
    #[serde(default, deserialize_with = "non_empty")]
    pub recipient: Option<EmailAddress>,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub transport: EmailTransport,
    #[serde(default, deserialize_with = "non_empty")]
    pub from: Option<EmailAddress>,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub smtp: SmtpConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailTransport {
    Smtp,
    Api,
}

#[derive(Debug, Deserialize)]
pub struct SmtpConfig {
    pub url: String,
    #[serde(default, deserialize_with = "non_empty")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub password: Option<Secret>,
}

#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    pub endpoint: Url,
    #[serde(default, deserialize_with = "non_empty")]
    pub api_key: Option<Secret>,
}

impl Config {
    pub fn status(&self) -> ConfigStatus {
        ConfigStatus {
            email_credentials: self.email.has_credentials(),
            email_sender: self.email.sender().is_some(),
            recipient_email: self.contact.recipient.is_some(),
            frontend_url: self.http.frontend_url.is_some(),
        }
    }
}

impl EmailConfig {
    pub fn has_credentials(&self) -> bool {
        match self.transport {
            EmailTransport::Smtp => self.smtp.username.is_some() && self.smtp.password.is_some(),
            EmailTransport::Api => self.api.api_key.is_some(),
        }
    }

    /// The configured sender, falling back to the SMTP username if that is an
    /// email address.
    pub fn sender(&self) -> Option<EmailAddress> {
        self.from.clone().or_else(|| match self.transport {
            EmailTransport::Smtp => self.smtp.username.as_deref()?.parse().ok(),
            EmailTransport::Api => None,
        })
    }
}

/// Treats missing values and blank strings alike.
fn non_empty<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    Option::<String>::deserialize(deserializer)?
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().map_err(serde::de::Error::custom))
        .transpose()
}
