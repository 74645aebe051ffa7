use std::sync::Arc;

use folio_api_rest::{AllowedOrigins, RestServerConfig};
use folio_config::Config;
use folio_core_contact_impl::{ContactServiceConfig, ContactServiceImpl};
use folio_core_health_impl::{HealthServiceConfig, HealthServiceImpl};
use types::RestServer;

use crate::email;

pub mod types;

/// Construct every service from the immutable startup configuration.
pub fn build(config: &Config) -> anyhow::Result<RestServer> {
    let status = config.status();

    let email = email::connect(&config.email)?.map(Arc::new);

    let contact = ContactServiceImpl::new(
        email,
        ContactServiceConfig {
            recipient: config.contact.recipient.clone(),
            dispatch: config.contact.dispatch,
            status,
        }
        .into(),
    );

    let health = HealthServiceImpl::new(HealthServiceConfig { status });

    let rest_server_config = RestServerConfig {
        allowed_origins: AllowedOrigins::new(
            config
                .http
                .allowed_origins
                .iter()
                .chain(&config.http.frontend_url),
        ),
    };

    Ok(RestServer::new(health, contact, rest_server_config.into()))
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, path::Path};

    use folio_config::DEFAULT_CONFIG_PATH;

    use super::*;

    fn load(env: &[(&str, &str)]) -> Config {
        let env = env
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect::<HashMap<_, _>>();
        folio_config::load_from(&[Path::new(DEFAULT_CONFIG_PATH)], env).unwrap()
    }

    #[tokio::test]
    async fn build_without_credentials() {
        let config = load(&[]);
        assert!(email::connect(&config.email).unwrap().is_none());
        build(&config).unwrap();
    }

    #[tokio::test]
    async fn build_with_smtp() {
        let config = load(&[
            ("EMAIL_USER", "relay@example.com"),
            ("EMAIL_PASSWORD", "app-password"),
            ("RECIPIENT_EMAIL", "me@example.com"),
        ]);
        assert!(matches!(
            email::connect(&config.email).unwrap(),
            Some(folio_email_impl::EmailServiceImpl::Smtp(_))
        ));
        build(&config).unwrap();
    }

    #[tokio::test]
    async fn build_with_api() {
        let config = load(&[
            ("FOLIO__EMAIL__TRANSPORT", "api"),
            ("EMAIL_API_KEY", "re_123"),
            ("SENDER_EMAIL", "relay@example.com"),
        ]);
        assert!(matches!(
            email::connect(&config.email).unwrap(),
            Some(folio_email_impl::EmailServiceImpl::Api(_))
        ));
    }
}
