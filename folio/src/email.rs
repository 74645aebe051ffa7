use anyhow::Context;
use folio_config::{EmailConfig, EmailTransport};
use folio_email_impl::{
    ApiEmailService, ApiEmailServiceConfig, EmailServiceImpl, SmtpEmailService,
    SmtpEmailServiceConfig,
};

/// Set up the configured mail transport. Returns `None` if the credentials or
/// the sender address are missing.
pub fn connect(config: &EmailConfig) -> anyhow::Result<Option<EmailServiceImpl>> {
    let Some(from) = config.sender() else {
        return Ok(None);
    };

    let service = match config.transport {
        EmailTransport::Smtp => {
            let (Some(username), Some(password)) = (&config.smtp.username, &config.smtp.password)
            else {
                return Ok(None);
            };
            SmtpEmailService::new(SmtpEmailServiceConfig {
                url: config.smtp.url.clone(),
                username: username.clone(),
                password: password.expose().into(),
                from,
                timeout: config.timeout.into(),
            })
            .context("Failed to configure SMTP transport")?
            .into()
        }
        EmailTransport::Api => {
            let Some(api_key) = &config.api.api_key else {
                return Ok(None);
            };
            ApiEmailService::new(ApiEmailServiceConfig {
                endpoint: config.api.endpoint.clone(),
                api_key: api_key.expose().into(),
                from,
                timeout: config.timeout.into(),
                connect_timeout: config.connect_timeout.into(),
            })
            .context("Failed to configure mail API transport")?
            .into()
        }
    };

    Ok(Some(service))
}
