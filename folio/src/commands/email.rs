use anyhow::Context;
use clap::Subcommand;
use folio_config::Config;
use folio_email_contracts::{Email, EmailService};
use folio_models::email_address::EmailAddress;
use tracing::info;

use crate::email;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test { recipient: EmailAddress },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: EmailAddress) -> anyhow::Result<()> {
    let email_service = email::connect(&config.email)?.with_context(|| {
        format!(
            "Mail transport is not configured, missing {}",
            config.status().missing().join(", ")
        )
    })?;

    let id = email_service
        .send(Email {
            recipient,
            subject: "Email Deliverability Test".into(),
            body: "Email deliverability seems to be working!".into(),
            reply_to: None,
        })
        .await?;

    info!(%id, "Test email sent");

    Ok(())
}
