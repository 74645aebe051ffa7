use folio_config::Config;
use folio_models::config_status::ConfigStatus;
use tracing::{error, info};

use crate::environment;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    log_config_status(&config);

    let server = environment::build(&config)?;

    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}

fn log_config_status(config: &Config) {
    let status = config.status();

    info!("Configuration loaded:");
    for (name, defined) in status_lines(status) {
        info!("{name}: {}", if defined { "Defined" } else { "Undefined" });
    }
    info!(
        transport = ?config.email.transport,
        dispatch = ?config.contact.dispatch,
        allowed_origins = ?config.http.allowed_origins,
        "Contact relay settings"
    );

    if !status.is_complete() {
        error!(
            missing = ?status.missing(),
            "Configuration is incomplete, every contact message will be rejected"
        );
    }
}

pub fn status_lines(status: ConfigStatus) -> [(&'static str, bool); 4] {
    [
        ("Mail provider credentials", status.email_credentials),
        ("Sender address", status.email_sender),
        ("Recipient address", status.recipient_email),
        ("Frontend url", status.frontend_url),
    ]
}
