use folio_core_health_contracts::{HealthService, HealthStatus};
use folio_models::config_status::ConfigStatus;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct HealthServiceImpl {
    config: HealthServiceConfig,
}

#[derive(Debug, Clone, Copy)]
pub struct HealthServiceConfig {
    pub status: ConfigStatus,
}

impl HealthServiceImpl {
    pub fn new(config: HealthServiceConfig) -> Self {
        Self { config }
    }
}

impl HealthService for HealthServiceImpl {
    async fn get_status(&self) -> HealthStatus {
        let env = self.config.status;
        if !env.is_complete() {
            warn!(missing = ?env.missing(), "Health check: configuration is incomplete");
        }
        HealthStatus { env }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_config_status() {
        let status = ConfigStatus {
            email_credentials: true,
            email_sender: true,
            recipient_email: false,
            frontend_url: false,
        };
        let sut = HealthServiceImpl::new(HealthServiceConfig { status });

        let result = sut.get_status().await;

        assert_eq!(result, HealthStatus { env: status });
    }
}
