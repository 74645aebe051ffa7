use std::future::Future;

use folio_models::config_status::ConfigStatus;

pub trait HealthService: Send + Sync + 'static {
    fn get_status(&self) -> impl Future<Output = HealthStatus> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthStatus {
    pub env: ConfigStatus,
}
