use folio_models::config_status::ConfigStatus;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiHealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    /// Whether each configuration value is defined
    pub env: ConfigStatus,
}
