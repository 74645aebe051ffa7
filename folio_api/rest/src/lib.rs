use std::{net::IpAddr, sync::Arc};

use axum::Router;
use folio_core_contact_contracts::ContactService;
use folio_core_health_contracts::HealthService;
use folio_utils::Apply;
use tokio::net::TcpListener;

pub use self::middlewares::cors::{AllowedOrigins, LOCAL_DEV_ORIGINS};

mod errors;
mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Health, Contact> {
    health: Health,
    contact: Contact,
    config: Arc<RestServerConfig>,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub allowed_origins: AllowedOrigins,
}

impl<Health, Contact> RestServer<Health, Contact>
where
    Health: HealthService,
    Contact: ContactService,
{
    pub fn new(health: Health, contact: Contact, config: Arc<RestServerConfig>) -> Self {
        Self {
            health,
            contact,
            config,
        }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let listener = TcpListener::bind((host, port)).await?;
        self.serve_on(listener).await
    }

    pub async fn serve_on(self, listener: TcpListener) -> anyhow::Result<()> {
        axum::serve(listener, self.router())
            .await
            .map_err(Into::into)
    }

    pub fn router(self) -> Router<()> {
        Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::contact::router(self.contact.into()))
            .pipe(middlewares::panic_handler::add)
            .pipe(middlewares::cors::add(self.config.allowed_origins.clone()))
            .pipe(middlewares::trace::add)
            .pipe(middlewares::request_id::add)
    }
}
