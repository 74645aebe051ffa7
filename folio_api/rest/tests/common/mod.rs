#![allow(dead_code, reason = "not every test file uses every helper")]

use std::{net::Ipv4Addr, sync::Arc};

use folio_api_rest::{AllowedOrigins, RestServer, RestServerConfig};
use folio_core_contact_contracts::ContactService;
use folio_core_contact_impl::{ContactServiceConfig, ContactServiceImpl};
use folio_core_health_impl::{HealthServiceConfig, HealthServiceImpl};
use folio_email_contracts::MockEmailService;
use folio_models::{config_status::ConfigStatus, contact::DispatchMode};
use tokio::net::TcpListener;

pub const PRODUCTION_ORIGIN: &str = "https://portfolio.example.com";
pub const RECIPIENT: &str = "me@example.com";

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn(contact: impl ContactService, status: ConfigStatus) -> Self {
        let health = HealthServiceImpl::new(HealthServiceConfig { status });
        let config = RestServerConfig {
            allowed_origins: AllowedOrigins::new([format!("{PRODUCTION_ORIGIN}/")]),
        };
        let server = RestServer::new(health, contact, config.into());

        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(server.serve_on(listener));

        Self {
            address,
            client: reqwest::Client::new(),
        }
    }

    /// Spawns the server with a fully configured contact service backed by
    /// `email`.
    pub async fn with_email(email: MockEmailService, dispatch: DispatchMode) -> Self {
        let contact = ContactServiceImpl::new(
            Some(Arc::new(email)),
            ContactServiceConfig {
                recipient: Some(RECIPIENT.parse().unwrap()),
                dispatch,
                status: complete_status(),
            }
            .into(),
        );
        Self::spawn(contact, complete_status()).await
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.get(format!("{}{path}", self.address))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.post(format!("{}{path}", self.address))
    }

    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.client.request(method, format!("{}{path}", self.address))
    }
}

pub fn complete_status() -> ConfigStatus {
    ConfigStatus {
        email_credentials: true,
        email_sender: true,
        recipient_email: true,
        frontend_url: true,
    }
}
