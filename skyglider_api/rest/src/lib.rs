use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use skyglider_core_contact_contracts::ContactFeatureService;
use skyglider_core_health_contracts::HealthFeatureService;
use skyglider_di::Build;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

mod errors;
mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone, Build)]
pub struct RestServer<Health, Contact> {
    health: Health,
    contact: Contact,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    /// Origins the static site is served from.
    pub allowed_origins: Arc<[HeaderValue]>,
}

impl RestServerConfig {
    pub fn new(allowed_origins: &[String]) -> anyhow::Result<Self> {
        let allowed_origins = allowed_origins
            .iter()
            .map(|origin| {
                origin
                    .parse()
                    .with_context(|| format!("Invalid allowed origin: {origin:?}"))
            })
            .collect::<anyhow::Result<_>>()?;
        Ok(Self { allowed_origins })
    }
}

impl<Health, Contact> RestServer<Health, Contact>
where
    Health: HealthFeatureService,
    Contact: ContactFeatureService,
{
    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let cors = CorsLayer::new()
            .allow_origin(AllowOrigin::list(self.config.allowed_origins.iter().cloned()))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]);

        let router = Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::contact::router(self.contact.into()));
        let router = middlewares::panic_handler::add(router).layer(cors);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown signal"),
        Err(err) => warn!("Failed to listen for shutdown signal: {err}"),
    }
}
