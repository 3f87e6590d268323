use skyglider_config::Config;
use skyglider_di::Provides;
use skyglider_email_contracts::EmailService;
use tracing::info;

use crate::{
    email,
    environment::{types::RestServer, ConfigProvider, Provider},
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let email = match &config.email {
        Some(email_config) => {
            info!("Connecting to smtp server");
            let email = email::connect(email_config).await?;
            email.ping().await?;
            Some(email)
        }
        None => None,
    };

    match &config.contact.forward_to {
        Some(recipient) => info!("Forwarding contact submissions to {recipient}"),
        None => info!("Writing contact submissions to the log"),
    }

    let config_provider = ConfigProvider::new(&config)?;
    let mut provider = Provider::new(config_provider, email);
    let server: RestServer = provider.provide();
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
