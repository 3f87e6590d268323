use std::{net::IpAddr, path::Path};

use anyhow::{ensure, Context};
use config::{File, FileFormat};
use serde::Deserialize;
use skyglider_models::email_address::EmailAddressWithName;

pub use duration::Duration;

mod duration;

/// Environment variable containing a colon separated list of additional config
/// files. Later files override earlier ones.
pub const CONFIG_PATHS_ENV: &str = "SKYGLIDER_CONFIG";

const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

/// Load the default config, overridden by the files listed in
/// [`CONFIG_PATHS_ENV`].
pub fn load() -> anyhow::Result<Config> {
    let paths = std::env::var(CONFIG_PATHS_ENV).unwrap_or_default();
    let paths = paths.split(':').filter(|x| !x.is_empty()).collect::<Vec<_>>();
    load_paths(&paths)
}

/// Load the default config, overridden by the given files.
pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    let sources = paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    load_sources(sources.iter().map(String::as_str))
}

fn load_sources<'a>(sources: impl IntoIterator<Item = &'a str>) -> anyhow::Result<Config> {
    let config = std::iter::once(DEFAULT_CONFIG)
        .chain(sources)
        .fold(config::Config::builder(), |builder, content| {
            builder.add_source(File::from_str(content, FileFormat::Toml))
        })
        .build()?
        .try_deserialize::<Config>()
        .context("Failed to load config")?;

    config.check()?;

    Ok(config)
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub contact: ContactConfig,
    pub email: Option<EmailConfig>,
    pub health: HealthConfig,
    pub sentry: Option<SentryConfig>,
}

impl Config {
    fn check(&self) -> anyhow::Result<()> {
        ensure!(
            self.contact.forward_to.is_none() || self.email.is_some(),
            "contact.forward_to requires the email section to be configured"
        );
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub record_timeout: Duration,
    pub forward_to: Option<EmailAddressWithName>,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub smtp_url: String,
    pub from: EmailAddressWithName,
}

#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Deserialize)]
pub struct SentryConfig {
    pub dsn: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let no_sources: [&str; 0] = [];
        let config = load_sources(no_sources).unwrap();

        assert_eq!(config.http.port, 8000);
        assert_eq!(*config.contact.record_timeout, std::time::Duration::from_secs(10));
        assert!(config.contact.forward_to.is_none());
        assert!(config.email.is_none());
        assert!(config.sentry.is_none());
    }

    #[test]
    fn override_default_config() {
        let config = load_sources([
            r#"
            [http]
            port = 9000

            [contact]
            forward_to = "SkyGlider <hello@theskyglider.com>"

            [email]
            smtp_url = "smtp://127.0.0.1:2525"
            from = "noreply@theskyglider.com"
            "#,
        ])
        .unwrap();

        assert_eq!(config.http.port, 9000);
        assert_eq!(config.http.host.to_string(), "127.0.0.1");
        assert_eq!(
            config.contact.forward_to.unwrap().to_string(),
            "SkyGlider <hello@theskyglider.com>"
        );
        assert_eq!(config.email.unwrap().smtp_url, "smtp://127.0.0.1:2525");
    }

    #[test]
    fn forward_to_requires_email() {
        let result = load_sources([r#"
            [contact]
            forward_to = "hello@theskyglider.com"
            "#]);

        assert!(result.is_err());
    }

    #[test]
    fn missing_file() {
        let result = load_paths(&["/nonexistent/skyglider.toml"]);
        assert!(result.is_err());
    }
}
