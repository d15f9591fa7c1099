use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

/// Secrets that must never sign anything.
const PLACEHOLDER_SECRETS: &[&str] = &[
    "default-secret-key-for-development",
    "change-me",
    "change-me-to-a-random-string",
];

const DEFAULT_BASE_URL: &str = "https://portfolio-tau-self-82.vercel.app";

pub struct Config {
    pub mini_app_secret: String,
    pub base_url: String,
    pub db_path: PathBuf,
    pub manifest_path: PathBuf,
    pub image_path: PathBuf,
    pub static_dir: PathBuf,
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let mini_app_secret = lookup("FOLIO_MINI_APP_SECRET").unwrap_or_default();
        if mini_app_secret.trim().is_empty() {
            bail!("FOLIO_MINI_APP_SECRET is unset");
        }
        if PLACEHOLDER_SECRETS.contains(&mini_app_secret.as_str()) {
            bail!("FOLIO_MINI_APP_SECRET is still a placeholder");
        }

        let base_url = or("FOLIO_BASE_URL", DEFAULT_BASE_URL).trim_end_matches('/').to_string();
        if base_url.is_empty() {
            bail!("FOLIO_BASE_URL is empty");
        }

        let host = or("FOLIO_HOST", "0.0.0.0");
        let host: IpAddr = host
            .parse()
            .with_context(|| format!("Invalid FOLIO_HOST value: {}", host))?;

        let port = or("FOLIO_PORT", "3000");
        let port: u16 = port
            .parse()
            .with_context(|| format!("Invalid FOLIO_PORT value: {}", port))?;

        Ok(Self {
            mini_app_secret,
            base_url,
            db_path: or("FOLIO_DB_PATH", "database.db").into(),
            manifest_path: or("FOLIO_MANIFEST_PATH", "public/.well-known/farcaster.json").into(),
            image_path: or("FOLIO_IMAGE_PATH", "static/app-image.png").into(),
            static_dir: or("FOLIO_STATIC_DIR", "static").into(),
            host,
            port,
        })
    }
}
