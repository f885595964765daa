use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Which item surface a process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemVariant {
    /// `name` + `price`, no listing
    Priced,
    /// `title` + optional `description`, with listing and health check
    Titled,
}

impl ItemVariant {
    /// Database file used when `DATABASE_PATH` is not set
    pub fn default_database_path(self) -> PathBuf {
        match self {
            ItemVariant::Priced => PathBuf::from("items.db"),
            ItemVariant::Titled => PathBuf::from("/data/items.db"),
        }
    }
}

impl FromStr for ItemVariant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "priced" => Ok(ItemVariant::Priced),
            "titled" => Ok(ItemVariant::Titled),
            other => bail!(
                "unknown item variant '{}', expected 'priced' or 'titled'",
                other
            ),
        }
    }
}

impl fmt::Display for ItemVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemVariant::Priced => f.write_str("priced"),
            ItemVariant::Titled => f.write_str("titled"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub variant: ItemVariant,
    pub database_path: PathBuf,
    pub database_max_connections: u32,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let variant = env::var("ITEMS_VARIANT")
            .unwrap_or_else(|_| "titled".to_string())
            .parse::<ItemVariant>()
            .context("ITEMS_VARIANT must be 'priced' or 'titled'")?;

        let database_path = env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| variant.default_database_path());

        let database_max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?;
        if database_max_connections == 0 {
            bail!("DATABASE_MAX_CONNECTIONS must be at least 1");
        }

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            variant,
            database_path,
            database_max_connections,
            service_port,
            service_host,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Item variant: {}", self.variant);
        tracing::info!("  Database path: {}", self.database_path.display());
        tracing::info!("  Database max connections: {}", self.database_max_connections);
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
