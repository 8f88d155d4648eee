//! Server configuration parsed from environment variables.
//!
//! Variables (a `.env` file is honored via `dotenvy`):
//! - `PORT`: listen port, default 3000
//! - `STOREFRONT_CATALOG`: path to a catalog JSON file; the built-in sample
//!   catalog is used when unset or empty

use std::path::PathBuf;

use catalog::{Catalog, CatalogError};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid port number.
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub catalog_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let catalog_path = lookup("STOREFRONT_CATALOG")
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        Ok(Self { port, catalog_path })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Load the configured catalog file, or the built-in sample.
    ///
    /// # Errors
    ///
    /// Propagates [`CatalogError`] from reading or validating the file.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => Catalog::from_path(path),
            None => Ok(Catalog::sample()),
        }
    }

    /// Short description of where the catalog comes from, for logs.
    pub fn catalog_source(&self) -> String {
        self.catalog_path
            .as_ref()
            .map_or_else(|| "built-in".to_owned(), |path| path.display().to_string())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
