use crate::error::BookstoreError;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DATABASE_URL_VAR: &str = "BOOKSTORE_DATABASE_URL";
pub const MAX_CONNECTIONS_VAR: &str = "BOOKSTORE_MAX_CONNECTIONS";

const DEFAULT_MAX_CONNECTIONS: u32 = 1;

/// Where the inventory database lives and how it is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    pub database_url: String,
    pub max_connections: u32,
}

impl InventoryConfig {
    /// Builds a config for a SQLite file at `path`.
    ///
    /// The file is created on first connect if it does not exist.
    pub fn for_path(path: &Path) -> Self {
        Self {
            database_url: format!("sqlite://{}", path.display()),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// Reads the config from the environment.
    ///
    /// - `BOOKSTORE_DATABASE_URL` overrides the database location.
    /// - `BOOKSTORE_MAX_CONNECTIONS` overrides the pool size (at least 1).
    ///
    /// Without an override the database is `<data dir>/bookstore/inventory.db`;
    /// the directory is created if missing.
    ///
    /// # Errors
    /// - [`BookstoreError::Config`] if a variable holds an unusable value or
    ///   the platform data directory cannot be determined
    /// - [`BookstoreError::Io`] if the data directory cannot be created
    pub fn from_env() -> Result<Self, BookstoreError> {
        let database_url = match env::var(DATABASE_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => url.trim().to_owned(),
            _ => {
                let path = Self::default_database_path()?;
                if let Some(dir) = path.parent() {
                    fs::create_dir_all(dir)?;
                }
                Self::for_path(&path).database_url
            }
        };

        let max_connections = match env::var(MAX_CONNECTIONS_VAR) {
            Ok(raw) => Self::parse_max_connections(&raw)?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            max_connections,
        })
    }

    /// Resolves `<data dir>/bookstore/inventory.db`.
    ///
    /// # Errors
    /// - [`BookstoreError::Config`] if the user's data directory cannot be determined
    pub fn default_database_path() -> Result<PathBuf, BookstoreError> {
        let data = dirs::data_dir()
            .ok_or_else(|| BookstoreError::Config("data directory not found".into()))?;

        Ok(data.join("bookstore").join("inventory.db"))
    }

    fn parse_max_connections(raw: &str) -> Result<u32, BookstoreError> {
        match raw.trim().parse::<u32>() {
            Ok(n) if n >= 1 => Ok(n),
            _ => Err(BookstoreError::Config(format!(
                "{MAX_CONNECTIONS_VAR} must be a positive integer, got '{raw}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_path_builds_sqlite_url() {
        let config = InventoryConfig::for_path(Path::new("/tmp/shop.db"));
        assert_eq!(config.database_url, "sqlite:///tmp/shop.db");
        assert_eq!(config.max_connections, 1);
    }

    #[test]
    fn max_connections_must_be_positive() {
        assert_eq!(InventoryConfig::parse_max_connections(" 4 ").unwrap(), 4);
        assert!(InventoryConfig::parse_max_connections("0").is_err());
        assert!(InventoryConfig::parse_max_connections("many").is_err());
    }
}
