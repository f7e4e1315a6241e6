//! Where the table declarations of a store come from.
//!
//! The first of these wins:
//! - an explicit schema file (the `--schema` flag of the CLI)
//! - the file named by `FERRUM_SCHEMA` (a `.env` file is read first if present)
//! - the built-in default, `profiles (id)` and `imports (csid, importID)`
//!
//! A schema file is a JSON document like
//! `{"tables": [{"name": "profiles", "columns": ["id"]}]}`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::persistence::{Database, TableDefinition};
use crate::profiles::profile_tables;

pub const SCHEMA_ENV_VAR: &str = "FERRUM_SCHEMA";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read schema file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse schema file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub tables: Vec<TableDefinition>,
}

impl Default for StoreConfig {
    fn default() -> StoreConfig {
        let mut tables = profile_tables();
        tables.push(TableDefinition::with_columns("imports", &["csid", "importID"]));

        StoreConfig { tables }
    }
}

impl StoreConfig {
    pub fn from_json(json: &str) -> Result<StoreConfig, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_file(path: &Path) -> Result<StoreConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        StoreConfig::from_json(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(schema: Option<&Path>) -> Result<StoreConfig, ConfigError> {
        //! Resolve the configuration from an explicit path, the environment,
        //! or fall back to the default.

        if let Some(path) = schema {
            debug!("loading schema from {}", path.display());
            return StoreConfig::from_file(path);
        }

        dotenvy::dotenv().ok();
        match std::env::var(SCHEMA_ENV_VAR) {
            Ok(path) if !path.is_empty() => {
                debug!("loading schema from ${} = {}", SCHEMA_ENV_VAR, path);
                StoreConfig::from_file(Path::new(&path))
            }
            _ => Ok(StoreConfig::default()),
        }
    }

    pub fn build(self) -> Database {
        Database::new(self.tables)
    }
}
