pub mod analyze;
pub mod history;
pub mod log;
pub mod report;
pub mod transfer;
pub mod version;
pub mod views;

use healthvoice_core::Config;
use healthvoice_insights::HealthService;
use healthvoice_store::{Paths, SqliteLogStore};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;

/// Resolved paths, configuration and global flags for one invocation
pub struct Context {
    pub paths: Paths,
    pub config: Config,
    pub db_path: PathBuf,
    pub user: Option<String>,
}

impl Context {
    pub fn from_cli(db: Option<PathBuf>, user: Option<String>) -> anyhow::Result<Self> {
        let paths = Paths::new()?;
        let config = Config::load(&paths.config_file())?;
        let db_path = db.unwrap_or_else(|| paths.db_file());
        Ok(Self {
            paths,
            config,
            db_path,
            user,
        })
    }

    pub fn owner(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn service(&self) -> anyhow::Result<HealthService<SqliteLogStore>> {
        let store = SqliteLogStore::new(&self.db_path)?;
        Ok(HealthService::new(store, self.config.clone()))
    }
}

pub fn to_pretty_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Join CLI words into a note, falling back to stdin when none were given.
pub fn note_text(words: &[String]) -> anyhow::Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(input)
}
