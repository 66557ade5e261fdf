use std::path::PathBuf;

use anyhow::Result;
use config::{Config, Environment};
use serde::Deserialize;

pub const ENV_PREFIX: &str = "INTEGRATE";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding the generated pages.
    pub docs_dir: PathBuf,
    /// Template source; also never treated as a candidate.
    pub index_file: String,
    /// Report candidates without rewriting them.
    pub dry_run: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            docs_dir: PathBuf::from("docs"),
            index_file: "index.html".to_string(),
            dry_run: false,
        }
    }
}

impl Settings {
    /// Defaults overlaid with `INTEGRATE_*` environment variables.
    pub fn load() -> Result<Self> {
        Self::from_env(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_env(env: Environment) -> Result<Self> {
        let defaults = Settings::default();
        let settings = Config::builder()
            .set_default("docs_dir", defaults.docs_dir.to_string_lossy().into_owned())?
            .set_default("index_file", defaults.index_file)?
            .set_default("dry_run", defaults.dry_run)?
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn index_path(&self) -> PathBuf {
        self.docs_dir.join(&self.index_file)
    }
}
