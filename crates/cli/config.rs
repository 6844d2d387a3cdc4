use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    io::ErrorKind,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

const APP_ID: &str = "logforge";
const CONFIG_FILE: &str = "config.json";

fn config_dir(app_id: &str) -> Option<PathBuf> {
    directories_next::ProjectDirs::from("", "", app_id)
        .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
}

/// Defaults read from `config.json`. Command line flags take precedence.
#[derive(Deserialize, Default, Debug, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub out: Option<PathBuf>,
    pub count: Option<usize>,
    pub lines: Option<usize>,
    pub window_minutes: Option<u32>,
    pub max_attempts: Option<NonZeroUsize>,
    pub seed: Option<u64>,
}

impl FileConfig {
    /// Loads `explicit` if given, otherwise the per-user config file.
    ///
    /// Only a missing per-user file is tolerated.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::read(path),
            None => {
                let Some(path) = config_dir(APP_ID).map(|dir| dir.join(CONFIG_FILE)) else {
                    return Ok(Self::default());
                };
                match Self::read(&path) {
                    Err(e)
                        if e.downcast_ref::<std::io::Error>()
                            .is_some_and(|e| e.kind() == ErrorKind::NotFound) =>
                    {
                        Ok(Self::default())
                    }
                    other => other,
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("failed to open config file {}", path.display()))?;
        let reader = std::io::BufReader::new(file);
        let config: Self = serde_json::from_reader(reader)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}
