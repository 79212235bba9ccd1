use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;
use crate::label::{LabelOptions, Notation, PrecisionPolicy, Scale};
use crate::output::OutputFormat;

/// Persisted defaults for the command line tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub tick_count: usize,
    pub scale: Scale,
    pub notation: Notation,
    pub precision: PrecisionPolicy,
    pub output: OutputFormat,
    pub align: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_count: 5,
            scale: Scale::Linear,
            notation: Notation::Fixed,
            precision: PrecisionPolicy::PerValue,
            output: OutputFormat::Text,
            align: false,
        }
    }
}

impl Config {
    pub fn label_options(&self) -> LabelOptions {
        LabelOptions {
            scale: self.scale,
            notation: self.notation,
            precision: self.precision,
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = AppDirs::config_path()
            .unwrap_or_else(|| PathBuf::from("ticklabel_config.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let Ok(bytes) = fs::read(&self.path) else {
            return Config::default();
        };
        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(err) => {
                warn!(
                    "ignoring unreadable config {}: {err}",
                    self.path.display()
                );
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)
    }
}
