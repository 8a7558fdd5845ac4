use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use geist_blocks::{BlockEntry, BlockRegistry};
use geist_edit::ParticleKind;
use geist_world::WorldConfig;
use serde::Deserialize;

use crate::cli::Cli;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct BuilderConfig {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub blocks: HashMap<String, BlockEntry>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_show_selection")]
    pub show_selection: bool,
    #[serde(default = "default_marker")]
    pub marker: u16,
}

fn default_show_selection() -> bool {
    true
}

fn default_marker() -> u16 {
    ParticleKind::SELECTION.0
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_selection: default_show_selection(),
            marker: default_marker(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl BuilderConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: BuilderConfig = toml::from_str(s)?;
        cfg.world.validate()?;
        Ok(cfg)
    }

    /// Load `path`, or fall back to defaults when no config was given.
    pub fn load(path: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        match path {
            Some(p) => {
                let s = fs::read_to_string(p)
                    .map_err(|e| format!("failed to read {}: {}", p.display(), e))?;
                Self::from_toml_str(&s)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn apply_cli_overrides(&mut self, args: &Cli) {
        if let Some(ref level) = args.log_level {
            self.log.level = level.clone();
        }
        if let Some(marker) = args.marker {
            self.display.marker = marker;
        }
        if args.hide_selection {
            self.display.show_selection = false;
        }
    }

    pub fn block_registry(&self) -> BlockRegistry {
        BlockRegistry::from_entries(&self.blocks)
    }

    #[inline]
    pub fn marker(&self) -> ParticleKind {
        ParticleKind(self.display.marker)
    }
}
