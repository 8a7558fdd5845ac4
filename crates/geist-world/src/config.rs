use serde::Deserialize;
use std::error::Error;

use crate::DEFAULT_CHUNK_SIZE;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct WorldConfig {
    #[serde(default = "default_chunk_size")]
    pub chunk_size: i32,
    #[serde(default)]
    pub min_y: i32,
    #[serde(default = "default_max_y")]
    pub max_y: i32,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub flat: Flat,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            min_y: 0,
            max_y: default_max_y(),
            mode: Mode::Empty,
            flat: Flat::default(),
        }
    }
}

fn default_chunk_size() -> i32 {
    DEFAULT_CHUNK_SIZE
}

fn default_max_y() -> i32 {
    127
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Empty,
    Flat,
}

/// Ground layer laid from `min_y` upward when `mode = "flat"`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Flat {
    #[serde(default = "default_flat_thickness")]
    pub thickness: i32,
    #[serde(default = "default_flat_block")]
    pub block: String,
}

fn default_flat_thickness() -> i32 {
    1
}

fn default_flat_block() -> String {
    "stone".to_string()
}

impl Default for Flat {
    fn default() -> Self {
        Self {
            thickness: default_flat_thickness(),
            block: default_flat_block(),
        }
    }
}

impl WorldConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: WorldConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.chunk_size <= 0 {
            return Err(format!("chunk_size must be positive, got {}", self.chunk_size).into());
        }
        if self.min_y > self.max_y {
            return Err(format!("min_y {} is above max_y {}", self.min_y, self.max_y).into());
        }
        Ok(())
    }
}
