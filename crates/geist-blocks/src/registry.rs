use std::collections::HashMap;
use std::error::Error;

use serde::Deserialize;

use super::types::{Block, BlockId, BlockState};

pub const AIR_NAME: &str = "air";

/// Name → block palette used by configs and edit scripts.
#[derive(Clone, Debug)]
pub struct BlockRegistry {
    by_name: HashMap<String, Block>,
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockRegistry {
    /// Registry holding only `air`.
    pub fn new() -> Self {
        let mut by_name = HashMap::new();
        by_name.insert(AIR_NAME.to_string(), Block::AIR);
        Self { by_name }
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<Block> {
        self.by_name.get(name).copied()
    }

    /// Reverse lookup; ties resolve to the alphabetically first name.
    pub fn name_of(&self, block: Block) -> Option<&str> {
        self.by_name
            .iter()
            .filter(|(_, b)| **b == block)
            .map(|(k, _)| k.as_str())
            .min()
    }

    pub fn insert(&mut self, name: impl Into<String>, block: Block) {
        let name = name.into();
        if name == AIR_NAME {
            // air is pinned to Block::AIR
            return;
        }
        self.by_name.insert(name, block);
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn from_entries(entries: &HashMap<String, BlockEntry>) -> Self {
        let mut reg = Self::new();
        for (name, entry) in entries {
            reg.insert(name.clone(), entry.block());
        }
        reg
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: BlocksConfig = toml::from_str(toml_str)?;
        Ok(Self::from_entries(&cfg.blocks))
    }
}

// --- Config ---

#[derive(Deserialize)]
pub struct BlocksConfig {
    #[serde(default)]
    pub blocks: HashMap<String, BlockEntry>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum BlockEntry {
    // Simple: stone = 1
    Id(BlockId),
    // Detailed: oak_log = { id = 4, state = 2 }
    Detail {
        id: BlockId,
        #[serde(default)]
        state: BlockState,
    },
}

impl BlockEntry {
    pub fn block(&self) -> Block {
        match *self {
            BlockEntry::Id(id) => Block::new(id, 0),
            BlockEntry::Detail { id, state } => Block::new(id, state),
        }
    }
}
