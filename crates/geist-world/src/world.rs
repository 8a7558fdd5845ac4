use std::collections::HashMap;
use std::error::Error;

use geist_blocks::{Block, BlockRegistry};
use geist_geom::BlockPos;

use crate::config::{Mode, WorldConfig};
use crate::{BlockStore, BuildRange, ChunkCoord};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WorldGenMode {
    Empty,
    Flat { thickness: i32, block: Block },
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldStats {
    pub chunk_entries: usize,
    pub block_edits: usize,
    pub revision: u64,
}

/// Sparse in-memory world: generated terrain plus per-chunk written blocks.
pub struct VoxelWorld {
    chunk_size: i32,
    range: BuildRange,
    mode: WorldGenMode,
    // key=chunk -> map of world coords -> Block
    chunks: HashMap<ChunkCoord, HashMap<BlockPos, Block>>,
    counter: u64,
}

impl VoxelWorld {
    pub fn new(chunk_size: i32, range: BuildRange, mode: WorldGenMode) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
            range,
            mode,
            chunks: HashMap::new(),
            counter: 0,
        }
    }

    /// Empty world with the default build range.
    pub fn empty() -> Self {
        Self::new(crate::DEFAULT_CHUNK_SIZE, BuildRange::DEFAULT, WorldGenMode::Empty)
    }

    pub fn from_config(cfg: &WorldConfig, reg: &BlockRegistry) -> Result<Self, Box<dyn Error>> {
        cfg.validate()?;
        let mode = match cfg.mode {
            Mode::Empty => WorldGenMode::Empty,
            Mode::Flat => {
                let block = reg
                    .get(&cfg.flat.block)
                    .ok_or_else(|| format!("unknown flat block '{}'", cfg.flat.block))?;
                WorldGenMode::Flat {
                    thickness: cfg.flat.thickness,
                    block,
                }
            }
        };
        Ok(Self::new(
            cfg.chunk_size,
            BuildRange::new(cfg.min_y, cfg.max_y),
            mode,
        ))
    }

    #[inline]
    fn chunk_key(&self, p: BlockPos) -> ChunkCoord {
        ChunkCoord::containing(p, self.chunk_size)
    }

    /// Block the world would hold at `p` without any writes. Ground never
    /// extends past the build range.
    pub fn generated(&self, p: BlockPos) -> Block {
        match self.mode {
            WorldGenMode::Empty => Block::AIR,
            WorldGenMode::Flat { thickness, block } => {
                let top = i64::from(self.range.min_y) + i64::from(thickness);
                if self.range.contains(p.y) && i64::from(p.y) < top {
                    block
                } else {
                    Block::AIR
                }
            }
        }
    }

    pub fn stats(&self) -> WorldStats {
        WorldStats {
            chunk_entries: self.chunks.len(),
            block_edits: self.chunks.values().map(|m| m.len()).sum(),
            revision: self.counter,
        }
    }

    /// Written blocks inside one chunk.
    pub fn edits_in_chunk(&self, c: ChunkCoord) -> Vec<(BlockPos, Block)> {
        self.chunks
            .get(&c)
            .map(|m| m.iter().map(|(k, v)| (*k, *v)).collect())
            .unwrap_or_default()
    }
}

impl BlockStore for VoxelWorld {
    fn block(&self, p: BlockPos) -> Block {
        self.chunks
            .get(&self.chunk_key(p))
            .and_then(|m| m.get(&p).copied())
            .unwrap_or_else(|| self.generated(p))
    }

    fn set_block(&mut self, p: BlockPos, b: Block) {
        let k = self.chunk_key(p);
        self.chunks.entry(k).or_default().insert(p, b);
        self.counter += 1;
    }

    fn build_range(&self) -> BuildRange {
        self.range
    }
}
