use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use geist_blocks::Block;
use geist_geom::BlockPos;

/// Inclusive vertical span in which blocks may be placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildRange {
    pub min_y: i32,
    pub max_y: i32,
}

impl BuildRange {
    pub const DEFAULT: BuildRange = BuildRange { min_y: 0, max_y: 127 };

    #[inline]
    pub const fn new(min_y: i32, max_y: i32) -> Self {
        Self { min_y, max_y }
    }

    #[inline]
    pub fn contains(self, y: i32) -> bool {
        (self.min_y..=self.max_y).contains(&y)
    }
}

impl Default for BuildRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The world/terrain store edits are applied to.
///
/// Writes are infallible at this layer.
pub trait BlockStore: Send + Sync {
    fn block(&self, pos: BlockPos) -> Block;

    fn set_block(&mut self, pos: BlockPos, block: Block);

    fn is_air(&self, pos: BlockPos) -> bool {
        self.block(pos).is_air()
    }

    fn build_range(&self) -> BuildRange;
}

/// Handle shared between sessions and the history entries captured from them.
pub type SharedWorld = Arc<RwLock<dyn BlockStore>>;

pub fn share<W: BlockStore + 'static>(world: W) -> SharedWorld {
    Arc::new(RwLock::new(world))
}

/// Read access that shrugs off poisoning; a panicked writer leaves block data intact.
pub fn read_world(world: &SharedWorld) -> RwLockReadGuard<'_, dyn BlockStore + 'static> {
    world.read().unwrap_or_else(PoisonError::into_inner)
}

pub fn write_world(world: &SharedWorld) -> RwLockWriteGuard<'_, dyn BlockStore + 'static> {
    world.write().unwrap_or_else(PoisonError::into_inner)
}
