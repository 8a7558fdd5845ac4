//! Before/after block snapshots and the undo/redo stacks built from them.

use std::fmt;

use geist_blocks::Block;
use geist_geom::{BlockBox, BlockPos};
use geist_world::{SharedWorld, read_world, write_world};

use crate::RegionSelector;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapshotPhase {
    /// State prior to the edit; restored by undo.
    Before,
    /// State after the edit; replayed by redo.
    After,
}

/// One undoable edit: a volume of the world captured before and after.
pub struct HistoryEntry {
    world: SharedWorld,
    position1: BlockPos,
    position2: BlockPos,
    pre: Vec<(BlockPos, Block)>,
    post: Vec<(BlockPos, Block)>,
}

impl HistoryEntry {
    pub fn new(world: SharedWorld, position1: BlockPos, position2: BlockPos) -> Self {
        Self {
            world,
            position1,
            position2,
            pre: Vec::new(),
            post: Vec::new(),
        }
    }

    /// Capture the current blocks of the volume into the given phase, replacing any earlier capture.
    pub fn snapshot(&mut self, phase: SnapshotPhase) {
        let bounds = self.bounds();
        let blocks: Vec<(BlockPos, Block)> = {
            let world = read_world(&self.world);
            bounds.iter().map(|p| (p, world.block(p))).collect()
        };
        match phase {
            SnapshotPhase::Before => self.pre = blocks,
            SnapshotPhase::After => self.post = blocks,
        }
    }

    #[inline]
    pub fn presnapshot(&self) -> &[(BlockPos, Block)] {
        &self.pre
    }

    #[inline]
    pub fn postsnapshot(&self) -> &[(BlockPos, Block)] {
        &self.post
    }

    #[inline]
    pub fn blocks(&self, phase: SnapshotPhase) -> &[(BlockPos, Block)] {
        match phase {
            SnapshotPhase::Before => &self.pre,
            SnapshotPhase::After => &self.post,
        }
    }

    #[inline]
    pub fn corners(&self) -> (BlockPos, BlockPos) {
        (self.position1, self.position2)
    }

    #[inline]
    pub fn bounds(&self) -> BlockBox {
        BlockBox::from_corners(self.position1, self.position2)
    }

    #[inline]
    pub fn world(&self) -> &SharedWorld {
        &self.world
    }

    /// Write the captured phase back into the originating world.
    pub fn restore(&self, phase: SnapshotPhase) {
        self.write_blocks(self.blocks(phase));
    }

    pub fn write_blocks(&self, blocks: &[(BlockPos, Block)]) {
        let mut world = write_world(&self.world);
        for &(p, b) in blocks {
            world.set_block(p, b);
        }
    }
}

impl fmt::Debug for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryEntry")
            .field("position1", &self.position1)
            .field("position2", &self.position2)
            .field("pre", &self.pre.len())
            .field("post", &self.post.len())
            .finish()
    }
}

impl RegionSelector {
    /// Record the before-state of `pos1..=pos2` as a new undo entry.
    ///
    /// Edits call this right before touching blocks, then record the
    /// after-state on the returned entry. Unless `keep_redo` is set the redo
    /// stack is dropped, since the timeline has branched.
    pub fn create_snapshot(
        &mut self,
        pos1: BlockPos,
        pos2: BlockPos,
        keep_redo: bool,
    ) -> &mut HistoryEntry {
        let mut entry = HistoryEntry::new(self.session.world(), pos1, pos2);
        entry.snapshot(SnapshotPhase::Before);
        if !keep_redo && !self.redo.is_empty() {
            log::debug!(
                "session {} branched history; dropping {} redo entries",
                self.session.id(),
                self.redo.len()
            );
            self.redo.clear();
        }
        let idx = self.history.len();
        self.history.push(entry);
        &mut self.history[idx]
    }

    /// Snapshot of the current selection.
    pub fn create_selection_snapshot(&mut self) -> &mut HistoryEntry {
        let (a, b) = (self.position1(), self.position2());
        self.create_snapshot(a, b, false)
    }

    /// Restore the most recent edit's before-state. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(entry) = self.history.pop() else {
            return false;
        };
        self.clear_selection();
        entry.restore(SnapshotPhase::Before);
        log::debug!(
            "session {} undo {:?}; {} left",
            self.session.id(),
            entry.bounds(),
            self.history.len()
        );
        self.redo.push(entry);
        true
    }

    /// Replay the most recently undone edit as a new, itself undoable, entry.
    /// Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(target) = self.redo.pop() else {
            return false;
        };
        self.clear_selection();
        let (a, b) = target.corners();
        let replay = self.create_snapshot(a, b, true);
        replay.write_blocks(target.postsnapshot());
        replay.snapshot(SnapshotPhase::After);
        log::debug!(
            "session {} redo {:?}; {} left",
            self.session.id(),
            target.bounds(),
            self.redo.len()
        );
        true
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        self.redo.clear();
    }

    #[inline]
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Undo stack, oldest first.
    #[inline]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Redo stack, oldest first.
    #[inline]
    pub fn redo_buffer(&self) -> &[HistoryEntry] {
        &self.redo
    }
}
