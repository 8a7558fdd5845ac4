use std::fmt;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use geist_geom::{BlockBox, BlockPos, Vec3};

use crate::history::HistoryEntry;
use crate::{ParticleEmitter, ParticleKind, Session, SessionId};

/// Region selection and edit history owned by one session.
///
/// The session handle is strong; `SelectorRegistry::leave` dropping the
/// selector is what releases it.
///
/// Selection and history mutation take `&mut self`; the owning session's
/// command handling is expected to serialize them. Outline rendering takes
/// `&self` and drops overlapping calls (see `display_selection`).
pub struct RegionSelector {
    pub(crate) session: Arc<dyn Session>,
    pub(crate) emitter: Arc<dyn ParticleEmitter>,
    position1: BlockPos,
    position2: BlockPos,
    pub(crate) show_selection: bool,
    pub(crate) marker: ParticleKind,
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) redo: Vec<HistoryEntry>,
    pub(crate) rendering: AtomicBool,
}

impl RegionSelector {
    pub fn new(session: Arc<dyn Session>, emitter: Arc<dyn ParticleEmitter>) -> Self {
        Self {
            session,
            emitter,
            position1: BlockPos::ORIGIN,
            position2: BlockPos::ORIGIN,
            show_selection: true,
            marker: ParticleKind::SELECTION,
            history: Vec::new(),
            redo: Vec::new(),
            rendering: AtomicBool::new(false),
        }
    }

    #[inline]
    pub fn session(&self) -> &Arc<dyn Session> {
        &self.session
    }

    #[inline]
    pub fn session_id(&self) -> SessionId {
        self.session.id()
    }

    #[inline]
    pub fn position1(&self) -> BlockPos {
        self.position1
    }

    #[inline]
    pub fn position2(&self) -> BlockPos {
        self.position2
    }

    pub fn select_primary(&mut self, pos: BlockPos) {
        self.position1 = pos;
        self.display_selection(true);
    }

    pub fn select_secondary(&mut self, pos: BlockPos) {
        self.position2 = pos;
        self.display_selection(true);
    }

    pub fn select(&mut self, primary: BlockPos, secondary: BlockPos) {
        self.position1 = primary;
        self.position2 = secondary;
        self.display_selection(true);
    }

    /// Collapse both corners onto the origin, which hides the outline.
    pub fn clear_selection(&mut self) {
        self.select(BlockPos::ORIGIN, BlockPos::ORIGIN);
    }

    #[inline]
    pub fn selection(&self) -> BlockBox {
        BlockBox::from_corners(self.position1, self.position2)
    }

    /// Every selected block, X outer, Y middle, Z inner.
    ///
    /// Proportional to the selected volume; use `selection().iter()` to stream.
    pub fn selected_blocks(&self) -> Vec<BlockPos> {
        self.selection().iter().collect()
    }

    #[inline]
    pub fn min(&self) -> BlockPos {
        self.position1.min(self.position2)
    }

    #[inline]
    pub fn max(&self) -> BlockPos {
        self.position1.max(self.position2)
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        self.selection().center()
    }

    #[inline]
    pub fn show_selection(&self) -> bool {
        self.show_selection
    }

    /// Toggle periodic outline rendering for this session.
    pub fn set_show_selection(&mut self, show: bool) {
        self.show_selection = show;
    }

    #[inline]
    pub fn marker(&self) -> ParticleKind {
        self.marker
    }

    pub fn set_marker(&mut self, marker: ParticleKind) {
        self.marker = marker;
    }
}

impl fmt::Debug for RegionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegionSelector")
            .field("session", &self.session.id())
            .field("position1", &self.position1)
            .field("position2", &self.position2)
            .field("show_selection", &self.show_selection)
            .field("undo_depth", &self.history.len())
            .field("redo_depth", &self.redo.len())
            .finish()
    }
}
