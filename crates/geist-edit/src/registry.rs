use std::ops::{Index, IndexMut};
use std::sync::Arc;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::{ParticleEmitter, ParticleKind, RegionSelector, Session, SessionId};

/// Session → selector table. Insert on join, remove on leave.
pub struct SelectorRegistry {
    selectors: HashMap<SessionId, RegionSelector>,
    show_selection: bool,
    marker: ParticleKind,
}

impl Default for SelectorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectorRegistry {
    pub fn new() -> Self {
        Self::with_defaults(true, ParticleKind::SELECTION)
    }

    /// Registry whose new selectors start with the given outline settings.
    pub fn with_defaults(show_selection: bool, marker: ParticleKind) -> Self {
        Self {
            selectors: HashMap::new(),
            show_selection,
            marker,
        }
    }

    /// Register a selector for `session`. A session already present keeps its selector.
    pub fn join(
        &mut self,
        session: Arc<dyn Session>,
        emitter: Arc<dyn ParticleEmitter>,
    ) -> &mut RegionSelector {
        let id = session.id();
        match self.selectors.entry(id) {
            Entry::Occupied(e) => {
                log::warn!("session {} ({}) joined twice; keeping its selector", id, session.name());
                e.into_mut()
            }
            Entry::Vacant(e) => {
                log::debug!("selector created for session {} ({})", id, session.name());
                let mut selector = RegionSelector::new(session, emitter);
                selector.set_show_selection(self.show_selection);
                selector.set_marker(self.marker);
                e.insert(selector)
            }
        }
    }

    /// Drop the session's selector along with its history.
    pub fn leave(&mut self, id: SessionId) -> Option<RegionSelector> {
        let removed = self.selectors.remove(&id);
        if removed.is_some() {
            log::debug!("selector discarded for session {}", id);
        }
        removed
    }

    #[inline]
    pub fn get(&self, id: SessionId) -> Option<&RegionSelector> {
        self.selectors.get(&id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: SessionId) -> Option<&mut RegionSelector> {
        self.selectors.get_mut(&id)
    }

    #[inline]
    pub fn contains(&self, id: SessionId) -> bool {
        self.selectors.contains_key(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    pub fn session_ids(&self) -> Vec<SessionId> {
        let mut ids: Vec<_> = self.selectors.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Periodic outline pass over every session. Returns the particles emitted.
    pub fn refresh_all(&self) -> usize {
        self.selectors
            .values()
            .map(|s| s.display_selection(false).emitted())
            .sum()
    }
}

impl Index<SessionId> for SelectorRegistry {
    type Output = RegionSelector;

    /// Panics if the session never joined.
    fn index(&self, id: SessionId) -> &RegionSelector {
        match self.selectors.get(&id) {
            Some(s) => s,
            None => panic!("no selector registered for session {id}"),
        }
    }
}

impl IndexMut<SessionId> for SelectorRegistry {
    fn index_mut(&mut self, id: SessionId) -> &mut RegionSelector {
        match self.selectors.get_mut(&id) {
            Some(s) => s,
            None => panic!("no selector registered for session {id}"),
        }
    }
}
