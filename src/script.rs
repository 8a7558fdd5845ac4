//! Edit scripts: a TOML list of session actions replayed against one world.

use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use geist_blocks::BlockRegistry;
use geist_edit::{DisplayOutcome, SelectorRegistry, SessionId, SnapshotPhase};
use geist_geom::BlockPos;
use geist_world::{SharedWorld, VoxelWorld, share, write_world};
use serde::Deserialize;

use crate::config::BuilderConfig;
use crate::console::{ConsoleEmitter, ConsoleSession};

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Script {
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Join { session: String },
    Leave { session: String },
    Pos1 { session: String, at: [i32; 3] },
    Pos2 { session: String, at: [i32; 3] },
    Select { session: String, pos1: [i32; 3], pos2: [i32; 3] },
    /// Single block edit wrapped in before/after snapshots.
    Set { session: String, at: [i32; 3], block: String },
    Undo { session: String },
    Redo { session: String },
    ClearHistory { session: String },
    ShowSelection { session: String, enabled: bool },
    /// Periodic outline refresh for all sessions.
    Tick,
}

impl Script {
    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)
            .map_err(|e| format!("failed to read script {}: {}", path.display(), e))?;
        Self::from_toml_str(&s)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("step {step}: unknown session '{name}'")]
    UnknownSession { step: usize, name: String },

    #[error("step {step}: unknown block '{name}'")]
    UnknownBlock { step: usize, name: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionReport {
    pub name: String,
    pub undo_depth: usize,
    pub redo_depth: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub steps: usize,
    pub particles: usize,
    pub sessions: Vec<SessionReport>,
}

/// Owns the world, the block palette, and every joined session's selector.
pub struct Runner {
    world: SharedWorld,
    blocks: BlockRegistry,
    selectors: SelectorRegistry,
    emitter: Arc<ConsoleEmitter>,
    sessions: HashMap<String, SessionId>,
    next_id: u64,
}

impl Runner {
    pub fn new(cfg: &BuilderConfig) -> Result<Self, Box<dyn Error>> {
        let blocks = cfg.block_registry();
        let world = VoxelWorld::from_config(&cfg.world, &blocks)?;
        Ok(Self {
            world: share(world),
            blocks,
            selectors: SelectorRegistry::with_defaults(cfg.display.show_selection, cfg.marker()),
            emitter: Arc::new(ConsoleEmitter::default()),
            sessions: HashMap::new(),
            next_id: 1,
        })
    }

    #[inline]
    pub fn world(&self) -> &SharedWorld {
        &self.world
    }

    #[inline]
    pub fn selectors(&self) -> &SelectorRegistry {
        &self.selectors
    }

    pub fn run(&mut self, script: &Script) -> Result<RunReport, ScriptError> {
        for (i, step) in script.steps.iter().enumerate() {
            self.apply(i + 1, step)?;
        }
        let mut sessions: Vec<SessionReport> = self
            .sessions
            .iter()
            .filter_map(|(name, id)| {
                self.selectors.get(*id).map(|s| SessionReport {
                    name: name.clone(),
                    undo_depth: s.undo_depth(),
                    redo_depth: s.redo_depth(),
                })
            })
            .collect();
        sessions.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(RunReport {
            steps: script.steps.len(),
            particles: self.emitter.emitted(),
            sessions,
        })
    }

    fn session_id(&self, step: usize, name: &str) -> Result<SessionId, ScriptError> {
        self.sessions
            .get(name)
            .copied()
            .ok_or_else(|| ScriptError::UnknownSession {
                step,
                name: name.to_string(),
            })
    }

    fn apply(&mut self, step: usize, action: &Step) -> Result<(), ScriptError> {
        log::debug!("step {}: {:?}", step, action);
        match action {
            Step::Join { session } => {
                let id = match self.sessions.get(session) {
                    Some(id) => *id,
                    None => {
                        let id = SessionId(self.next_id);
                        self.next_id += 1;
                        self.sessions.insert(session.clone(), id);
                        id
                    }
                };
                let handle = Arc::new(ConsoleSession::new(id, session.clone(), Arc::clone(&self.world)));
                self.selectors.join(handle, self.emitter.clone());
                log::info!("{} joined as {}", session, id);
            }
            Step::Leave { session } => {
                let id = self.session_id(step, session)?;
                self.sessions.remove(session);
                self.selectors.leave(id);
                log::info!("{} left", session);
            }
            Step::Pos1 { session, at } => {
                let id = self.session_id(step, session)?;
                self.selectors[id].select_primary(BlockPos::from(*at));
            }
            Step::Pos2 { session, at } => {
                let id = self.session_id(step, session)?;
                self.selectors[id].select_secondary(BlockPos::from(*at));
            }
            Step::Select { session, pos1, pos2 } => {
                let id = self.session_id(step, session)?;
                let sel = &mut self.selectors[id];
                sel.select(BlockPos::from(*pos1), BlockPos::from(*pos2));
                log::info!(
                    "{} selected {} block(s) around {:?}",
                    session,
                    sel.selection().volume(),
                    sel.center()
                );
            }
            Step::Set { session, at, block } => {
                let id = self.session_id(step, session)?;
                let b = self.blocks.get(block).ok_or_else(|| ScriptError::UnknownBlock {
                    step,
                    name: block.clone(),
                })?;
                let at = BlockPos::from(*at);
                let entry = self.selectors[id].create_snapshot(at, at, false);
                write_world(entry.world()).set_block(at, b);
                entry.snapshot(SnapshotPhase::After);
            }
            Step::Undo { session } => {
                let id = self.session_id(step, session)?;
                if !self.selectors[id].undo() {
                    log::info!("{}: nothing to undo", session);
                }
            }
            Step::Redo { session } => {
                let id = self.session_id(step, session)?;
                if !self.selectors[id].redo() {
                    log::info!("{}: nothing to redo", session);
                }
            }
            Step::ClearHistory { session } => {
                let id = self.session_id(step, session)?;
                self.selectors[id].clear_history();
            }
            Step::ShowSelection { session, enabled } => {
                let id = self.session_id(step, session)?;
                let sel = &mut self.selectors[id];
                sel.set_show_selection(*enabled);
                if let DisplayOutcome::Failed { emitted } = sel.display_selection(true) {
                    log::warn!("{}: outline stopped after {} particle(s)", session, emitted);
                }
            }
            Step::Tick => {
                let n = self.selectors.refresh_all();
                log::debug!("tick drew {} particle(s)", n);
            }
        }
        Ok(())
    }
}
