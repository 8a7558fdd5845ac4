//! Per-session region selection, undo/redo history, and selection outlines.
#![forbid(unsafe_code)]

mod display;
mod history;
mod particles;
mod registry;
mod selector;
mod session;

pub use display::{DisplayOutcome, RenderGuard, outline};
pub use history::{HistoryEntry, SnapshotPhase};
pub use particles::{EmitError, Particle, ParticleEmitter, ParticleKind};
pub use registry::SelectorRegistry;
pub use selector::RegionSelector;
pub use session::{Session, SessionId};
