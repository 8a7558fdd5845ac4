//! Headless collaborators: sessions without a client and a log-backed particle sink.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use geist_edit::{EmitError, Particle, ParticleEmitter, Session, SessionId};
use geist_world::SharedWorld;

pub struct ConsoleSession {
    id: SessionId,
    name: String,
    world: SharedWorld,
}

impl ConsoleSession {
    pub fn new(id: SessionId, name: impl Into<String>, world: SharedWorld) -> Self {
        Self {
            id,
            name: name.into(),
            world,
        }
    }
}

impl Session for ConsoleSession {
    fn id(&self) -> SessionId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn world(&self) -> SharedWorld {
        Arc::clone(&self.world)
    }
}

/// Writes every particle to the `particles` log target.
#[derive(Default)]
pub struct ConsoleEmitter {
    emitted: AtomicUsize,
}

impl ConsoleEmitter {
    pub fn emitted(&self) -> usize {
        self.emitted.load(Ordering::Relaxed)
    }
}

impl ParticleEmitter for ConsoleEmitter {
    fn spawn(&self, particle: &Particle, audience: &[SessionId]) -> Result<(), EmitError> {
        let p = particle.position;
        log::trace!(target: "particles", "kind={} at ({:.1}, {:.1}, {:.1}) for {:?}",
            particle.kind.0, p.x, p.y, p.z, audience);
        self.emitted.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
