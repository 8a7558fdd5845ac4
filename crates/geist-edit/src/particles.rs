use geist_geom::Vec3;

use crate::SessionId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParticleKind(pub u16);

impl ParticleKind {
    /// Marker used for selection outlines unless configured otherwise.
    pub const SELECTION: ParticleKind = ParticleKind(10);
}

impl Default for ParticleKind {
    fn default() -> Self {
        Self::SELECTION
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub kind: ParticleKind,
    pub position: Vec3,
}

impl Particle {
    #[inline]
    pub const fn new(kind: ParticleKind, position: Vec3) -> Self {
        Self { kind, position }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("session {0} is not connected")]
    Disconnected(SessionId),
}

/// Renders point particles for a chosen audience only.
pub trait ParticleEmitter: Send + Sync {
    fn spawn(&self, particle: &Particle, audience: &[SessionId]) -> Result<(), EmitError>;
}
