use std::fmt;

use geist_world::SharedWorld;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A connected player. Identity keys the selector registry.
pub trait Session: Send + Sync {
    fn id(&self) -> SessionId;

    fn name(&self) -> &str;

    /// World the session currently stands in; snapshots are taken from here.
    fn world(&self) -> SharedWorld;
}
