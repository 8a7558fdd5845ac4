mod common;

use std::sync::Arc;

use common::*;
use geist_edit::{ParticleKind, SelectorRegistry, Session, SessionId};
use geist_geom::BlockPos;

fn session(id: u64) -> Arc<dyn Session> {
    Arc::new(TestSession {
        id: SessionId(id),
        world: empty_world(),
    })
}

#[test]
fn join_lookup_leave() {
    let mut reg = SelectorRegistry::new();
    let emitter = Arc::new(RecordingEmitter::default());
    assert!(reg.is_empty());
    reg.join(session(7), emitter.clone())
        .select(BlockPos::new(1, 1, 1), BlockPos::new(2, 2, 2));
    reg.join(session(3), emitter.clone());
    assert_eq!(reg.len(), 2);
    assert_eq!(reg.session_ids(), vec![SessionId(3), SessionId(7)]);
    assert_eq!(reg[SessionId(7)].position2(), BlockPos::new(2, 2, 2));
    assert!(reg.get(SessionId(9)).is_none());

    let gone = reg.leave(SessionId(7)).unwrap();
    assert_eq!(gone.session_id(), SessionId(7));
    assert!(!reg.contains(SessionId(7)));
    assert!(reg.leave(SessionId(7)).is_none());
}

#[test]
fn rejoin_keeps_existing_selector() {
    let mut reg = SelectorRegistry::new();
    let emitter = Arc::new(RecordingEmitter::default());
    reg.join(session(1), emitter.clone())
        .select_primary(BlockPos::new(4, 4, 4));
    reg.join(session(1), emitter.clone());
    assert_eq!(reg.len(), 1);
    assert_eq!(reg[SessionId(1)].position1(), BlockPos::new(4, 4, 4));
}

#[test]
fn new_selectors_take_registry_defaults() {
    let mut reg = SelectorRegistry::with_defaults(false, ParticleKind(21));
    let emitter = Arc::new(RecordingEmitter::default());
    let sel = reg.join(session(1), emitter);
    assert!(!sel.show_selection());
    assert_eq!(sel.marker(), ParticleKind(21));
}

#[test]
fn refresh_all_renders_visible_sessions() {
    let mut reg = SelectorRegistry::new();
    let emitter = Arc::new(RecordingEmitter::default());
    reg.join(session(1), emitter.clone())
        .select(BlockPos::new(0, 0, 0), BlockPos::new(1, 0, 1));
    reg.join(session(2), emitter.clone());
    let hidden = reg.join(session(3), emitter.clone());
    hidden.select(BlockPos::new(0, 0, 0), BlockPos::new(1, 0, 1));
    hidden.set_show_selection(false);

    assert_eq!(reg.refresh_all(), 12);
    assert_eq!(emitter.count(), 12);
    let spawned = emitter.spawned.lock().unwrap();
    assert!(spawned.iter().all(|(_, who)| who == &vec![SessionId(1)]));
}

#[test]
fn index_mut_reaches_selector() {
    let mut reg = SelectorRegistry::new();
    reg.join(session(5), Arc::new(RecordingEmitter::default()));
    reg[SessionId(5)].select_secondary(BlockPos::new(-1, 0, 0));
    assert_eq!(reg[SessionId(5)].min(), BlockPos::new(-1, 0, 0));
}

#[test]
#[should_panic(expected = "no selector registered")]
fn index_before_join_panics() {
    let reg = SelectorRegistry::new();
    let _ = &reg[SessionId(99)];
}
