#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use geist_blocks::Block;
use geist_edit::{EmitError, Particle, ParticleEmitter, RegionSelector, Session, SessionId};
use geist_geom::BlockPos;
use geist_world::{BlockStore, BuildRange, SharedWorld, VoxelWorld, WorldGenMode, read_world, share};

pub const STONE: Block = Block { id: 1, state: 0 };
pub const GLASS: Block = Block { id: 7, state: 0 };

pub struct TestSession {
    pub id: SessionId,
    pub world: SharedWorld,
}

impl Session for TestSession {
    fn id(&self) -> SessionId {
        self.id
    }

    fn name(&self) -> &str {
        "tester"
    }

    fn world(&self) -> SharedWorld {
        Arc::clone(&self.world)
    }
}

#[derive(Default)]
pub struct RecordingEmitter {
    pub spawned: Mutex<Vec<(Particle, Vec<SessionId>)>>,
}

impl RecordingEmitter {
    pub fn count(&self) -> usize {
        self.spawned.lock().unwrap().len()
    }
}

impl ParticleEmitter for RecordingEmitter {
    fn spawn(&self, particle: &Particle, audience: &[SessionId]) -> Result<(), EmitError> {
        self.spawned
            .lock()
            .unwrap()
            .push((*particle, audience.to_vec()));
        Ok(())
    }
}

/// Fails after `ok_before` successful spawns.
pub struct FlakyEmitter {
    pub ok_before: usize,
    pub calls: AtomicUsize,
}

impl ParticleEmitter for FlakyEmitter {
    fn spawn(&self, _particle: &Particle, audience: &[SessionId]) -> Result<(), EmitError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        if n >= self.ok_before {
            return Err(EmitError::Disconnected(audience[0]));
        }
        Ok(())
    }
}

/// Tracks how many spawns overlap in time.
#[derive(Default)]
pub struct SlowEmitter {
    pub active: AtomicUsize,
    pub max_active: AtomicUsize,
    pub total: AtomicUsize,
}

impl ParticleEmitter for SlowEmitter {
    fn spawn(&self, _particle: &Particle, _audience: &[SessionId]) -> Result<(), EmitError> {
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_active.fetch_max(now, Ordering::SeqCst);
        thread::sleep(Duration::from_micros(200));
        self.active.fetch_sub(1, Ordering::SeqCst);
        self.total.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub fn empty_world() -> SharedWorld {
    share(VoxelWorld::empty())
}

/// Two layers of stone at y = 0 and 1.
pub fn flat_world() -> SharedWorld {
    share(VoxelWorld::new(
        16,
        BuildRange::new(0, 127),
        WorldGenMode::Flat {
            thickness: 2,
            block: STONE,
        },
    ))
}

pub fn selector_with(
    world: SharedWorld,
    emitter: Arc<dyn ParticleEmitter>,
) -> RegionSelector {
    let session = Arc::new(TestSession {
        id: SessionId(1),
        world,
    });
    RegionSelector::new(session, emitter)
}

pub fn selector(world: SharedWorld) -> (RegionSelector, Arc<RecordingEmitter>) {
    let emitter = Arc::new(RecordingEmitter::default());
    (selector_with(world, emitter.clone()), emitter)
}

pub fn blocks_in(world: &SharedWorld, a: BlockPos, b: BlockPos) -> Vec<(BlockPos, Block)> {
    let w = read_world(world);
    geist_geom::BlockBox::from_corners(a, b)
        .iter()
        .map(|p| (p, w.block(p)))
        .collect()
}

/// The edit every history test performs: snapshot, write, record after-state.
pub fn place(selector: &mut RegionSelector, world: &SharedWorld, at: BlockPos, block: Block) {
    let entry = selector.create_snapshot(at, at, false);
    geist_world::write_world(world).set_block(at, block);
    entry.snapshot(geist_edit::SnapshotPhase::After);
}
