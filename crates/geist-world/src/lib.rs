//! World storage: the block store contract and an in-memory chunked world.
#![forbid(unsafe_code)]

mod chunk_coord;
pub mod config;
mod store;
mod world;

pub use chunk_coord::ChunkCoord;
pub use config::WorldConfig;
pub use store::{BlockStore, BuildRange, SharedWorld, read_world, share, write_world};
pub use world::{VoxelWorld, WorldGenMode, WorldStats};

pub const DEFAULT_CHUNK_SIZE: i32 = 32;
