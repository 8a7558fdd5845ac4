//! Block values and the named block palette.
#![forbid(unsafe_code)]

pub mod registry;
pub mod types;

pub use registry::{BlockEntry, BlockRegistry};
pub use types::{Block, BlockId, BlockState};
