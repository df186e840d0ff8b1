//! Platform abstraction layer
//!
//! The core reaches the outside world only through these seams:
//! - Storage (LocalStorage on web, in-memory elsewhere)
//! - Frame scheduling (requestAnimationFrame on web, manual stepping elsewhere)

pub mod frame;
pub mod storage;

pub use frame::{FrameScheduler, LoopHandle, ManualScheduler};
pub use storage::{KeyValueStore, MemoryStore};

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
