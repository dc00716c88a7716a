//! Snapshot I/O: byte-level codec plus file save/load wrappers.

pub mod load;
pub mod save;

pub use load::{deserialize_registry, load_league};
pub use save::{save_league, serialize_registry};
