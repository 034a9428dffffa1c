//! Times standard list, map and set backings against each other.
//!
//! Each family has a facade ([`ListCollection`], [`MapCollection`],
//! [`SetCollection`]) over interchangeable backings picked by a kind enum,
//! and a driver that seeds a facade per backing and times one operation.
//! The `list_bench`, `map_bench` and `set_bench` binaries wrap the drivers
//! in an interactive prompt.

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod mapping;
pub mod record;
pub mod sequence;
pub mod set;
pub mod timer;

pub use config::BenchConfig;
pub use error::{Error, Result};
pub use mapping::{MapCollection, MapKind, Mapping};
pub use record::{Person, TaggedPerson};
pub use sequence::{ListCollection, Sequence, SequenceKind, SyncVec};
pub use set::{Set, SetCollection, SetKind};
