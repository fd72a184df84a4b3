//! Multi-signal search primitives.

pub mod rrf;

pub use rrf::fuse;
