//! Profile driven RLP codec.
//!
//! A [`Profile`] describes the wire layout of a value as an ordered tree of [`Field`]s,
//! each with a [`Kind`] that owns the canonicalization rules of its scalar. The
//! [`RlpProfiler`] walks a profile to turn a [`Value`] into RLP bytes and back.
mod item;
mod kind;
mod profiler;
mod value;

pub use item::RlpItem;
pub use kind::{Field, Kind};
pub use profiler::{Profile, RlpProfiler};
pub use value::{Object, Value};
