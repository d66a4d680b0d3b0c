//! Per-tick caching of state machine answers.

pub mod cached;
pub mod ttl;

pub use cached::CachedStateMachine;
pub use ttl::TtlCache;
