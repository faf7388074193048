//! Cache Module
//!
//! Provides an in-memory response cache whose entries are removed by a
//! background reaper once they reach a fixed age.

mod entry;
mod expiring;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use expiring::ExpiringCache;
pub use stats::CacheStats;
pub use store::CacheStore;
