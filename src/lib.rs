//! Pokedex - an interactive PokeAPI client
//!
//! Responses are kept in an in-memory cache whose entries a background
//! reaper removes once they reach a fixed age.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use cache::ExpiringCache;
pub use client::PokeApiClient;
pub use config::Config;
pub use repl::Session;
