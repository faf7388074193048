//! Models Module
//!
//! Record shapes returned by the PokeAPI endpoints the client consumes.
//! Field names follow the upstream JSON; unknown fields are ignored.

mod location;
mod pokemon;

pub use location::{LocationAreaDetail, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
