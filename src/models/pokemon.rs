//! `GET /pokemon/{name}` detail record

use serde::Deserialize;

use super::NamedResource;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Null for a handful of forms upstream
    pub base_experience: Option<u32>,
    pub height: u32,
    pub weight: u32,
    pub types: Vec<PokemonType>,
    pub stats: Vec<PokemonStat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonType {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub effort: u32,
    pub stat: NamedResource,
}
