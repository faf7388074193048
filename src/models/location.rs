//! Location area records
//!
//! The paginated `location-area` listing and a single area's encounters.

use serde::Deserialize;

/// A `{ name, url }` reference to another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of `GET /location-area`.
///
/// `next` and `previous` are full URLs of the neighbouring pages, or null at
/// either end of the listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocationAreaPage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// `GET /location-area/{name}`, reduced to the creatures found there.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocationAreaDetail {
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

impl LocationAreaDetail {
    /// Names of every creature encountered in the area, in API order.
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_has_null_previous() {
        let json = r#"{
            "count": 1089,
            "next": "https://pokeapi.co/api/v2/location-area?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"},
                {"name": "eterna-city-area", "url": "https://pokeapi.co/api/v2/location-area/2/"}
            ]
        }"#;

        let page: LocationAreaPage = serde_json::from_str(json).unwrap();

        assert_eq!(page.count, 1089);
        assert!(page.next.is_some());
        assert_eq!(page.previous, None);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].name, "canalave-city-area");
    }

    #[test]
    fn test_last_page_has_null_next() {
        let json = r#"{"count": 1, "next": null, "previous": "https://x/prev", "results": []}"#;

        let page: LocationAreaPage = serde_json::from_str(json).unwrap();

        assert_eq!(page.next, None);
        assert_eq!(page.previous.as_deref(), Some("https://x/prev"));
    }

    #[test]
    fn test_area_detail_ignores_unknown_fields() {
        let json = r#"{
            "id": 1,
            "name": "canalave-city-area",
            "encounter_method_rates": [],
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "u1"}, "version_details": []},
                {"pokemon": {"name": "tentacruel", "url": "u2"}, "version_details": []}
            ]
        }"#;

        let detail: LocationAreaDetail = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = detail.pokemon_names().collect();

        assert_eq!(names, vec!["tentacool", "tentacruel"]);
    }

    #[test]
    fn test_page_missing_results_fails() {
        let json = r#"{"count": 1, "next": null, "previous": null}"#;
        assert!(serde_json::from_str::<LocationAreaPage>(json).is_err());
    }
}
