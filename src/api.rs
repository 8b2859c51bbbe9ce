//! PokeAPI client

use std::sync::OnceLock;

use serde::Deserialize;

use crate::state::{CatalogPage, ListItem, PokemonDetail, PokemonStat};

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Environment variable consulted when no `--base-url` flag is given.
pub const BASE_URL_ENV: &str = "POKEDEX_API_URL";

static BASE_URL: OnceLock<String> = OnceLock::new();

/// Pin the base URL for the process. Later calls are ignored; the first
/// caller (startup) wins.
pub fn set_base_url(url: String) {
    let _ = BASE_URL.set(url);
}

fn base_url() -> &'static str {
    BASE_URL.get().map(String::as_str).unwrap_or(DEFAULT_BASE_URL)
}

fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}

/// Fetch failure taxonomy. The UI renders all three identically as a
/// failed state; the split exists for error messages and tests.
#[derive(Debug)]
pub enum ApiError {
    /// The request never completed.
    Request(reqwest::Error),
    /// The server answered with a non-success status.
    Status(reqwest::StatusCode),
    /// The body arrived but did not decode.
    Decode(reqwest::Error),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Request(e) => write!(f, "request failed: {e}"),
            ApiError::Status(status) => write!(f, "server returned {status}"),
            ApiError::Decode(e) => write!(f, "response did not decode: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

// ============================================================================
// Wire shapes
// ============================================================================

#[derive(Debug, Deserialize)]
struct ListResponse {
    count: u32,
    results: Vec<ListEntry>,
    // next/previous cursors are ignored; the pagination controller
    // recomputes offsets itself.
}

#[derive(Debug, Deserialize)]
struct ListEntry {
    name: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct DetailResponse {
    id: u32,
    name: String,
    height: u16,
    weight: u16,
    base_experience: Option<u32>,
    types: Vec<TypeSlot>,
    stats: Vec<StatSlot>,
    sprites: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    #[serde(rename = "type")]
    type_info: NamedResource,
}

#[derive(Debug, Deserialize)]
struct StatSlot {
    base_stat: u16,
    stat: NamedResource,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

// ============================================================================
// Fetch operations
// ============================================================================

/// Fetch one catalog page.
pub async fn fetch_catalog_page(limit: u32, offset: u32) -> Result<CatalogPage, ApiError> {
    let url = format!("{}/pokemon?limit={limit}&offset={offset}", base_url());
    let response: ListResponse = fetch_json(&url).await?;
    Ok(CatalogPage {
        count: response.count,
        results: response
            .results
            .into_iter()
            .map(|entry| ListItem {
                name: entry.name,
                url: entry.url,
            })
            .collect(),
    })
}

/// Fetch the full record for one id.
pub async fn fetch_pokemon_detail(id: &str) -> Result<PokemonDetail, ApiError> {
    let url = format!("{}/pokemon/{id}", base_url());
    let response: DetailResponse = fetch_json(&url).await?;

    let artwork_url = pointer_string(
        &response.sprites,
        "/other/official-artwork/front_default",
    );
    let sprite_url = pointer_string(&response.sprites, "/front_default");

    Ok(PokemonDetail {
        id: response.id,
        name: response.name,
        height: response.height,
        weight: response.weight,
        base_experience: response.base_experience,
        artwork_url,
        sprite_url,
        types: response
            .types
            .into_iter()
            .map(|slot| slot.type_info.name)
            .collect(),
        stats: response
            .stats
            .into_iter()
            .map(|slot| PokemonStat {
                name: slot.stat.name,
                value: slot.base_stat,
            })
            .collect(),
    })
}

async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = http_client()
        .get(url)
        .send()
        .await
        .map_err(ApiError::Request)?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status));
    }
    response.json().await.map_err(ApiError::Decode)
}

fn pointer_string(value: &serde_json::Value, pointer: &str) -> Option<String> {
    value
        .pointer(pointer)
        .and_then(|val| val.as_str())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artwork_pointer_lookup() {
        let sprites = serde_json::json!({
            "front_default": "https://sprites/25.png",
            "other": {
                "official-artwork": {
                    "front_default": "https://artwork/25.png"
                }
            }
        });
        assert_eq!(
            pointer_string(&sprites, "/other/official-artwork/front_default"),
            Some("https://artwork/25.png".to_string())
        );
        assert_eq!(
            pointer_string(&sprites, "/front_default"),
            Some("https://sprites/25.png".to_string())
        );
        assert_eq!(pointer_string(&sprites, "/back_default"), None);
    }

    #[test]
    fn test_list_response_decodes() {
        let body = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"}
            ]
        }"#;
        let decoded: ListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.count, 1302);
        assert_eq!(decoded.results.len(), 1);
        assert_eq!(decoded.results[0].name, "bulbasaur");
    }
}
