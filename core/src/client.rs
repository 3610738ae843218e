//! Stateless HTTP request builder and response parser for the heroes API.
//!
//! # Design
//! `HeroClient` holds only the collection URL and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. `HeroService` runs the round-trip in between.

use serde::de::DeserializeOwned;

use crate::config::HeroServiceConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Hero, HeroId, NewHero};

/// Stateless client for the heroes API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct HeroClient {
    heroes_url: String,
}

impl HeroClient {
    pub fn from_config(config: &HeroServiceConfig) -> Self {
        Self {
            heroes_url: config.heroes_url(),
        }
    }

    pub fn heroes_url(&self) -> &str {
        &self.heroes_url
    }

    pub fn build_list_heroes(&self) -> HttpRequest {
        self.get(self.heroes_url.clone())
    }

    pub fn build_get_hero(&self, id: HeroId) -> HttpRequest {
        self.get(format!("{}/{id}", self.heroes_url))
    }

    /// The term goes into the query string as-is; callers pre-encode it.
    pub fn build_search_heroes(&self, term: &str) -> HttpRequest {
        self.get(format!("{}/?name={term}", self.heroes_url))
    }

    pub fn build_add_hero(&self, hero: &NewHero) -> Result<HttpRequest, ApiError> {
        self.json(HttpMethod::Post, hero)
    }

    /// The server locates the record by the id in the body, so the URL is the
    /// collection itself.
    pub fn build_update_hero(&self, hero: &Hero) -> Result<HttpRequest, ApiError> {
        self.json(HttpMethod::Put, hero)
    }

    pub fn build_delete_hero(&self, id: HeroId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/{id}", self.heroes_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_heroes(&self, response: HttpResponse) -> Result<Vec<Hero>, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_get_hero(&self, response: HttpResponse) -> Result<Hero, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_search_heroes(&self, response: HttpResponse) -> Result<Vec<Hero>, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_add_hero(&self, response: HttpResponse) -> Result<Hero, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    /// The update payload is opaque; only the status matters.
    pub fn parse_update_hero(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    /// Returns the deleted record when the server echoes it, `None` for an
    /// empty body.
    pub fn parse_delete_hero(&self, response: HttpResponse) -> Result<Option<Hero>, ApiError> {
        check_status(&response)?;
        let body = response.body.trim();
        if body.is_empty() || body == "null" {
            return Ok(None);
        }
        decode(body).map(Some)
    }

    fn get(&self, path: String) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    fn json<T: serde::Serialize>(&self, method: HttpMethod, payload: &T) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(payload).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path: self.heroes_url.clone(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}
