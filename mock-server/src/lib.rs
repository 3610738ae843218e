use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hero {
    pub id: u32,
    pub name: String,
}

#[derive(Deserialize)]
pub struct NewHero {
    pub name: String,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
}

pub type Db = Arc<RwLock<BTreeMap<u32, Hero>>>;

/// Ids handed out when the store is empty start here.
const FIRST_ID: u32 = 11;

pub fn default_heroes() -> Vec<Hero> {
    [
        (12, "Dr. Nice"),
        (13, "Bombasto"),
        (14, "Celeritas"),
        (15, "Magneta"),
        (16, "RubberMan"),
        (17, "Dynama"),
        (18, "Dr. IQ"),
        (19, "Magma"),
        (20, "Tornado"),
    ]
    .into_iter()
    .map(|(id, name)| Hero {
        id,
        name: name.to_string(),
    })
    .collect()
}

/// Router seeded with the default roster.
pub fn app() -> Router {
    app_with_heroes(default_heroes())
}

pub fn app_with_heroes(heroes: Vec<Hero>) -> Router {
    let db: Db = Arc::new(RwLock::new(
        heroes.into_iter().map(|hero| (hero.id, hero)).collect(),
    ));
    Router::new()
        .route(
            "/api/heroes",
            get(list_heroes).post(add_hero).put(update_hero),
        )
        .route("/api/heroes/", get(list_heroes))
        .route("/api/heroes/{id}", get(get_hero).delete(delete_hero))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Lists every hero, or those whose name contains `?name=` ignoring case.
async fn list_heroes(
    State(db): State<Db>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Hero>> {
    let heroes = db.read().await;
    let needle = params.name.map(|n| n.to_lowercase());
    Json(
        heroes
            .values()
            .filter(|hero| match &needle {
                Some(needle) => hero.name.to_lowercase().contains(needle.as_str()),
                None => true,
            })
            .cloned()
            .collect(),
    )
}

/// Assigns `max(id) + 1`. Answers 409 once the id space is exhausted.
async fn add_hero(
    State(db): State<Db>,
    Json(input): Json<NewHero>,
) -> Result<(StatusCode, Json<Hero>), StatusCode> {
    let mut heroes = db.write().await;
    let id = match heroes.keys().next_back() {
        Some(max) => max.checked_add(1).ok_or(StatusCode::CONFLICT)?,
        None => FIRST_ID,
    };
    let hero = Hero {
        id,
        name: input.name,
    };
    heroes.insert(id, hero.clone());
    tracing::debug!(id, name = %hero.name, "hero added");
    Ok((StatusCode::CREATED, Json(hero)))
}

async fn get_hero(
    State(db): State<Db>,
    Path(id): Path<u32>,
) -> Result<Json<Hero>, StatusCode> {
    let heroes = db.read().await;
    heroes.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_hero(
    State(db): State<Db>,
    Json(input): Json<Hero>,
) -> StatusCode {
    let mut heroes = db.write().await;
    match heroes.get_mut(&input.id) {
        Some(hero) => {
            hero.name = input.name;
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_hero(
    State(db): State<Db>,
    Path(id): Path<u32>,
) -> Result<Json<Hero>, StatusCode> {
    let mut heroes = db.write().await;
    heroes.remove(&id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_serializes_to_json() {
        let hero = Hero {
            id: 12,
            name: "Dr. Nice".to_string(),
        };
        let json = serde_json::to_value(&hero).unwrap();
        assert_eq!(json["id"], 12);
        assert_eq!(json["name"], "Dr. Nice");
    }

    #[test]
    fn new_hero_ignores_client_supplied_id() {
        let input: NewHero = serde_json::from_str(r#"{"id":99,"name":"Sneaky"}"#).unwrap();
        assert_eq!(input.name, "Sneaky");
    }

    #[test]
    fn new_hero_rejects_missing_name() {
        let result: Result<NewHero, _> = serde_json::from_str(r#"{}"#);
        assert!(result.is_err());
    }

    #[test]
    fn default_roster_has_unique_ids() {
        let heroes = default_heroes();
        let ids: std::collections::BTreeSet<u32> = heroes.iter().map(|h| h.id).collect();
        assert_eq!(ids.len(), heroes.len());
        assert_eq!(ids.first(), Some(&12));
        assert_eq!(ids.last(), Some(&20));
    }
}
