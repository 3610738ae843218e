//! Domain DTOs for the heroes API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// Server-assigned hero identifier.
pub type HeroId = u32;

/// A single hero record returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
}

/// Request payload for creating a new hero. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewHero {
    pub name: String,
}

impl NewHero {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Either a hero or a bare id; delete accepts both and only needs the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroRef<'a> {
    Id(HeroId),
    Hero(&'a Hero),
}

impl HeroRef<'_> {
    pub fn id(&self) -> HeroId {
        match self {
            HeroRef::Id(id) => *id,
            HeroRef::Hero(hero) => hero.id,
        }
    }
}

impl From<HeroId> for HeroRef<'_> {
    fn from(id: HeroId) -> Self {
        HeroRef::Id(id)
    }
}

impl<'a> From<&'a Hero> for HeroRef<'a> {
    fn from(hero: &'a Hero) -> Self {
        HeroRef::Hero(hero)
    }
}
