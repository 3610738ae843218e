//! The hero data-access adapter.
//!
//! # Design
//! Every public method maps to exactly one HTTP request. Internally each
//! operation is a `try_*` method returning `Result<_, ApiError>`; the public
//! method is the boundary that applies the error policy:
//!
//! 1. the raw error goes to the `Diagnostics` channel,
//! 2. `"<operation> failed: <error>"` goes to the message log,
//! 3. the caller receives a fallback (`Vec::new()` or `None`).
//!
//! Callers therefore cannot tell "no results" from "request failed" without
//! looking at the log.

use std::future::Future;

use crate::client::HeroClient;
use crate::config::HeroServiceConfig;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, HttpTransport};
use crate::message::MessageSink;
use crate::types::{Hero, HeroId, HeroRef, NewHero};

const LOG_PREFIX: &str = "HeroService: ";

/// Issues heroes requests through `T` and reports outcomes to `M`.
#[derive(Debug, Clone)]
pub struct HeroService<T, M, D = TracingDiagnostics> {
    client: HeroClient,
    transport: T,
    messages: M,
    diagnostics: D,
}

impl<T: HttpTransport, M: MessageSink> HeroService<T, M> {
    pub fn new(config: &HeroServiceConfig, transport: T, messages: M) -> Self {
        Self {
            client: HeroClient::from_config(config),
            transport,
            messages,
            diagnostics: TracingDiagnostics,
        }
    }
}

impl<T: HttpTransport, M: MessageSink, D: Diagnostics> HeroService<T, M, D> {
    /// Replace the diagnostics channel that receives raw errors.
    pub fn with_diagnostics<D2: Diagnostics>(self, diagnostics: D2) -> HeroService<T, M, D2> {
        HeroService {
            client: self.client,
            transport: self.transport,
            messages: self.messages,
            diagnostics,
        }
    }

    pub fn client(&self) -> &HeroClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn messages(&self) -> &M {
        &self.messages
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Fetch the whole collection.
    ///
    /// "fetched heroes" is logged twice on success: once when this method is
    /// called, before the request runs, and once when the response arrives.
    pub fn list_heroes(&self) -> impl Future<Output = Vec<Hero>> + Send + '_ {
        self.log("fetched heroes");
        async move {
            match self.try_list_heroes().await {
                Ok(heroes) => {
                    self.log("fetched heroes");
                    heroes
                }
                Err(error) => self.handle_error("getHeroes", error, Vec::new()),
            }
        }
    }

    pub async fn get_hero(&self, id: HeroId) -> Option<Hero> {
        match self.try_get_hero(id).await {
            Ok(hero) => {
                self.log(&format!("fetched hero id = {id}"));
                Some(hero)
            }
            Err(error) => self.handle_error(&format!("getHero id = {id}"), error, None),
        }
    }

    /// Heroes whose name matches `term`. A blank term returns an empty list
    /// without sending anything or logging.
    pub async fn search_heroes(&self, term: &str) -> Vec<Hero> {
        if term.trim().is_empty() {
            return Vec::new();
        }
        match self.try_search_heroes(term).await {
            Ok(heroes) => {
                if heroes.is_empty() {
                    self.log(&format!("no heroes matching \"{term}\""));
                } else {
                    self.log(&format!("found heroes matching \"{term}\""));
                }
                heroes
            }
            Err(error) => self.handle_error("searchHeroes", error, Vec::new()),
        }
    }

    /// Create a hero; the returned record carries the server-assigned id.
    pub async fn add_hero(&self, hero: &NewHero) -> Option<Hero> {
        match self.try_add_hero(hero).await {
            Ok(created) => {
                self.log(&format!("added hero id = {}", created.id));
                Some(created)
            }
            Err(error) => self.handle_error("addHero", error, None),
        }
    }

    pub async fn update_hero(&self, hero: &Hero) -> Option<()> {
        match self.try_update_hero(hero).await {
            Ok(()) => {
                self.log(&format!("updated hero id = {}", hero.id));
                Some(())
            }
            Err(error) => self.handle_error("updateHero", error, None),
        }
    }

    /// Delete by hero or by id. Yields the deleted record when the server
    /// returns one.
    pub async fn delete_hero<'h>(&self, hero: impl Into<HeroRef<'h>>) -> Option<Hero> {
        let id = hero.into().id();
        match self.try_delete_hero(id).await {
            Ok(deleted) => {
                self.log(&format!("delete hero id = {id}"));
                deleted
            }
            Err(error) => self.handle_error("deleteHero", error, None),
        }
    }

    async fn try_list_heroes(&self) -> Result<Vec<Hero>, ApiError> {
        let response = self.send(self.client.build_list_heroes()).await?;
        self.client.parse_list_heroes(response)
    }

    async fn try_get_hero(&self, id: HeroId) -> Result<Hero, ApiError> {
        let response = self.send(self.client.build_get_hero(id)).await?;
        self.client.parse_get_hero(response)
    }

    async fn try_search_heroes(&self, term: &str) -> Result<Vec<Hero>, ApiError> {
        let response = self.send(self.client.build_search_heroes(term)).await?;
        self.client.parse_search_heroes(response)
    }

    async fn try_add_hero(&self, hero: &NewHero) -> Result<Hero, ApiError> {
        let request = self.client.build_add_hero(hero)?;
        let response = self.send(request).await?;
        self.client.parse_add_hero(response)
    }

    async fn try_update_hero(&self, hero: &Hero) -> Result<(), ApiError> {
        let request = self.client.build_update_hero(hero)?;
        let response = self.send(request).await?;
        self.client.parse_update_hero(response)
    }

    async fn try_delete_hero(&self, id: HeroId) -> Result<Option<Hero>, ApiError> {
        let response = self.send(self.client.build_delete_hero(id)).await?;
        self.client.parse_delete_hero(response)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(method = request.method.as_str(), path = %request.path, "sending request");
        let response = self
            .transport
            .execute(request)
            .await
            .map_err(|e| ApiError::Transport(Box::new(e)))?;
        tracing::debug!(status = response.status, "received response");
        Ok(response)
    }

    fn handle_error<R>(&self, operation: &str, error: ApiError, fallback: R) -> R {
        self.diagnostics.report(&error);
        self.log(&format!("{operation} failed: {error}"));
        fallback
    }

    fn log(&self, message: &str) {
        self.messages.add(format!("{LOG_PREFIX}{message}"));
    }
}
