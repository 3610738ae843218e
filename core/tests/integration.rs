//! Full lifecycle test against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives every `HeroService`
//! operation over real HTTP with `reqwest`. Validates request building,
//! response parsing and the message log end-to-end.

use std::error::Error as _;
use std::sync::Mutex;

use hero_core::{
    cause_chain, ApiError, Diagnostics, Hero, HeroService, HeroServiceConfig, MessageService, NewHero,
};

/// Records, per reported error, whether it still wraps a `reqwest` connect
/// failure, how many causes sit below it, and the rendered chain.
#[derive(Default)]
struct ConnectFailures {
    reports: Mutex<Vec<(bool, usize, String)>>,
}

impl Diagnostics for ConnectFailures {
    fn report(&self, error: &ApiError) {
        let is_connect = error
            .source()
            .and_then(|source| source.downcast_ref::<reqwest::Error>())
            .is_some_and(|e| e.is_connect());
        let mut depth = 0;
        let mut source = error.source();
        while let Some(cause) = source {
            depth += 1;
            source = cause.source();
        }
        self.reports
            .lock()
            .unwrap()
            .push((is_connect, depth, cause_chain(error)));
    }
}

async fn spawn_mock_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { mock_server::run(listener).await });
    format!("http://{addr}")
}

fn service(base_url: &str, log: &MessageService) -> HeroService<reqwest::Client, MessageService> {
    let config = HeroServiceConfig::new(base_url).unwrap();
    HeroService::new(&config, reqwest::Client::new(), log.clone())
}

#[tokio::test]
async fn crud_lifecycle() {
    let base_url = spawn_mock_server().await;
    let log = MessageService::new();
    let heroes = service(&base_url, &log);

    // Step 1: list the seeded roster.
    let all = heroes.list_heroes().await;
    assert_eq!(all.len(), 9);
    assert_eq!(
        log.messages(),
        vec!["HeroService: fetched heroes", "HeroService: fetched heroes"]
    );
    log.clear();

    // Step 2: add a hero; the server assigns the id.
    let created = heroes.add_hero(&NewHero::new("Integration")).await.unwrap();
    assert_eq!(created.name, "Integration");
    assert_eq!(created.id, 21);
    assert_eq!(log.messages(), vec!["HeroService: added hero id = 21"]);

    // Step 3: get it back.
    let fetched = heroes.get_hero(created.id).await;
    assert_eq!(fetched.as_ref(), Some(&created));

    // Step 4: rename it.
    let renamed = Hero {
        id: created.id,
        name: "Renamed".to_string(),
    };
    assert_eq!(heroes.update_hero(&renamed).await, Some(()));
    assert_eq!(heroes.get_hero(created.id).await, Some(renamed.clone()));

    // Step 5: search.
    let found = heroes.search_heroes("renam").await;
    assert_eq!(found, vec![renamed.clone()]);
    assert!(heroes.search_heroes("nobody-has-this-name").await.is_empty());

    // Step 6: delete by hero; the server echoes the record.
    assert_eq!(heroes.delete_hero(&renamed).await, Some(renamed.clone()));

    // Step 7: get after delete falls back to None and logs the failure.
    log.clear();
    assert_eq!(heroes.get_hero(created.id).await, None);
    assert_eq!(
        log.messages(),
        vec!["HeroService: getHero id = 21 failed: resource not found"]
    );

    // Step 8: delete again by id also falls back.
    log.clear();
    assert_eq!(heroes.delete_hero(created.id).await, None);
    assert_eq!(
        log.messages(),
        vec!["HeroService: deleteHero failed: resource not found"]
    );

    // Step 9: roster is back to its seeded size.
    assert_eq!(heroes.list_heroes().await.len(), 9);
}

#[tokio::test]
async fn unreachable_backend_yields_fallbacks() {
    // Bind then drop so the port is very likely closed.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let log = MessageService::new();
    let heroes = service(&format!("http://{addr}"), &log).with_diagnostics(ConnectFailures::default());

    assert!(heroes.list_heroes().await.is_empty());
    assert_eq!(heroes.get_hero(5).await, None);
    assert_eq!(heroes.add_hero(&NewHero::new("Y")).await, None);

    let messages = log.messages();
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0], "HeroService: fetched heroes");
    assert!(messages[1].starts_with("HeroService: getHeroes failed: transport error:"));
    assert!(messages[2].starts_with("HeroService: getHero id = 5 failed: transport error:"));
    assert!(messages[3].starts_with("HeroService: addHero failed: transport error:"));

    let reports = heroes.diagnostics().reports.lock().unwrap();
    assert_eq!(reports.len(), 3);
    for (is_connect, depth, causes) in reports.iter() {
        assert!(is_connect, "diagnostics lost the transport error: {causes}");
        // The reqwest error plus at least one lower-level cause.
        assert!(*depth >= 2, "no underlying cause in {causes:?}");
    }
}
