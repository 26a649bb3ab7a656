#![allow(dead_code)]

use axum_test::TestServer;
use std::sync::Arc;
use twinlink::application::services::{LinkService, LinkSettings, RedirectService};
use twinlink::domain::entities::AliasRecord;
use twinlink::domain::repositories::{CanonicalRepository, RedirectionRepository};
use twinlink::infrastructure::persistence::MemoryStore;
use twinlink::routes::routes;
use twinlink::state::AppState;

pub const DOMAIN: &str = "s.example.com";
pub const EXPIRATION_TIME: u64 = 60;
/// TTL for tests that wait for entries to expire.
pub const SHORT_TTL: u64 = 2;

pub fn test_settings(expiration_time: u64) -> LinkSettings {
    LinkSettings {
        expiration_time,
        bot_length: 8,
        human_length: 3,
        collision_fix_times: 4,
        domain: DOMAIN.to_string(),
    }
}

pub fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state =
        AppState::new(store.clone(), store.clone(), test_settings(EXPIRATION_TIME)).unwrap();
    (state, store)
}

pub fn create_test_server() -> (TestServer, Arc<MemoryStore>) {
    let (state, store) = create_test_state();
    let server = TestServer::new(routes(state)).unwrap();
    (server, store)
}

pub fn link_service<R>(
    store: &Arc<MemoryStore>,
    redirection: Arc<R>,
    ttl: u64,
) -> LinkService<MemoryStore, R>
where
    R: RedirectionRepository + ?Sized,
{
    LinkService::new(store.clone(), redirection, test_settings(ttl)).unwrap()
}

pub fn redirect_service(
    store: &Arc<MemoryStore>,
    ttl: u64,
) -> RedirectService<MemoryStore, MemoryStore> {
    RedirectService::new(store.clone(), store.clone(), ttl)
}

pub async fn record_for(store: &MemoryStore, long_url: &str) -> Option<AliasRecord> {
    CanonicalRepository::get(store, long_url).await.unwrap()
}

pub async fn target_of(store: &MemoryStore, alias: &str) -> Option<String> {
    RedirectionRepository::get(store, alias).await.unwrap()
}
