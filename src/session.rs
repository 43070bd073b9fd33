//! Server-held state of the weekly planning workflow.
//!
//! Each browser gets an opaque id in an `HttpOnly` cookie; the store keeps
//! the ingredient selection and the last search results under that id.
//! Entries idle for longer than the TTL are invisible to readers and get
//! dropped by a periodic sweep.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use serde_json::Value;
use tokio::{sync::RwLock, task::JoinHandle};
use ulid::Ulid;

pub const SESSION_COOKIE: &str = "weekmenu_session";

#[derive(Debug, Default, Clone, PartialEq)]
pub struct WorkflowState {
    pub selected_ids: Vec<String>,
    pub results: Vec<Value>,
}

#[derive(Debug)]
struct Entry {
    state: WorkflowState,
    touched_at: Instant,
}

#[derive(Clone)]
pub struct WorkflowStore {
    entries: Arc<RwLock<HashMap<String, Entry>>>,
    ttl: Duration,
}

impl WorkflowStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::default(),
            ttl,
        }
    }

    fn is_live(&self, entry: &Entry, now: Instant) -> bool {
        now.duration_since(entry.touched_at) <= self.ttl
    }

    pub async fn get(&self, session_id: &str) -> Option<WorkflowState> {
        let entries = self.entries.read().await;
        let entry = entries.get(session_id)?;

        self.is_live(entry, Instant::now())
            .then(|| entry.state.clone())
    }

    /// Applies `f` to the session state, starting from an empty state when
    /// the session is unknown or expired.
    pub async fn update<F>(&self, session_id: &str, f: F)
    where
        F: FnOnce(&mut WorkflowState),
    {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let entry = entries
            .entry(session_id.to_owned())
            .or_insert_with(|| Entry {
                state: WorkflowState::default(),
                touched_at: now,
            });

        if now.duration_since(entry.touched_at) > self.ttl {
            entry.state = WorkflowState::default();
        }

        f(&mut entry.state);
        entry.touched_at = now;
    }

    /// Replaces the selection. Previous search results stay until the next
    /// search overwrites them.
    pub async fn select(&self, session_id: &str, ids: Vec<String>) {
        self.update(session_id, |state| state.selected_ids = ids)
            .await
    }

    pub async fn store_results(&self, session_id: &str, results: Vec<Value>) {
        self.update(session_id, |state| state.results = results)
            .await
    }

    /// Drops expired entries and returns how many were removed.
    pub async fn sweep(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| self.is_live(entry, now));

        before - entries.len()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub fn spawn_sweeper(&self, interval: Duration) -> JoinHandle<()> {
        let store = self.clone();

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.tick().await;

            loop {
                ticker.tick().await;
                let removed = store.sweep().await;
                if removed > 0 {
                    tracing::debug!(removed, "expired workflow sessions swept");
                }
            }
        })
    }
}

/// Session id from the cookie jar, if the browser sent one.
pub fn session_id(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_owned())
        .filter(|value| !value.is_empty())
}

/// Session id from the cookie jar, issuing a new cookie when missing.
pub fn ensure_session(jar: CookieJar) -> (CookieJar, String) {
    if let Some(id) = session_id(&jar) {
        return (jar, id);
    }

    let id = Ulid::new().to_string();
    let cookie = Cookie::build((SESSION_COOKIE, id.to_owned()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    (jar.add(cookie), id)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_select_then_store_results() {
        let store = WorkflowStore::new(Duration::from_secs(60));

        assert_eq!(store.get("a").await, None);

        store.select("a", vec!["1".to_owned(), "2".to_owned()]).await;
        store.store_results("a", vec![json!({"recipeId": 1})]).await;
        store.select("b", vec!["3".to_owned()]).await;

        let state = store.get("a").await.unwrap();
        assert_eq!(state.selected_ids, vec!["1", "2"]);
        assert_eq!(state.results.len(), 1);

        store.select("a", vec!["9".to_owned()]).await;
        let state = store.get("a").await.unwrap();
        assert_eq!(state.selected_ids, vec!["9"]);
        assert_eq!(state.results.len(), 1);

        assert_eq!(store.get("b").await.unwrap().selected_ids, vec!["3"]);
    }

    #[tokio::test]
    async fn test_expired_sessions_are_hidden_and_swept() {
        let store = WorkflowStore::new(Duration::from_millis(50));

        store.select("old", vec!["1".to_owned()]).await;
        tokio::time::sleep(Duration::from_millis(120)).await;
        store.select("new", vec!["2".to_owned()]).await;

        assert_eq!(store.get("old").await, None);
        assert!(store.get("new").await.is_some());

        assert_eq!(store.sweep().await, 1);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_expired_session_restarts_empty() {
        let store = WorkflowStore::new(Duration::from_millis(50));

        store.select("a", vec!["1".to_owned()]).await;
        store.store_results("a", vec![json!({})]).await;
        tokio::time::sleep(Duration::from_millis(120)).await;

        store.store_results("a", vec![]).await;
        let state = store.get("a").await.unwrap();
        assert!(state.selected_ids.is_empty());
    }

    #[test]
    fn test_ensure_session_issues_cookie_once() {
        let (jar, id) = ensure_session(CookieJar::new());
        let cookie = jar.get(SESSION_COOKIE).unwrap();

        assert_eq!(cookie.value(), id);
        assert_eq!(cookie.http_only(), Some(true));

        let (_, same) = ensure_session(jar);
        assert_eq!(same, id);
    }
}
