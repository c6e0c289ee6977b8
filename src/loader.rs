//! Session-Gated Loading
//!
//! Nothing is fetched until a session is available. Without one the load
//! is a silent no-op; a failed fetch is logged and otherwise ignored.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{Post, Session};

/// Something that can hand out the current session, if any
#[async_trait(?Send)]
pub trait SessionSource {
    async fn current_session(&self) -> Option<Session>;
}

/// Something that can list the visible posts
#[async_trait(?Send)]
pub trait PostSource {
    async fn visible_posts(&self, session: &Session) -> Result<Vec<Post>, ApiError>;
}

#[derive(Debug)]
pub enum LoadOutcome<T> {
    NoSession,
    Loaded(T),
    Failed(ApiError),
}

impl<T> LoadOutcome<T> {
    /// Unwrap a successful load, logging the other outcomes under `what`
    pub fn into_loaded(self, what: &str) -> Option<T> {
        match self {
            LoadOutcome::Loaded(value) => Some(value),
            LoadOutcome::NoSession => {
                log::debug!("[LOADER] No session, skipped loading {}", what);
                None
            }
            LoadOutcome::Failed(e) => {
                log::error!("[LOADER] Error fetching {}: {}", what, e);
                None
            }
        }
    }
}

/// Run `fetch` only when a session exists
pub async fn load_with_session<S, F, Fut, T>(sessions: &S, fetch: F) -> LoadOutcome<T>
where
    S: SessionSource,
    F: FnOnce(Session) -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let Some(session) = sessions.current_session().await else {
        return LoadOutcome::NoSession;
    };
    match fetch(session).await {
        Ok(value) => LoadOutcome::Loaded(value),
        Err(e) => LoadOutcome::Failed(e),
    }
}

/// Tags successive loads so only the newest one may apply its result
#[derive(Debug, Clone, Default)]
pub struct LoadGeneration(Arc<AtomicU64>);

impl LoadGeneration {
    /// Start a load; earlier tickets stop being current
    pub fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.load(Ordering::SeqCst) == ticket
    }
}

/// Load the post list shown on mount
pub async fn load_visible_posts<S, P>(sessions: &S, posts: &P) -> LoadOutcome<Vec<Post>>
where
    S: SessionSource,
    P: PostSource,
{
    load_with_session(sessions, |session| async move { posts.visible_posts(&session).await }).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PostId;
    use futures::executor::block_on;
    use std::cell::Cell;

    struct FakeSessions(Option<Session>);

    #[async_trait(?Send)]
    impl SessionSource for FakeSessions {
        async fn current_session(&self) -> Option<Session> {
            self.0.clone()
        }
    }

    struct FakePosts {
        result: fn() -> Result<Vec<Post>, ApiError>,
        calls: Cell<u32>,
        seen_token: Cell<Option<&'static str>>,
    }

    impl FakePosts {
        fn new(result: fn() -> Result<Vec<Post>, ApiError>) -> Self {
            Self {
                result,
                calls: Cell::new(0),
                seen_token: Cell::new(None),
            }
        }
    }

    #[async_trait(?Send)]
    impl PostSource for FakePosts {
        async fn visible_posts(&self, session: &Session) -> Result<Vec<Post>, ApiError> {
            self.calls.set(self.calls.get() + 1);
            if session.access_token == "tok" {
                self.seen_token.set(Some("tok"));
            }
            (self.result)()
        }
    }

    fn session() -> Session {
        Session {
            access_token: "tok".to_string(),
            expires_at: None,
        }
    }

    fn two_posts() -> Result<Vec<Post>, ApiError> {
        Ok(vec![
            Post {
                id: PostId::from("1"),
                lostitem_name: "Wallet".to_string(),
                find_date: None,
                resolved: true,
                hidden: false,
            },
            Post {
                id: PostId::from("2"),
                lostitem_name: "Umbrella".to_string(),
                find_date: None,
                resolved: false,
                hidden: false,
            },
        ])
    }

    fn server_error() -> Result<Vec<Post>, ApiError> {
        Err(ApiError::Status {
            status: 500,
            body: "boom".to_string(),
        })
    }

    #[test]
    fn test_no_session_skips_fetch() {
        let posts = FakePosts::new(two_posts);
        let outcome = block_on(load_visible_posts(&FakeSessions(None), &posts));

        assert!(matches!(outcome, LoadOutcome::NoSession));
        assert_eq!(posts.calls.get(), 0);
        assert_eq!(outcome.into_loaded("posts"), None);
    }

    #[test]
    fn test_session_fetches_once_in_backend_order() {
        let posts = FakePosts::new(two_posts);
        let outcome = block_on(load_visible_posts(&FakeSessions(Some(session())), &posts));

        assert_eq!(posts.calls.get(), 1);
        assert_eq!(posts.seen_token.get(), Some("tok"));
        let loaded = outcome.into_loaded("posts").unwrap();
        let ids: Vec<_> = loaded.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_only_latest_load_is_current() {
        let generation = LoadGeneration::default();
        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.clone().begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let generation = LoadGeneration::default();
        let mut shown = None;

        let slow = generation.begin();
        let fast = generation.begin();
        for (ticket, id) in [(fast, "2"), (slow, "1")] {
            if generation.is_current(ticket) {
                shown = Some(id);
            }
        }
        assert_eq!(shown, Some("2"));
    }

    #[test]
    fn test_fetch_error_is_not_fatal() {
        let posts = FakePosts::new(server_error);
        let outcome = block_on(load_visible_posts(&FakeSessions(Some(session())), &posts));

        assert!(matches!(outcome, LoadOutcome::Failed(ApiError::Status { status: 500, .. })));
        assert_eq!(outcome.into_loaded("posts"), None);
        assert_eq!(posts.calls.get(), 1);
    }
}
