use redis::aio::ConnectionManager;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::models::QuestSession;

/// Errors that can occur with session storage
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Session key builder
pub struct SessionKey;

impl SessionKey {
    pub const PREFIX: &'static str = "quest-dating-session-v1";

    pub fn session(id: &str) -> String {
        format!("{}:{}", Self::PREFIX, id)
    }
}

/// Two-tier store for player sessions
///
/// Each session is one JSON document under a single key. Writes always
/// replace the whole document; there are no partial updates. L1 is an
/// in-process cache, L2 an optional Redis shared across instances.
pub struct SessionStore {
    redis: Option<Arc<tokio::sync::Mutex<ConnectionManager>>>,
    l1_cache: moka::future::Cache<String, String>,
    ttl_secs: u64,
}

impl SessionStore {
    /// Create a store, backed by Redis when a URL is given
    pub async fn new(redis_url: Option<&str>, l1_size: u64, ttl_secs: u64) -> Result<Self, SessionError> {
        let redis = match redis_url {
            Some(url) => {
                let client = redis::Client::open(url)?;
                let manager = ConnectionManager::new(client).await?;
                Some(Arc::new(tokio::sync::Mutex::new(manager)))
            }
            None => None,
        };

        Ok(Self {
            redis,
            l1_cache: Self::build_l1(l1_size, ttl_secs),
            ttl_secs,
        })
    }

    /// Store without Redis; sessions live only as long as the process
    pub fn in_memory(l1_size: u64, ttl_secs: u64) -> Self {
        Self {
            redis: None,
            l1_cache: Self::build_l1(l1_size, ttl_secs),
            ttl_secs,
        }
    }

    fn build_l1(l1_size: u64, ttl_secs: u64) -> moka::future::Cache<String, String> {
        moka::future::CacheBuilder::new(l1_size)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build()
    }

    pub fn is_shared(&self) -> bool {
        self.redis.is_some()
    }

    /// Read a session; absent and unparseable records both read as `None`
    pub async fn read(&self, id: &str) -> Result<Option<QuestSession>, SessionError> {
        let key = SessionKey::session(id);

        if let Some(json) = self.l1_cache.get(&key).await {
            tracing::trace!("L1 session hit: {}", key);
            return Ok(parse_record(&key, &json));
        }

        let Some(redis) = &self.redis else {
            tracing::trace!("Session miss: {}", key);
            return Ok(None);
        };

        let mut conn = redis.lock().await;
        let value: Option<String> = redis::cmd("GET")
            .arg(&key)
            .query_async(&mut *conn)
            .await?;
        drop(conn);

        match value {
            Some(json) => {
                tracing::trace!("L2 session hit: {}", key);
                let record = parse_record(&key, &json);
                if record.is_some() {
                    self.l1_cache.insert(key, json).await;
                }
                Ok(record)
            }
            None => {
                tracing::trace!("Session miss: {}", key);
                Ok(None)
            }
        }
    }

    /// Replace the whole session record, returning its key
    pub async fn write(&self, id: &str, session: &QuestSession) -> Result<String, SessionError> {
        let key = SessionKey::session(id);
        let json = serde_json::to_string(session)?;

        self.l1_cache.insert(key.clone(), json.clone()).await;

        if let Some(redis) = &self.redis {
            let mut conn = redis.lock().await;
            redis::cmd("SETEX")
                .arg(&key)
                .arg(self.ttl_secs)
                .arg(json)
                .query_async::<()>(&mut *conn)
                .await?;
        }

        tracing::trace!("Session set: {}", key);
        Ok(key)
    }

    /// Remove a session from both tiers
    pub async fn clear(&self, id: &str) -> Result<String, SessionError> {
        let key = SessionKey::session(id);
        self.l1_cache.invalidate(&key).await;

        if let Some(redis) = &self.redis {
            let mut conn = redis.lock().await;
            redis::cmd("DEL")
                .arg(&key)
                .query_async::<()>(&mut *conn)
                .await?;
        }

        tracing::debug!("Session cleared: {}", key);
        Ok(key)
    }
}

fn parse_record(key: &str, json: &str) -> Option<QuestSession> {
    match serde_json::from_str(json) {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::warn!("Discarding unreadable session {}: {}", key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classify;
    use crate::models::InterviewAnswers;

    fn session_with_answers() -> QuestSession {
        let answers = InterviewAnswers::new().with("q1", "direct please");
        QuestSession {
            personality: Some(classify(&answers)),
            love_answers: Some(answers),
            ..QuestSession::default()
        }
    }

    #[test]
    fn test_session_key_builder() {
        assert_eq!(SessionKey::session("abc"), "quest-dating-session-v1:abc");
    }

    #[tokio::test]
    async fn test_read_missing_session() {
        let store = SessionStore::in_memory(100, 60);
        assert!(store.read("nobody").await.unwrap().is_none());
        assert!(!store.is_shared());
    }

    #[tokio::test]
    async fn test_write_replaces_whole_record() {
        let store = SessionStore::in_memory(100, 60);
        let first = session_with_answers();
        store.write("p1", &first).await.unwrap();
        assert_eq!(store.read("p1").await.unwrap(), Some(first));

        // a write without answers drops them instead of merging
        let second = QuestSession {
            candidates: Some(vec![]),
            ..QuestSession::default()
        };
        let key = store.write("p1", &second).await.unwrap();
        assert_eq!(key, "quest-dating-session-v1:p1");

        let stored = store.read("p1").await.unwrap().unwrap();
        assert!(stored.love_answers.is_none());
        assert_eq!(stored.candidates, Some(vec![]));
    }

    #[tokio::test]
    async fn test_clear_session() {
        let store = SessionStore::in_memory(100, 60);
        store.write("p2", &session_with_answers()).await.unwrap();
        store.clear("p2").await.unwrap();
        assert!(store.read("p2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_record_reads_as_absent() {
        let store = SessionStore::in_memory(100, 60);
        store
            .l1_cache
            .insert(SessionKey::session("p3"), "{not json".to_string())
            .await;
        assert!(store.read("p3").await.unwrap().is_none());
    }

    #[tokio::test]
    #[ignore = "Requires Redis"]
    async fn test_redis_round_trip() {
        let store = SessionStore::new(Some("redis://127.0.0.1:6379"), 100, 60)
            .await
            .expect("Failed to connect to Redis");

        store.write("redis-test", &session_with_answers()).await.unwrap();
        assert!(store.read("redis-test").await.unwrap().is_some());
        store.clear("redis-test").await.unwrap();
    }
}
