//! Tests for the in-memory session cache

use crate::repositories::session_cache::{CacheCommand, InMemorySessionCache, SessionCache};

#[tokio::test]
async fn test_get_set_delete() {
    let cache = InMemorySessionCache::new();

    assert_eq!(cache.get("missing").await.unwrap(), None);

    cache.set_with_expiry("k", "v", 60).await.unwrap();
    assert_eq!(cache.get("k").await.unwrap(), Some("v".to_string()));
    assert!(cache.exists("k").await.unwrap());

    cache.delete("k").await.unwrap();
    assert_eq!(cache.get("k").await.unwrap(), None);
    assert!(!cache.exists("k").await.unwrap());
}

#[tokio::test]
async fn test_delete_absent_key_is_ok() {
    let cache = InMemorySessionCache::new();
    cache.delete("never-set").await.unwrap();
}

#[tokio::test]
async fn test_set_members_and_pop_all() {
    let cache = InMemorySessionCache::new();

    let batch = vec![
        CacheCommand::SetAdd {
            key: "bucket".to_string(),
            member: "a".to_string(),
        },
        CacheCommand::SetAdd {
            key: "bucket".to_string(),
            member: "b".to_string(),
        },
    ];
    cache.run_batch(batch).await.unwrap();

    let mut members = cache.set_members("bucket").await.unwrap();
    members.sort();
    assert_eq!(members, vec!["a".to_string(), "b".to_string()]);

    // members survive a read
    assert_eq!(cache.set_members("bucket").await.unwrap().len(), 2);

    // pop consumes the set
    let popped = cache.set_pop_all("bucket").await.unwrap();
    assert_eq!(popped.len(), 2);
    assert!(cache.set_members("bucket").await.unwrap().is_empty());
    assert!(cache.set_pop_all("bucket").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_batch_applies_in_order() {
    let cache = InMemorySessionCache::new();

    let batch = vec![
        CacheCommand::SetWithExpiry {
            key: "k".to_string(),
            value: "first".to_string(),
            seconds: 60,
        },
        CacheCommand::SetWithExpiry {
            key: "k".to_string(),
            value: "second".to_string(),
            seconds: 60,
        },
        CacheCommand::Delete {
            key: "other".to_string(),
        },
    ];
    cache.run_batch(batch).await.unwrap();

    assert_eq!(cache.get("k").await.unwrap(), Some("second".to_string()));
}

#[tokio::test]
async fn test_set_add_deduplicates_members() {
    let cache = InMemorySessionCache::new();

    let batch = vec![
        CacheCommand::SetAdd {
            key: "bucket".to_string(),
            member: "same".to_string(),
        },
        CacheCommand::SetAdd {
            key: "bucket".to_string(),
            member: "same".to_string(),
        },
    ];
    cache.run_batch(batch).await.unwrap();

    assert_eq!(cache.set_members("bucket").await.unwrap().len(), 1);
}
