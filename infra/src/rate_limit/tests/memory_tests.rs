//! Unit tests for the in-memory counter store

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use ov_core::errors::DomainError;
use ov_core::services::{RateLimitStore, RateLimiter};
use ov_shared::config::RateLimitConfig;

use crate::rate_limit::InMemoryRateLimitStore;

#[tokio::test]
async fn test_hits_count_within_window() {
    let store = InMemoryRateLimitStore::new();
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
    let window = Duration::seconds(900);

    let first = store.hit("ip:1", window, now).await.unwrap();
    let second = store
        .hit("ip:1", window, now + Duration::seconds(10))
        .await
        .unwrap();

    assert_eq!(first.count, 1);
    assert_eq!(second.count, 2);
    // The window is anchored on the first hit
    assert_eq!(second.reset_at, now + window);
}

#[tokio::test]
async fn test_window_restarts_after_expiry() {
    let store = InMemoryRateLimitStore::new();
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
    let window = Duration::seconds(60);

    store.hit("ip:1", window, now).await.unwrap();
    store.hit("ip:1", window, now).await.unwrap();

    let later = now + Duration::seconds(60);
    let hit = store.hit("ip:1", window, later).await.unwrap();
    assert_eq!(hit.count, 1);
    assert_eq!(hit.reset_at, later + window);
}

#[tokio::test]
async fn test_keys_are_independent() {
    let store = InMemoryRateLimitStore::new();
    let now = Utc::now();
    let window = Duration::seconds(60);

    store.hit("ip:1", window, now).await.unwrap();
    store.hit("ip:1", window, now).await.unwrap();
    let other = store.hit("ip:2", window, now).await.unwrap();

    assert_eq!(other.count, 1);
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn test_reset_and_purge() {
    let store = InMemoryRateLimitStore::new();
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();

    store.hit("ip:1", Duration::seconds(60), now).await.unwrap();
    store.hit("ip:2", Duration::seconds(600), now).await.unwrap();
    store.reset("ip:1").await.unwrap();
    assert_eq!(store.len(), 1);

    assert_eq!(store.purge_expired(now + Duration::seconds(599)), 0);
    assert_eq!(store.purge_expired(now + Duration::seconds(600)), 1);
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_limiter_over_memory_store() {
    let limiter = RateLimiter::new(
        Arc::new(InMemoryRateLimitStore::new()),
        RateLimitConfig::new(10, 900),
    );
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();

    for _ in 0..10 {
        limiter.check_at("203.0.113.7", now).await.unwrap();
    }
    let error = limiter.check_at("203.0.113.7", now).await.unwrap_err();
    assert!(matches!(error, DomainError::RateLimited { limit: 10, .. }));

    let next_window = now + Duration::seconds(900);
    assert!(limiter.check_at("203.0.113.7", next_window).await.is_ok());
}
