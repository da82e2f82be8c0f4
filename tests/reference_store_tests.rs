//! Reference store integration tests
//!
//! Covers database initialization (schema on first run, nested paths),
//! the load-once snapshot cache, reload semantics, and the
//! empty-tables-are-valid rule, end to end through the calculator.

mod helpers;

use echoval::db::{create_reference_tables, init_reference_db};
use echoval::{CampaignCalculator, ReferenceSource, ReferenceStore};
use helpers::{community_row, creator_row, media_row, seed_reference_db};
use sqlx::SqlitePool;
use std::sync::Arc;
use tempfile::TempDir;

async fn seeded_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:").await.unwrap();
    create_reference_tables(&pool).await.unwrap();
    seed_reference_db(&pool).await;
    pool
}

/// First run creates the database file, parent directories, and schema
#[tokio::test]
async fn test_init_creates_database_and_schema() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("nested").join("data").join("reference.db");
    assert!(!db_path.exists());

    let pool = init_reference_db(&db_path).await.unwrap();
    assert!(db_path.exists());

    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'
         AND name IN ('media_rate_reference', 'creator_rate_reference', 'community_rate_reference')",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(count, 3);
}

/// Reopening an existing database preserves its rows
#[tokio::test]
async fn test_init_reopens_existing_database() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("reference.db");

    {
        let pool = init_reference_db(&db_path).await.unwrap();
        seed_reference_db(&pool).await;
        pool.close().await;
    }

    let pool = init_reference_db(&db_path).await.unwrap();
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM media_rate_reference")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 2);
}

/// A freshly created (empty) reference database is not an error: joins
/// all miss and the campaign values to zero, detectably via is_empty
#[tokio::test]
async fn test_empty_database_values_campaign_to_zero() {
    let dir = TempDir::new().unwrap();
    let pool = init_reference_db(&dir.path().join("reference.db")).await.unwrap();

    let store = ReferenceStore::new(ReferenceSource::Sqlite(pool));
    let tables = store.tables().await.unwrap();
    assert!(tables.is_empty());

    let calc = CampaignCalculator::new(store);
    let media = vec![media_row("Online Article", "Major", 10.0)];
    let result = calc.calculate_campaign(1_000.0, &media, &[], &[]).await.unwrap();

    assert_eq!(result.tev, 0.0);
    assert_eq!(result.roi_m, 0.0);
}

/// A seeded SQLite source produces the same numbers as the in-memory
/// fixture card
#[tokio::test]
async fn test_sqlite_source_end_to_end() {
    let pool = seeded_pool().await;
    let store = ReferenceStore::new(ReferenceSource::Sqlite(pool));
    let calc = CampaignCalculator::new(store);

    let media = vec![media_row("Online Article", "Major", 10.0)];
    let creator = vec![creator_row("TikTok", "Video Post", "Micro", 4.0)];
    let community = vec![community_row("Instagram", 2.0, 100.0, 10.0, 5.0)];

    let result = calc
        .calculate_campaign(10_000.0, &media, &creator, &community)
        .await
        .unwrap();

    assert_eq!(result.media, 5_000.0);
    assert_eq!(result.creator, 1_000.0);
    assert_eq!(result.community, 350.0);
    assert_eq!(result.tev, 6_350.0);
}

/// tables() loads once and then serves the identical snapshot without
/// re-querying the backing store
#[tokio::test]
async fn test_snapshot_is_cached_across_calls() {
    let pool = seeded_pool().await;
    let store = ReferenceStore::new(ReferenceSource::Sqlite(pool.clone()));

    let first = store.tables().await.unwrap();
    assert_eq!(first.media_rate_count(), 2);

    // A row inserted after the first load is invisible to the cache
    sqlx::query(
        "INSERT INTO media_rate_reference (category, type, tier_value)
         VALUES ('Social Media', '2', 120.0)",
    )
    .execute(&pool)
    .await
    .unwrap();

    let second = store.tables().await.unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.media_rate_count(), 2);
}

/// reload() discards the cached snapshot and observes rows inserted
/// since the first load
#[tokio::test]
async fn test_reload_observes_new_rows() {
    let pool = seeded_pool().await;
    let store = ReferenceStore::new(ReferenceSource::Sqlite(pool.clone()));

    let before = store.tables().await.unwrap();
    assert_eq!(before.media_rate_count(), 2);

    sqlx::query(
        "INSERT INTO media_rate_reference (category, type, tier_value)
         VALUES ('Social Media', '2', 120.0)",
    )
    .execute(&pool)
    .await
    .unwrap();

    let reloaded = store.reload().await.unwrap();
    assert_eq!(reloaded.media_rate_count(), 3);
    assert_eq!(reloaded.media_rate("Social Media", "2"), Some(120.0));

    // The calculator sees the reloaded card through its shared store
    let calc = CampaignCalculator::new(store);
    let media = vec![media_row("Social Media", "Tier 2", 10.0)];
    let result = calc.calculate_campaign(100.0, &media, &[], &[]).await.unwrap();
    assert_eq!(result.media, 1_200.0);
}

/// Closing the pool makes the load fail with a database error instead of
/// silently valuing against an empty card
#[tokio::test]
async fn test_load_failure_propagates() {
    let pool = seeded_pool().await;
    pool.close().await;

    let store = ReferenceStore::new(ReferenceSource::Sqlite(pool));
    let result = store.tables().await;
    assert!(matches!(result, Err(echoval::Error::Database(_))));
}
