//! Reference database initialization
//!
//! Opens the SQLite database that backs the three reference tables,
//! creating the file and schema on first run. A freshly created (empty)
//! database is valid: every valuation join misses and all components
//! value to zero, which the caller can detect via
//! [`ReferenceTables::is_empty`](crate::reference::ReferenceTables::is_empty)
//! and correct with a reload.

use crate::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

/// Open the reference database and create tables if needed
pub async fn init_reference_db(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new reference database: {}", db_path.display());
    } else {
        info!("Opened existing reference database: {}", db_path.display());
    }

    // Enable foreign keys
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await?;

    create_reference_tables(&pool).await?;

    Ok(pool)
}

/// Create the three reference tables (idempotent - safe to call multiple times)
pub async fn create_reference_tables(pool: &SqlitePool) -> Result<()> {
    create_media_rate_table(pool).await?;
    create_creator_rate_table(pool).await?;
    create_community_rate_table(pool).await?;
    Ok(())
}

/// Create the media rate table
///
/// One row per (category, type) pair, giving the value of a single
/// mention in that bracket.
async fn create_media_rate_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS media_rate_reference (
            category TEXT NOT NULL CHECK (category IN ('Online Article', 'Social Media')),
            type TEXT NOT NULL,
            tier_value REAL NOT NULL DEFAULT 0,
            PRIMARY KEY (category, type)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Create the creator rate table
///
/// One row per (platform, content_type, tier) triple, giving the value of
/// a single post in that bracket.
async fn create_creator_rate_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS creator_rate_reference (
            platform TEXT NOT NULL,
            content_type TEXT NOT NULL CHECK (content_type IN ('Static/General Post', 'Video Post')),
            tier TEXT NOT NULL CHECK (tier IN ('Mega', 'Macro', 'Mid-tier', 'Micro', 'Nano')),
            rate REAL NOT NULL DEFAULT 0,
            PRIMARY KEY (platform, content_type, tier)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Create the community weight table
///
/// One row per platform, giving the weights applied to the four
/// engagement quantities.
async fn create_community_rate_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS community_rate_reference (
            platform TEXT PRIMARY KEY,
            weight_content REAL NOT NULL DEFAULT 0,
            weight_passive REAL NOT NULL DEFAULT 0,
            weight_active REAL NOT NULL DEFAULT 0,
            weight_amplification REAL NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
