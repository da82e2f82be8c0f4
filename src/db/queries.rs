//! Reference table reads
//!
//! Each fetch maps raw rows into the typed entry models. Rows whose
//! category, content type, or tier text falls outside the fixed
//! vocabularies are skipped with a warning: such a row could never be
//! joined against, so dropping it at load keeps the snapshot honest
//! without failing the whole load. The schema CHECK constraints make
//! this unreachable for databases this crate created, but a hand-edited
//! or imported rate card can carry anything.

use crate::reference::{CommunityWeightEntry, CreatorRateEntry, MediaRateEntry};
use crate::types::{ContentKind, CreatorTier, MediaChannel};
use crate::Result;
use sqlx::SqlitePool;
use tracing::warn;

/// Fetch all media rate rows
pub async fn fetch_media_rates(pool: &SqlitePool) -> Result<Vec<MediaRateEntry>> {
    let rows: Vec<(String, String, f64)> = sqlx::query_as(
        "SELECT category, type, tier_value FROM media_rate_reference",
    )
    .fetch_all(pool)
    .await?;

    let mut entries = Vec::with_capacity(rows.len());
    for (category, tier_type, tier_value) in rows {
        match MediaChannel::from_label(&category) {
            Some(channel) => entries.push(MediaRateEntry {
                category: channel,
                tier_type,
                tier_value,
            }),
            None => warn!(
                category = %category,
                tier_type = %tier_type,
                "Unknown media category in reference table, skipping row"
            ),
        }
    }

    Ok(entries)
}

/// Fetch all creator rate rows
pub async fn fetch_creator_rates(pool: &SqlitePool) -> Result<Vec<CreatorRateEntry>> {
    let rows: Vec<(String, String, String, f64)> = sqlx::query_as(
        "SELECT platform, content_type, tier, rate FROM creator_rate_reference",
    )
    .fetch_all(pool)
    .await?;

    let mut entries = Vec::with_capacity(rows.len());
    for (platform, content_type, tier, rate) in rows {
        let kind = match ContentKind::from_label(&content_type) {
            Some(kind) => kind,
            None => {
                warn!(
                    platform = %platform,
                    content_type = %content_type,
                    "Unknown creator content type in reference table, skipping row"
                );
                continue;
            }
        };
        let tier = match CreatorTier::from_label(&tier) {
            Some(tier) => tier,
            None => {
                warn!(
                    platform = %platform,
                    tier = %tier,
                    "Unknown creator tier in reference table, skipping row"
                );
                continue;
            }
        };
        entries.push(CreatorRateEntry {
            platform,
            content_type: kind,
            tier,
            rate,
        });
    }

    Ok(entries)
}

/// Fetch all community weight rows
pub async fn fetch_community_weights(pool: &SqlitePool) -> Result<Vec<CommunityWeightEntry>> {
    let rows: Vec<(String, f64, f64, f64, f64)> = sqlx::query_as(
        r#"
        SELECT platform, weight_content, weight_passive, weight_active, weight_amplification
        FROM community_rate_reference
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(
            |(platform, weight_content, weight_passive, weight_active, weight_amplification)| {
                CommunityWeightEntry {
                    platform,
                    weight_content,
                    weight_passive,
                    weight_active,
                    weight_amplification,
                }
            },
        )
        .collect())
}
