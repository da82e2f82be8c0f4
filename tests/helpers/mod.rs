//! Shared fixtures for echoval integration tests
//!
//! Provides the standard test rate card (as an in-memory snapshot and as
//! SQLite seed data) plus input row builders.

#![allow(dead_code)]

use echoval::reference::{CommunityWeightEntry, CreatorRateEntry, MediaRateEntry, ReferenceTables};
use echoval::types::{
    CommunityInputRow, ContentKind, CreatorInputRow, CreatorTier, MediaChannel, MediaInputRow,
};
use sqlx::SqlitePool;

/// Standard test rate card:
/// - media: (Online Article, Major national media) = 500,
///   (Social Media, 1) = 150
/// - creator: (TikTok, Video Post, Micro) = 250,
///   (Instagram, Static/General Post, Macro) = 100
/// - community: Instagram weights (content 50, passive 1, active 5,
///   amplification 20)
pub fn rate_card() -> ReferenceTables {
    ReferenceTables::from_entries(media_rates(), creator_rates(), community_weights())
}

pub fn media_rates() -> Vec<MediaRateEntry> {
    vec![
        MediaRateEntry {
            category: MediaChannel::OnlineArticle,
            tier_type: "Major national media".to_string(),
            tier_value: 500.0,
        },
        MediaRateEntry {
            category: MediaChannel::SocialMedia,
            tier_type: "1".to_string(),
            tier_value: 150.0,
        },
    ]
}

pub fn creator_rates() -> Vec<CreatorRateEntry> {
    vec![
        CreatorRateEntry {
            platform: "TikTok".to_string(),
            content_type: ContentKind::VideoPost,
            tier: CreatorTier::Micro,
            rate: 250.0,
        },
        CreatorRateEntry {
            platform: "Instagram".to_string(),
            content_type: ContentKind::StaticPost,
            tier: CreatorTier::Macro,
            rate: 100.0,
        },
    ]
}

pub fn community_weights() -> Vec<CommunityWeightEntry> {
    vec![CommunityWeightEntry {
        platform: "Instagram".to_string(),
        weight_content: 50.0,
        weight_passive: 1.0,
        weight_active: 5.0,
        weight_amplification: 20.0,
    }]
}

/// Insert the standard rate card into an initialized reference database
pub async fn seed_reference_db(pool: &SqlitePool) {
    for entry in media_rates() {
        sqlx::query(
            "INSERT INTO media_rate_reference (category, type, tier_value) VALUES (?, ?, ?)",
        )
        .bind(entry.category.as_label())
        .bind(&entry.tier_type)
        .bind(entry.tier_value)
        .execute(pool)
        .await
        .unwrap();
    }
    for entry in creator_rates() {
        sqlx::query(
            "INSERT INTO creator_rate_reference (platform, content_type, tier, rate)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&entry.platform)
        .bind(entry.content_type.canonical_label())
        .bind(entry.tier.as_label())
        .bind(entry.rate)
        .execute(pool)
        .await
        .unwrap();
    }
    for entry in community_weights() {
        sqlx::query(
            "INSERT INTO community_rate_reference
             (platform, weight_content, weight_passive, weight_active, weight_amplification)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&entry.platform)
        .bind(entry.weight_content)
        .bind(entry.weight_passive)
        .bind(entry.weight_active)
        .bind(entry.weight_amplification)
        .execute(pool)
        .await
        .unwrap();
    }
}

pub fn media_row(channel: &str, tier_name: &str, mentions: f64) -> MediaInputRow {
    MediaInputRow {
        channel_type: channel.to_string(),
        tier_name: tier_name.to_string(),
        mentions,
    }
}

pub fn creator_row(platform: &str, content: &str, tier: &str, num_posts: f64) -> CreatorInputRow {
    CreatorInputRow {
        platform: platform.to_string(),
        content_type: content.to_string(),
        tier: tier.to_string(),
        num_posts,
    }
}

pub fn community_row(
    platform: &str,
    content_creation: f64,
    passive: f64,
    active: f64,
    amplification: f64,
) -> CommunityInputRow {
    CommunityInputRow {
        platform: platform.to_string(),
        content_creation,
        passive_engagement: passive,
        active_engagement: active,
        amplification,
    }
}
