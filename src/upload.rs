//! Creator activity ingest
//!
//! Turns per-post records from a creator activity export into grouped
//! engine input. File parsing is the embedding application's job; this
//! module takes the already-parsed records, canonicalizes their free-text
//! platform/tier/content fields, applies the per-platform content rules,
//! and folds the surviving records into one [`CreatorInputRow`] per
//! (platform, content type, tier) group, plus a summary for display.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::normalize::{canonical_platform, canonical_tier, classify_content};
use crate::types::{ContentKind, CreatorInputRow};

/// One post from a creator activity export, all fields free text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorActivityRecord {
    /// Creator profile/handle; records with a blank profile are dropped
    pub profile: String,
    pub platform: String,
    pub tier: String,
    pub content_type: String,
}

/// Display summary of one ingested export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorUploadSummary {
    /// Records kept after the blank-profile filter
    pub total_posts: usize,
    /// Distinct creator profiles among kept records
    pub unique_creators: usize,
    /// Kept records per canonical platform
    pub platform_breakdown: BTreeMap<String, usize>,
}

/// Content kinds a platform's feed can carry.
///
/// TikTok and YouTube are video-only; a record classified as a static
/// post on those platforms is coerced to a video post rather than
/// dropped.
pub fn allowed_content(platform: &str) -> &'static [ContentKind] {
    match platform {
        "TikTok" | "YouTube" => &[ContentKind::VideoPost],
        _ => ContentKind::all_variants(),
    }
}

/// Summarize export records into engine input rows plus a display summary.
///
/// - records with an empty/whitespace profile are dropped;
/// - platform, tier, and content text are canonicalized (unrecognized
///   tiers fall back to Macro, see
///   [`canonical_tier`](crate::normalize::canonical_tier));
/// - content kinds outside the platform's [`allowed_content`] are coerced
///   to the platform's first allowed kind;
/// - remaining records group by (platform, content type, tier), one
///   [`CreatorInputRow`] per group with `num_posts` = group size, emitted
///   in (platform, tier, content) order.
pub fn summarize_creator_activity(
    records: &[CreatorActivityRecord],
) -> (Vec<CreatorInputRow>, CreatorUploadSummary) {
    // (platform, tier label, content UI label) -> post count; the BTreeMap
    // key order is the emission order
    let mut groups: BTreeMap<(String, String, String), usize> = BTreeMap::new();
    let mut profiles: BTreeSet<String> = BTreeSet::new();
    let mut platform_breakdown: BTreeMap<String, usize> = BTreeMap::new();
    let mut total_posts = 0;

    for record in records {
        let profile = record.profile.trim();
        if profile.is_empty() {
            continue;
        }

        let platform = canonical_platform(&record.platform);
        let tier = canonical_tier(&record.tier);
        let content = classify_content(&record.content_type);

        let allowed = allowed_content(&platform);
        let content = if allowed.contains(&content) {
            content
        } else {
            allowed[0]
        };

        total_posts += 1;
        profiles.insert(profile.to_string());
        *platform_breakdown.entry(platform.clone()).or_insert(0) += 1;
        *groups
            .entry((
                platform,
                tier.as_label().to_string(),
                content.ui_label().to_string(),
            ))
            .or_insert(0) += 1;
    }

    let rows = groups
        .into_iter()
        .map(|((platform, tier, content_type), num_posts)| CreatorInputRow {
            platform,
            content_type,
            tier,
            num_posts: num_posts as f64,
        })
        .collect();

    let summary = CreatorUploadSummary {
        total_posts,
        unique_creators: profiles.len(),
        platform_breakdown,
    };

    (rows, summary)
}
