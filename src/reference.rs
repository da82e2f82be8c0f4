//! Reference rate and weight tables
//!
//! The canonical side of the valuation joins. Entry models mirror the
//! three backing tables row for row; `ReferenceTables` is the immutable
//! snapshot the valuators join against, with the entries indexed by their
//! key tuples.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

use crate::types::{ContentKind, CreatorTier, MediaChannel};

/// Monetary value of one media mention for a (channel, tier type) pair.
///
/// `(category, tier_type)` is the table's unique key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaRateEntry {
    pub category: MediaChannel,
    /// Canonical tier type text ("Major national media", "Industry-specific",
    /// "Local/niche", "1", "2", "3")
    pub tier_type: String,
    /// Value of a single mention
    pub tier_value: f64,
}

/// Monetary value of one creator post for a (platform, content, tier) triple.
///
/// `(platform, content_type, tier)` is the table's unique key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorRateEntry {
    pub platform: String,
    pub content_type: ContentKind,
    pub tier: CreatorTier,
    /// Value of a single post
    pub rate: f64,
}

/// Per-platform weights for the four community engagement kinds.
///
/// `platform` is the table's unique key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityWeightEntry {
    pub platform: String,
    /// Content creation (new posts, videos)
    pub weight_content: f64,
    /// Passive engagement (likes, reactions)
    pub weight_passive: f64,
    /// Active engagement (comments, replies)
    pub weight_active: f64,
    /// Amplification (shares, retweets)
    pub weight_amplification: f64,
}

impl CommunityWeightEntry {
    fn weights(&self) -> CommunityWeights {
        CommunityWeights {
            content: self.weight_content,
            passive: self.weight_passive,
            active: self.weight_active,
            amplification: self.weight_amplification,
        }
    }
}

/// The four community weights of one platform, ready for valuation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CommunityWeights {
    pub content: f64,
    pub passive: f64,
    pub active: f64,
    pub amplification: f64,
}

impl CommunityWeights {
    /// Weighted value of the four engagement quantities
    pub fn value_of(&self, content: f64, passive: f64, active: f64, amplification: f64) -> f64 {
        content * self.content
            + passive * self.passive
            + active * self.active
            + amplification * self.amplification
    }
}

/// Immutable snapshot of all three reference tables, indexed for joining.
///
/// Built once per load (see `store::ReferenceStore`) and shared read-only
/// between calculations. An empty snapshot is valid: every join misses and
/// every component values to zero.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    /// (channel label, canonical tier type) -> tier value
    media_rates: HashMap<(String, String), f64>,
    /// (platform, canonical content label, tier label) -> rate
    creator_rates: HashMap<(String, String, String), f64>,
    /// platform -> engagement weights
    community_weights: HashMap<String, CommunityWeights>,
    loaded_at: DateTime<Utc>,
}

impl ReferenceTables {
    /// Empty snapshot; all lookups miss.
    pub fn empty() -> Self {
        ReferenceTables {
            media_rates: HashMap::new(),
            creator_rates: HashMap::new(),
            community_weights: HashMap::new(),
            loaded_at: Utc::now(),
        }
    }

    /// Index raw table rows into a snapshot.
    ///
    /// The key tuples are unique per table; if a backing store violates
    /// that, the last row wins and a warning is logged.
    pub fn from_entries(
        media: Vec<MediaRateEntry>,
        creator: Vec<CreatorRateEntry>,
        community: Vec<CommunityWeightEntry>,
    ) -> Self {
        let mut tables = ReferenceTables::empty();

        for entry in media {
            let key = (entry.category.as_label().to_string(), entry.tier_type.clone());
            if tables.media_rates.insert(key, entry.tier_value).is_some() {
                warn!(
                    category = %entry.category,
                    tier_type = %entry.tier_type,
                    "Duplicate media rate key, keeping the later row"
                );
            }
        }

        for entry in creator {
            let key = (
                entry.platform.clone(),
                entry.content_type.canonical_label().to_string(),
                entry.tier.as_label().to_string(),
            );
            if tables.creator_rates.insert(key, entry.rate).is_some() {
                warn!(
                    platform = %entry.platform,
                    content_type = %entry.content_type,
                    tier = %entry.tier,
                    "Duplicate creator rate key, keeping the later row"
                );
            }
        }

        for entry in community {
            let weights = entry.weights();
            if tables
                .community_weights
                .insert(entry.platform.clone(), weights)
                .is_some()
            {
                warn!(
                    platform = %entry.platform,
                    "Duplicate community weight platform, keeping the later row"
                );
            }
        }

        tables
    }

    /// Per-mention value for a media row key, if the combination is rated.
    pub fn media_rate(&self, channel: &str, tier_type: &str) -> Option<f64> {
        self.media_rates
            .get(&(channel.to_string(), tier_type.to_string()))
            .copied()
    }

    /// Per-post rate for a creator row key, if the combination is rated.
    pub fn creator_rate(&self, platform: &str, content_label: &str, tier_label: &str) -> Option<f64> {
        self.creator_rates
            .get(&(
                platform.to_string(),
                content_label.to_string(),
                tier_label.to_string(),
            ))
            .copied()
    }

    /// Engagement weights for a platform, if the platform is weighted.
    pub fn community_weights(&self, platform: &str) -> Option<CommunityWeights> {
        self.community_weights.get(platform).copied()
    }

    /// Number of distinct media rate keys
    pub fn media_rate_count(&self) -> usize {
        self.media_rates.len()
    }

    /// Number of distinct creator rate keys
    pub fn creator_rate_count(&self) -> usize {
        self.creator_rates.len()
    }

    /// Number of weighted community platforms
    pub fn community_platform_count(&self) -> usize {
        self.community_weights.len()
    }

    /// True when all three tables are empty (e.g. a freshly created
    /// backing store). Callers can use this to detect a misconfigured
    /// reference database and `reload()` after fixing it.
    pub fn is_empty(&self) -> bool {
        self.media_rates.is_empty()
            && self.creator_rates.is_empty()
            && self.community_weights.is_empty()
    }

    /// When this snapshot was built
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        ReferenceTables::empty()
    }
}
