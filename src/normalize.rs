//! Input normalization
//!
//! Two distinct normalization layers live here:
//!
//! 1. UI-label mapping: the entry surfaces use friendly labels ("Major",
//!    "Static Post") while the reference tables key on canonical text
//!    ("Major national media", "Static/General Post"). The mapping is
//!    exact and case-sensitive, and unrecognized labels pass through
//!    unchanged — a bad label joins against nothing and contributes zero
//!    instead of failing the calculation.
//!
//! 2. Free-text canonicalization for spreadsheet ingests: platform, tier,
//!    and content text exported by third-party tools is matched case-,
//!    whitespace-, and punctuation-insensitively onto the fixed
//!    vocabularies.
//!
//! Community rows need no label mapping: their join key is the raw
//! platform string, which must match the reference table exactly.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

use crate::types::{ContentKind, CreatorTier};

/// Map a friendly media tier name onto the reference table's type text.
///
/// Unrecognized names pass through unchanged.
pub fn canonical_media_type(tier_name: &str) -> &str {
    match tier_name {
        "Major" => "Major national media",
        "Industry" => "Industry-specific",
        "Local/Niche" => "Local/niche",
        "Tier 1" => "1",
        "Tier 2" => "2",
        "Tier 3" => "3",
        other => other,
    }
}

/// Map a creator content label onto the reference table's type text.
///
/// Both the entry-surface label ("Static Post") and the canonical label
/// itself are accepted; unrecognized labels pass through unchanged.
pub fn canonical_content_label(content_type: &str) -> &str {
    match content_type {
        "Static Post" | "Static/General Post" => "Static/General Post",
        "Video Post" => "Video Post",
        other => other,
    }
}

/// Known platform spellings seen in creator activity exports, keyed by
/// their trimmed uppercase form.
static PLATFORM_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("FACEBOOK", "Facebook"),
        ("INSTAGRAM", "Instagram"),
        ("TIKTOK", "TikTok"),
        ("YOUTUBE", "YouTube"),
        ("YOUTUBE SHORTS", "YouTube"),
        ("X", "X (Twitter)"),
        ("TWITTER", "X (Twitter)"),
        ("X (TWITTER)", "X (Twitter)"),
        ("LEMON 8", "Lemon 8"),
        ("LEMON8", "Lemon 8"),
    ])
});

/// Canonicalize free-text platform names ("TIKTOK", "Youtube Shorts",
/// "twitter") onto the platform vocabulary.
///
/// Unrecognized platforms pass through trimmed; they will join against
/// nothing downstream, which under-counts rather than fails.
pub fn canonical_platform(raw: &str) -> String {
    let trimmed = raw.trim();
    match PLATFORM_ALIASES.get(trimmed.to_uppercase().as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => trimmed.to_string(),
    }
}

/// Canonicalize free-text tier names ("Mid Tier", "MACRO", "nano") onto
/// the tier vocabulary.
///
/// Tier text that matches nothing falls back to `CreatorTier::Macro`.
/// That silent fallback is an intentional business rule carried over from
/// the rate-card owners: an export with a misspelled tier still gets
/// valued, at Macro rates, instead of dropping the rows.
pub fn canonical_tier(raw: &str) -> CreatorTier {
    let folded = raw
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    match folded.as_str() {
        "MEGA" => CreatorTier::Mega,
        "MACRO" => CreatorTier::Macro,
        "MIDTIER" => CreatorTier::MidTier,
        "MICRO" => CreatorTier::Micro,
        "NANO" => CreatorTier::Nano,
        _ => {
            debug!(tier = %raw.trim(), "Unrecognized tier text, defaulting to Macro");
            CreatorTier::Macro
        }
    }
}

/// Classify free-text content descriptions.
///
/// Anything mentioning video, reel, or story counts as a video post;
/// everything else is a static post.
pub fn classify_content(raw: &str) -> ContentKind {
    let folded = raw.trim().to_lowercase();
    if folded.contains("video") || folded.contains("reel") || folded.contains("story") {
        ContentKind::VideoPost
    } else {
        ContentKind::StaticPost
    }
}
