//! Core vocabulary and row types for campaign valuation
//!
//! The reference side of every join is canonically typed: media channels,
//! creator content kinds, and creator tiers are closed enums. The input
//! side stays loosely typed (plain strings) on purpose — unrecognized
//! labels must flow through to the join and simply find no match, rather
//! than being rejected at the boundary.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Media channel a mention appeared on.
///
/// Forms half of the media rate key, together with the canonical tier
/// type string (see `normalize::canonical_media_type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaChannel {
    /// Press coverage: news sites, trade publications
    #[serde(rename = "Online Article")]
    OnlineArticle,
    /// Coverage on social platforms
    #[serde(rename = "Social Media")]
    SocialMedia,
}

impl MediaChannel {
    /// Parse a channel from its display label (exact match)
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "Online Article" => Some(MediaChannel::OnlineArticle),
            "Social Media" => Some(MediaChannel::SocialMedia),
            _ => None,
        }
    }

    /// Display label, also the join key text
    pub fn as_label(&self) -> &'static str {
        match self {
            MediaChannel::OnlineArticle => "Online Article",
            MediaChannel::SocialMedia => "Social Media",
        }
    }

    /// All channel variants
    pub fn all_variants() -> &'static [MediaChannel] {
        &[MediaChannel::OnlineArticle, MediaChannel::SocialMedia]
    }
}

impl fmt::Display for MediaChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// Creator content kind.
///
/// Carries two label sets: the canonical label used in the rate reference
/// table ("Static/General Post") and the shorter label the entry surfaces
/// use ("Static Post"). Both parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentKind {
    #[serde(rename = "Static/General Post")]
    StaticPost,
    #[serde(rename = "Video Post")]
    VideoPost,
}

impl ContentKind {
    /// Parse from either the canonical or the entry-surface label
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "Static/General Post" | "Static Post" => Some(ContentKind::StaticPost),
            "Video Post" => Some(ContentKind::VideoPost),
            _ => None,
        }
    }

    /// Canonical label as it appears in the creator rate table
    pub fn canonical_label(&self) -> &'static str {
        match self {
            ContentKind::StaticPost => "Static/General Post",
            ContentKind::VideoPost => "Video Post",
        }
    }

    /// Label used by entry surfaces (editors, uploads)
    pub fn ui_label(&self) -> &'static str {
        match self {
            ContentKind::StaticPost => "Static Post",
            ContentKind::VideoPost => "Video Post",
        }
    }

    /// All content kinds
    pub fn all_variants() -> &'static [ContentKind] {
        &[ContentKind::StaticPost, ContentKind::VideoPost]
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_label())
    }
}

/// Creator influence tier, largest audience first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreatorTier {
    Mega,
    Macro,
    #[serde(rename = "Mid-tier")]
    MidTier,
    Micro,
    Nano,
}

impl CreatorTier {
    /// Parse a tier from its display label (exact match; for loose
    /// free-text matching see `normalize::canonical_tier`)
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "Mega" => Some(CreatorTier::Mega),
            "Macro" => Some(CreatorTier::Macro),
            "Mid-tier" => Some(CreatorTier::MidTier),
            "Micro" => Some(CreatorTier::Micro),
            "Nano" => Some(CreatorTier::Nano),
            _ => None,
        }
    }

    /// Display label, also the join key text
    pub fn as_label(&self) -> &'static str {
        match self {
            CreatorTier::Mega => "Mega",
            CreatorTier::Macro => "Macro",
            CreatorTier::MidTier => "Mid-tier",
            CreatorTier::Micro => "Micro",
            CreatorTier::Nano => "Nano",
        }
    }

    /// All tiers, largest first
    pub fn all_variants() -> &'static [CreatorTier] {
        &[
            CreatorTier::Mega,
            CreatorTier::Macro,
            CreatorTier::MidTier,
            CreatorTier::Micro,
            CreatorTier::Nano,
        ]
    }
}

impl fmt::Display for CreatorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// One media coverage line as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaInputRow {
    /// "Online Article" or "Social Media"
    pub channel_type: String,
    /// Friendly tier name ("Major", "Industry", "Tier 1", ...); mapped to
    /// the reference table's type text at valuation time
    pub tier_name: String,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub mentions: f64,
}

/// One creator activity line as entered by the user or produced by an
/// upload summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorInputRow {
    pub platform: String,
    /// "Static Post" or "Video Post" (canonicalized at valuation time)
    pub content_type: String,
    /// Tier label ("Mega", "Macro", "Mid-tier", "Micro", "Nano")
    pub tier: String,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub num_posts: f64,
}

/// One community engagement line, one per platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityInputRow {
    pub platform: String,
    /// New posts/videos produced by the community. Older entry surfaces
    /// did not collect this column, so a missing field reads as zero.
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub content_creation: f64,
    /// Likes, reactions
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub passive_engagement: f64,
    /// Comments, replies
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub active_engagement: f64,
    /// Shares, retweets
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub amplification: f64,
}

/// Computed valuation for one campaign.
///
/// Immutable once built; the caller may persist or display it, the engine
/// holds no copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CampaignResult {
    /// Media echo value
    pub media: f64,
    /// Creator echo value
    pub creator: f64,
    /// Community echo value
    pub community: f64,
    /// Total Echo Value: media + creator + community
    pub tev: f64,
    /// ROI multiple: tev / investment (0.0 when investment is not positive)
    pub roi_m: f64,
    /// ROI percentage: (tev - investment) / investment * 100
    /// (0.0 when investment is not positive)
    pub roi_pct: f64,
}

impl CampaignResult {
    /// Combine the three component values and derive TEV and ROI.
    ///
    /// A non-positive investment defines both ROI fields as 0.0 rather
    /// than dividing.
    pub fn from_components(investment: f64, media: f64, creator: f64, community: f64) -> Self {
        let tev = media + creator + community;

        let (roi_m, roi_pct) = if investment > 0.0 {
            (tev / investment, (tev - investment) / investment * 100.0)
        } else {
            (0.0, 0.0)
        };

        CampaignResult {
            media,
            creator,
            community,
            tev,
            roi_m,
            roi_pct,
        }
    }
}

/// Deserialize a quantity cell from loosely typed input.
///
/// Numbers pass through, numeric strings parse, and everything else
/// (null, missing, free text) coerces to 0.0. Activity counts feeding a
/// KPI report must never abort the whole calculation over one bad cell.
fn lenient_quantity<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    struct QuantityVisitor;

    impl<'de> Visitor<'de> for QuantityVisitor {
        type Value = f64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number, a numeric string, or null")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<f64, E> {
            Ok(v.trim().parse().unwrap_or(0.0))
        }

        fn visit_bool<E: de::Error>(self, _v: bool) -> std::result::Result<f64, E> {
            Ok(0.0)
        }

        fn visit_unit<E: de::Error>(self) -> std::result::Result<f64, E> {
            Ok(0.0)
        }

        fn visit_none<E: de::Error>(self) -> std::result::Result<f64, E> {
            Ok(0.0)
        }

        fn visit_some<D2: Deserializer<'de>>(
            self,
            deserializer: D2,
        ) -> std::result::Result<f64, D2::Error> {
            deserializer.deserialize_any(QuantityVisitor)
        }
    }

    deserializer.deserialize_any(QuantityVisitor)
}
