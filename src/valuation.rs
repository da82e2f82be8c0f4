//! Echo valuators
//!
//! Each valuator left-joins its input rows against the corresponding
//! reference table and sums the weighted contributions. All three share
//! one primitive, [`joined_sum`]: a row resolves to the (quantity, weight)
//! terms of its reference entry, or to nothing when its key misses, in
//! which case it contributes zero without disturbing the other rows.
//!
//! The zero-on-miss rule is a business rule, not an accident: an
//! unrecognized category must under-count a KPI report, never crash it.

use crate::normalize::{canonical_content_label, canonical_media_type};
use crate::reference::ReferenceTables;
use crate::types::{CommunityInputRow, CreatorInputRow, MediaInputRow};

/// Left-join-and-sum over input rows.
///
/// `terms` yields the (quantity, weight) pairs of one row when its join
/// key matches a reference entry, or `None` on a miss. Missed rows and
/// empty input both sum to exactly 0.0.
fn joined_sum<R, T>(rows: &[R], terms: impl Fn(&R) -> Option<T>) -> f64
where
    T: IntoIterator<Item = (f64, f64)>,
{
    rows.iter()
        .filter_map(terms)
        .map(|pairs| pairs.into_iter().map(|(quantity, weight)| quantity * weight).sum::<f64>())
        .sum()
}

/// Value of all media coverage rows: Σ mentions × tier value.
///
/// Join key is (channel_type, canonical tier type); the tier name is
/// mapped through [`canonical_media_type`] first, the channel is used
/// verbatim.
pub fn calculate_media_echo(tables: &ReferenceTables, rows: &[MediaInputRow]) -> f64 {
    joined_sum(rows, |row| {
        let tier_type = canonical_media_type(&row.tier_name);
        tables
            .media_rate(&row.channel_type, tier_type)
            .map(|rate| [(row.mentions, rate)])
    })
}

/// Value of all creator activity rows: Σ num_posts × rate.
///
/// Join key is (platform, canonical content label, tier); the content
/// type is mapped through [`canonical_content_label`] first, platform
/// and tier are used verbatim.
pub fn calculate_creator_echo(tables: &ReferenceTables, rows: &[CreatorInputRow]) -> f64 {
    joined_sum(rows, |row| {
        let content_label = canonical_content_label(&row.content_type);
        tables
            .creator_rate(&row.platform, content_label, &row.tier)
            .map(|rate| [(row.num_posts, rate)])
    })
}

/// Value of all community engagement rows: Σ over the four engagement
/// quantities weighted by the platform's four weights.
///
/// Join key is the raw platform string; platforms carry no label mapping
/// and must match the reference table exactly.
pub fn calculate_community_echo(tables: &ReferenceTables, rows: &[CommunityInputRow]) -> f64 {
    joined_sum(rows, |row| {
        tables.community_weights(&row.platform).map(|weights| {
            [
                (row.content_creation, weights.content),
                (row.passive_engagement, weights.passive),
                (row.active_engagement, weights.active),
                (row.amplification, weights.amplification),
            ]
        })
    })
}
