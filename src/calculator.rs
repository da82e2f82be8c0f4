//! Campaign calculator
//!
//! Composes the three echo valuators over a shared [`ReferenceStore`]
//! and derives TEV and ROI. Apart from the one-time reference load this
//! is a pure computation: identical inputs always produce identical
//! results, and the input rows are never mutated.

use crate::store::ReferenceStore;
use crate::types::{CampaignResult, CommunityInputRow, CreatorInputRow, MediaInputRow};
use crate::valuation::{calculate_community_echo, calculate_creator_echo, calculate_media_echo};
use crate::Result;
use tracing::debug;

/// Campaign valuation service
///
/// Cheap to clone; clones share the same reference snapshot.
#[derive(Debug, Clone)]
pub struct CampaignCalculator {
    store: ReferenceStore,
}

impl CampaignCalculator {
    /// Create a calculator over a reference store
    pub fn new(store: ReferenceStore) -> Self {
        Self { store }
    }

    /// The underlying store, for reloads and snapshot inspection
    pub fn store(&self) -> &ReferenceStore {
        &self.store
    }

    /// Value a campaign.
    ///
    /// Runs the three valuators against the cached reference snapshot
    /// (loading it on first use) and derives TEV and ROI from the
    /// investment amount. A non-positive investment defines both ROI
    /// fields as 0.0; it is not an error.
    ///
    /// The only failure mode is the reference load itself, which
    /// propagates so the caller can detect a broken backing store
    /// instead of silently valuing everything at zero.
    pub async fn calculate_campaign(
        &self,
        investment: f64,
        media_rows: &[MediaInputRow],
        creator_rows: &[CreatorInputRow],
        community_rows: &[CommunityInputRow],
    ) -> Result<CampaignResult> {
        let tables = self.store.tables().await?;

        let media = calculate_media_echo(&tables, media_rows);
        let creator = calculate_creator_echo(&tables, creator_rows);
        let community = calculate_community_echo(&tables, community_rows);

        let result = CampaignResult::from_components(investment, media, creator, community);

        debug!(
            media = result.media,
            creator = result.creator,
            community = result.community,
            tev = result.tev,
            roi_m = result.roi_m,
            "Calculated campaign value"
        );

        Ok(result)
    }
}
