//! # Echo Valuation Engine
//!
//! Computes the Total Echo Value (TEV) of a marketing campaign from three
//! weighted activity categories:
//! - Media mentions, rated per (channel, tier)
//! - Creator posts, rated per (platform, content type, tier)
//! - Community engagement, weighted per platform
//!
//! Activity rows entered by the embedding application are joined against
//! rate/weight reference tables loaded once from SQLite, and the weighted
//! contributions are summed into a single value with derived ROI figures.
//!
//! The engine is deliberately forgiving: rows whose labels match no
//! reference entry contribute zero instead of failing, so an incomplete
//! rate card under-counts a report rather than crashing it.
//!
//! The crate owns no UI, no campaign persistence, and no file parsing;
//! those belong to the embedding application, which hands the engine row
//! collections and an investment amount and receives a [`CampaignResult`].

pub mod calculator;
pub mod config;
pub mod db;
pub mod error;
pub mod normalize;
pub mod reference;
pub mod store;
pub mod types;
pub mod upload;
pub mod valuation;

pub use calculator::CampaignCalculator;
pub use error::{Error, Result};
pub use reference::ReferenceTables;
pub use store::{ReferenceSource, ReferenceStore};
pub use types::{CampaignResult, CommunityInputRow, CreatorInputRow, MediaInputRow};
