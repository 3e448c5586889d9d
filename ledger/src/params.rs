//! Builder input parameters
//!
//! Parameter objects carry the caller-facing camelCase naming
//! (`marketId`, `treasuryId`, `tokenId`, ...). Every field is required.

use serde::{Deserialize, Serialize};

use crate::amount::RawAmount;

/// Parameters for recording a newly discovered treasury
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreasuryParams {
    pub id: String,
    pub market_id: String,
    pub treasury_address: String,
    pub created_at: u64,
    pub last_updated_at: u64,
}

/// Parameters for an inbound fee paid into a treasury
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeSplitterReceiptParams {
    pub id: String,
    pub market_id: String,
    pub treasury_id: String,
    pub token_id: String,
    pub sender: String,
    pub amount_raw: RawAmount,
    pub amount_formatted: String,
    pub timestamp: u64,
    pub transaction_hash: String,
}

/// Parameters for an outbound distribution from a treasury
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeSplitterPaymentParams {
    pub id: String,
    pub market_id: String,
    pub treasury_id: String,
    pub token_id: String,
    pub recipient: String,
    /// Minimum-floor payment rather than a proportional share
    pub is_floor_fee: bool,
    pub amount_raw: RawAmount,
    pub amount_formatted: String,
    pub timestamp: u64,
    pub transaction_hash: String,
}
