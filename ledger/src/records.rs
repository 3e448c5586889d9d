//! Fee splitter ledger records
//!
//! Records keep the naming the indexer stores them under: the market,
//! treasury and token references are snake_case (`market_id`,
//! `treasury_id`, `token_id`) while every other field is camelCase.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::amount::RawAmount;
use crate::error::Result;

/// A fee-collection treasury tied to a market
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreasuryRecord {
    pub id: String,
    #[serde(rename = "market_id")]
    pub market_id: String,
    pub treasury_address: String,
    pub total_fees_received_raw: RawAmount,
    pub total_fees_received_formatted: String,
    pub total_fees_distributed_raw: RawAmount,
    pub total_fees_distributed_formatted: String,
    pub created_at: u64,
    pub last_updated_at: u64,
}

/// A single inbound fee payment into a treasury.
///
/// Append-only: created once per fee event and never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeSplitterReceiptRecord {
    pub id: String,
    #[serde(rename = "market_id")]
    pub market_id: String,
    #[serde(rename = "treasury_id")]
    pub treasury_id: String,
    #[serde(rename = "token_id")]
    pub token_id: String,
    pub sender: String,
    pub amount_raw: RawAmount,
    pub amount_formatted: String,
    pub timestamp: u64,
    pub transaction_hash: String,
}

/// A single outbound distribution from a treasury to a recipient.
///
/// Append-only: created once per distribution event and never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeSplitterPaymentRecord {
    pub id: String,
    #[serde(rename = "market_id")]
    pub market_id: String,
    #[serde(rename = "treasury_id")]
    pub treasury_id: String,
    #[serde(rename = "token_id")]
    pub token_id: String,
    pub recipient: String,
    pub is_floor_fee: bool,
    pub amount_raw: RawAmount,
    pub amount_formatted: String,
    pub timestamp: u64,
    pub transaction_hash: String,
}

/// JSON encoding shared by every ledger record
pub trait LedgerRecord: Serialize + DeserializeOwned {
    /// Record id, unique per entity type
    fn id(&self) -> &str;

    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl LedgerRecord for TreasuryRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

impl LedgerRecord for FeeSplitterReceiptRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

impl LedgerRecord for FeeSplitterPaymentRecord {
    fn id(&self) -> &str {
        &self.id
    }
}
