//! Record builder
//!
//! Turns parameter objects into ledger records. Every builder is a total,
//! side-effect free field mapping: no clocks, no counters, no I/O.

use crate::amount::{RawAmount, ZERO_FORMATTED};
use crate::params::{FeeSplitterPaymentParams, FeeSplitterReceiptParams, TreasuryParams};
use crate::records::{FeeSplitterPaymentRecord, FeeSplitterReceiptRecord, TreasuryRecord};

/// Build a treasury record with empty fee accumulators
pub fn build_treasury(params: TreasuryParams) -> TreasuryRecord {
    TreasuryRecord {
        id: params.id,
        market_id: params.market_id,
        treasury_address: params.treasury_address,
        total_fees_received_raw: RawAmount::zero(),
        total_fees_received_formatted: ZERO_FORMATTED.to_string(),
        total_fees_distributed_raw: RawAmount::zero(),
        total_fees_distributed_formatted: ZERO_FORMATTED.to_string(),
        created_at: params.created_at,
        last_updated_at: params.last_updated_at,
    }
}

/// Build a fee receipt record
pub fn build_fee_splitter_receipt(params: FeeSplitterReceiptParams) -> FeeSplitterReceiptRecord {
    FeeSplitterReceiptRecord {
        id: params.id,
        market_id: params.market_id,
        treasury_id: params.treasury_id,
        token_id: params.token_id,
        sender: params.sender,
        amount_raw: params.amount_raw,
        amount_formatted: params.amount_formatted,
        timestamp: params.timestamp,
        transaction_hash: params.transaction_hash,
    }
}

/// Build a fee payment record
pub fn build_fee_splitter_payment(params: FeeSplitterPaymentParams) -> FeeSplitterPaymentRecord {
    FeeSplitterPaymentRecord {
        id: params.id,
        market_id: params.market_id,
        treasury_id: params.treasury_id,
        token_id: params.token_id,
        recipient: params.recipient,
        is_floor_fee: params.is_floor_fee,
        amount_raw: params.amount_raw,
        amount_formatted: params.amount_formatted,
        timestamp: params.timestamp,
        transaction_hash: params.transaction_hash,
    }
}

impl TreasuryRecord {
    /// Create a new treasury record
    pub fn new(params: TreasuryParams) -> Self {
        build_treasury(params)
    }
}

impl FeeSplitterReceiptRecord {
    /// Create a new fee receipt record
    pub fn new(params: FeeSplitterReceiptParams) -> Self {
        build_fee_splitter_receipt(params)
    }
}

impl FeeSplitterPaymentRecord {
    /// Create a new fee payment record
    pub fn new(params: FeeSplitterPaymentParams) -> Self {
        build_fee_splitter_payment(params)
    }
}

impl From<TreasuryParams> for TreasuryRecord {
    fn from(params: TreasuryParams) -> Self {
        build_treasury(params)
    }
}

impl From<FeeSplitterReceiptParams> for FeeSplitterReceiptRecord {
    fn from(params: FeeSplitterReceiptParams) -> Self {
        build_fee_splitter_receipt(params)
    }
}

impl From<FeeSplitterPaymentParams> for FeeSplitterPaymentRecord {
    fn from(params: FeeSplitterPaymentParams) -> Self {
        build_fee_splitter_payment(params)
    }
}
