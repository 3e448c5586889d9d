//! Fee Ledger
//!
//! Assembles the records a fee-splitter indexer stores:
//! - Treasuries, created with empty fee accumulators
//! - Fee receipts paid into a treasury
//! - Fee payments distributed out of a treasury
//!
//! Builders are pure field mappings; persistence belongs to the caller.

pub mod amount;
pub mod builder;
pub mod error;
pub mod params;
pub mod records;

pub use amount::{RawAmount, ZERO_FORMATTED};

pub use builder::{build_fee_splitter_payment, build_fee_splitter_receipt, build_treasury};

pub use params::{FeeSplitterPaymentParams, FeeSplitterReceiptParams, TreasuryParams};

pub use records::{
    FeeSplitterPaymentRecord,
    FeeSplitterReceiptRecord,
    LedgerRecord,
    TreasuryRecord,
};

pub use error::{LedgerError, Result};
