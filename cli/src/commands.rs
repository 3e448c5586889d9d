//! Record building commands

use fee_ledger::{
    FeeSplitterPaymentParams, FeeSplitterPaymentRecord, FeeSplitterReceiptParams,
    FeeSplitterReceiptRecord, LedgerRecord, TreasuryParams, TreasuryRecord,
};
use log::{debug, info};
use serde::de::DeserializeOwned;

/// Kind of record to build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Treasury,
    Receipt,
    Payment,
}

impl RecordKind {
    pub fn name(&self) -> &'static str {
        match self {
            RecordKind::Treasury => "treasury",
            RecordKind::Receipt => "fee receipt",
            RecordKind::Payment => "fee payment",
        }
    }
}

/// Decode parameter JSON, build the record and encode it for output
pub fn build_record(kind: RecordKind, input: &str, pretty: bool) -> fee_ledger::Result<String> {
    match kind {
        RecordKind::Treasury => {
            let params: TreasuryParams = decode(input)?;
            emit(&TreasuryRecord::from(params), kind, pretty)
        }
        RecordKind::Receipt => {
            let params: FeeSplitterReceiptParams = decode(input)?;
            emit(&FeeSplitterReceiptRecord::from(params), kind, pretty)
        }
        RecordKind::Payment => {
            let params: FeeSplitterPaymentParams = decode(input)?;
            emit(&FeeSplitterPaymentRecord::from(params), kind, pretty)
        }
    }
}

fn decode<T: DeserializeOwned>(input: &str) -> fee_ledger::Result<T> {
    debug!("Decoding {} bytes of parameter JSON", input.len());
    Ok(serde_json::from_str(input)?)
}

fn emit<R: LedgerRecord>(record: &R, kind: RecordKind, pretty: bool) -> fee_ledger::Result<String> {
    info!("Built {} record {}", kind.name(), record.id());
    if pretty {
        record.to_json_pretty()
    } else {
        record.to_json()
    }
}
