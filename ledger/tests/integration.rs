//! Fee ledger integration tests
//!
//! Exercises the public builders end to end:
//! 1. Treasury discovery with zeroed accumulators
//! 2. Receipt and payment rows copied field for field
//! 3. Idempotent, concurrent construction
//! 4. Parameter JSON in, stored record JSON out

use fee_ledger::*;
use serde_json::{json, Value};
use std::thread;

fn payment_params() -> FeeSplitterPaymentParams {
    FeeSplitterPaymentParams {
        id: "p1".to_string(),
        market_id: "m1".to_string(),
        treasury_id: "t1".to_string(),
        token_id: "tok1".to_string(),
        recipient: "0xdef".to_string(),
        is_floor_fee: true,
        amount_raw: RawAmount::from(500u64),
        amount_formatted: "0.0005".to_string(),
        timestamp: 200,
        transaction_hash: "0xhash".to_string(),
    }
}

#[test]
fn test_treasury_example() {
    let record = build_treasury(TreasuryParams {
        id: "t1".to_string(),
        market_id: "m1".to_string(),
        treasury_address: "0xabc".to_string(),
        created_at: 100,
        last_updated_at: 100,
    });

    let value: Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "t1",
            "market_id": "m1",
            "treasuryAddress": "0xabc",
            "totalFeesReceivedRaw": "0",
            "totalFeesReceivedFormatted": "0",
            "totalFeesDistributedRaw": "0",
            "totalFeesDistributedFormatted": "0",
            "createdAt": 100,
            "lastUpdatedAt": 100
        }),
        "Treasury record should copy inputs and zero the accumulators"
    );
}

#[test]
fn test_payment_example() {
    let record = build_fee_splitter_payment(payment_params());

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "p1",
            "market_id": "m1",
            "treasury_id": "t1",
            "token_id": "tok1",
            "recipient": "0xdef",
            "isFloorFee": true,
            "amountRaw": "500",
            "amountFormatted": "0.0005",
            "timestamp": 200,
            "transactionHash": "0xhash"
        }),
        "Payment record should rename only the reference fields"
    );
}

#[test]
fn test_accumulators_ignore_caller_input() {
    // Extra accumulator keys in the input are not part of the parameters
    let params: TreasuryParams = serde_json::from_value(json!({
        "id": "t9",
        "marketId": "m9",
        "treasuryAddress": "0x999",
        "createdAt": 5,
        "lastUpdatedAt": 6,
        "totalFeesReceivedRaw": "123",
        "totalFeesDistributedFormatted": "4.5"
    }))
    .expect("Failed to decode treasury params");

    let record = build_treasury(params);
    assert!(record.total_fees_received_raw.is_zero());
    assert_eq!(record.total_fees_received_formatted, ZERO_FORMATTED);
    assert!(record.total_fees_distributed_raw.is_zero());
    assert_eq!(record.total_fees_distributed_formatted, ZERO_FORMATTED);
}

#[test]
fn test_receipt_from_parameter_json() {
    let params: FeeSplitterReceiptParams = serde_json::from_value(json!({
        "id": "0xhash-0",
        "marketId": "m1",
        "treasuryId": "t1",
        "tokenId": "tok1",
        "sender": "0xsender",
        "amountRaw": "115792089237316195423570985008687907853269984665640564039457584007913129639935",
        "amountFormatted": "115792089237316195423570985008687907853269984665640564039457.584007913129639935",
        "timestamp": 1_700_000_000u64,
        "transactionHash": "0xhash"
    }))
    .expect("Failed to decode receipt params");

    let record = build_fee_splitter_receipt(params);
    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(value["market_id"], json!("m1"));
    assert_eq!(value["treasury_id"], json!("t1"));
    assert_eq!(value["token_id"], json!("tok1"));
    assert_eq!(
        value["amountRaw"],
        json!("115792089237316195423570985008687907853269984665640564039457584007913129639935"),
        "Raw amounts wider than u128 should survive unchanged"
    );
    assert_eq!(value["timestamp"], json!(1_700_000_000u64));
}

#[test]
fn test_builders_are_idempotent() {
    assert_eq!(
        build_fee_splitter_payment(payment_params()),
        build_fee_splitter_payment(payment_params()),
        "Identical input should produce equal records"
    );

    let treasury = || TreasuryParams {
        id: "t1".to_string(),
        market_id: "m1".to_string(),
        treasury_address: "0xabc".to_string(),
        created_at: 100,
        last_updated_at: 100,
    };
    assert_eq!(build_treasury(treasury()), build_treasury(treasury()));
}

#[test]
fn test_concurrent_builds() {
    let handles: Vec<_> = (0..8u64)
        .map(|i| {
            thread::spawn(move || {
                let mut params = payment_params();
                params.id = format!("p{}", i);
                params.timestamp = i;
                build_fee_splitter_payment(params)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let record = handle.join().expect("Builder thread panicked");
        assert_eq!(record.id, format!("p{}", i));
        assert_eq!(record.timestamp, i as u64);
        assert_eq!(record.treasury_id, "t1");
    }
}

#[test]
fn test_stored_record_decodes() {
    let record = build_fee_splitter_payment(payment_params());
    let json = record.to_json_pretty().unwrap();

    let decoded = FeeSplitterPaymentRecord::from_json(&json).unwrap();
    assert_eq!(decoded, record);

    let err = FeeSplitterPaymentRecord::from_json("{}").unwrap_err();
    assert!(matches!(err, LedgerError::SerializationError(_)));
}
