// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the Midgard inbound status aggregator
//!
//! Exercises the ordered URL failover and the merge of mimir flags with
//! inbound-address records, using a scripted mock transport.

mod helpers;

use helpers::{base_urls, MockTransport};
use serde_json::json;
use thorutil::{Chain, InboundError, MidgardClient};

const MIMIR_A: &str = "https://a.example/v2/thorchain/mimir";
const MIMIR_B: &str = "https://b.example/v2/thorchain/mimir";
const INBOUND_A: &str = "https://a.example/v2/thorchain/inbound_addresses";
const INBOUND_B: &str = "https://b.example/v2/thorchain/inbound_addresses";

fn two_candidates() -> Vec<url::Url> {
    base_urls(&["https://a.example", "https://b.example"])
}

fn btc_record() -> serde_json::Value {
    json!([{
        "chain": "BTC",
        "pub_key": "pk",
        "address": "bc1qvault",
        "halted": false,
        "gas_rate": "30"
    }])
}

#[tokio::test]
async fn first_candidate_serves_both_endpoints() {
    let transport = MockTransport::new()
        .with_response(MIMIR_A, json!({}))
        .with_response(INBOUND_A, btc_record());
    let client = MidgardClient::with_base_urls(transport, two_candidates());

    let detail = client.inbound_details(Chain::Bitcoin).await.unwrap();
    assert_eq!(detail.vault, "bc1qvault");
    assert!(!detail.halted_chain);
}

#[tokio::test]
async fn failover_advances_to_second_candidate_in_order() {
    let transport = MockTransport::new()
        .with_failure(MIMIR_A)
        .with_response(MIMIR_B, json!({"HALTTRADING": 1}))
        .with_response(INBOUND_A, btc_record());
    let client = MidgardClient::with_base_urls(transport, two_candidates());

    let detail = client.inbound_details(Chain::Bitcoin).await.unwrap();
    assert!(detail.halted_trading);

    // the mimir lookup walked a.example before b.example, exactly once each
    let requests = client.transport().requests();
    let mimir_order: Vec<&str> = requests
        .iter()
        .filter(|r| r.contains("mimir"))
        .map(String::as_str)
        .collect();
    assert_eq!(mimir_order, vec![MIMIR_A, MIMIR_B]);
    assert_eq!(client.transport().request_count(MIMIR_A), 1);
}

#[tokio::test]
async fn exhausted_mimir_candidates_fail_the_operation() {
    // inbound_addresses succeeds everywhere, mimir nowhere; there is no
    // cross-endpoint fallback
    let transport = MockTransport::new()
        .with_failure(MIMIR_A)
        .with_failure(MIMIR_B)
        .with_response(INBOUND_A, btc_record());
    let client = MidgardClient::with_base_urls(transport, two_candidates());

    let err = client.inbound_details(Chain::Bitcoin).await.unwrap_err();
    assert_eq!(err, InboundError::service_unavailable("mimir"));
}

#[tokio::test]
async fn exhausted_inbound_candidates_name_the_endpoint() {
    let transport = MockTransport::new()
        .with_response(MIMIR_A, json!({}))
        .with_failure(INBOUND_A)
        .with_failure(INBOUND_B);
    let client = MidgardClient::with_base_urls(transport, two_candidates());

    let err = client.all_inbound_details().await.unwrap_err();
    assert_eq!(err, InboundError::service_unavailable("inbound_addresses"));
    assert!(err.to_string().contains("inbound_addresses"));
}

#[tokio::test]
async fn undecodable_response_advances_to_next_candidate() {
    // a.example answers 200 with the wrong shape; the decode failure is
    // treated like any other candidate failure
    let transport = MockTransport::new()
        .with_response(MIMIR_A, json!({}))
        .with_response(INBOUND_A, json!({"not": "a list"}))
        .with_response(INBOUND_B, btc_record());
    let client = MidgardClient::with_base_urls(transport, two_candidates());

    let records = client.all_inbound_details().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(client.transport().request_count(INBOUND_A), 1);
    assert_eq!(client.transport().request_count(INBOUND_B), 1);
}

#[tokio::test]
async fn chain_without_record_merges_mimir_only() {
    // DOGE has no inbound record, but per-chain mimir flags still apply
    let transport = MockTransport::new()
        .with_response(
            MIMIR_A,
            json!({"HALTDOGECHAIN": 1, "PAUSELPDOGE": 1}),
        )
        .with_response(INBOUND_A, btc_record());
    let client = MidgardClient::with_base_urls(transport, two_candidates());

    let detail = client.inbound_details(Chain::Doge).await.unwrap();
    assert_eq!(detail.vault, "");
    assert_eq!(detail.router, None);
    assert!(detail.halted_chain);
    assert!(!detail.halted_trading);
    assert!(detail.halted_lp);
}

#[tokio::test]
async fn router_propagates_from_record() {
    let transport = MockTransport::new()
        .with_response(MIMIR_A, json!({}))
        .with_response(
            INBOUND_A,
            json!([{
                "chain": "ETH",
                "pub_key": "pk",
                "address": "0xvault",
                "halted": true,
                "gas_rate": 120,
                "router": "0xrouter"
            }]),
        );
    let client = MidgardClient::with_base_urls(transport, two_candidates());

    let detail = client.inbound_details(Chain::Ethereum).await.unwrap();
    assert_eq!(detail.vault, "0xvault");
    assert_eq!(detail.router.as_deref(), Some("0xrouter"));
    assert!(detail.halted_chain); // record flag, no mimir involvement
}

#[tokio::test]
async fn mimir_lookup_alone_does_not_touch_inbound_endpoint() {
    let transport = MockTransport::new().with_response(MIMIR_A, json!({"HALTTRADING": 0}));
    let client = MidgardClient::with_base_urls(transport, two_candidates());

    let mimir = client.mimir_details().await.unwrap();
    assert!(!mimir.flag("HALTTRADING"));
    assert_eq!(client.transport().request_count(INBOUND_A), 0);
    assert_eq!(client.transport().request_count(INBOUND_B), 0);
}
