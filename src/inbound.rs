// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Inbound network status aggregation
//!
//! Builds a per-chain status snapshot from two independent Midgard data
//! sources: the mimir governance-flags endpoint and the inbound-addresses
//! endpoint. Each endpoint has an ordered list of candidate base URLs which
//! are tried strictly in order; a candidate that fails (transport or
//! decode) is logged and never retried within the same call. An endpoint
//! whose whole list is exhausted fails the operation; a mimir failure is
//! not masked by inbound-address success.
//!
//! Every call is independent: nothing is cached or persisted, and the
//! lookups are idempotent reads.

use futures::future::try_join;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};
use url::Url;

use crate::chain::Chain;
use crate::config::constants::midgard;
use crate::errors::InboundError;
use crate::transport::{HttpTransport, Transport};

/// Target THORChain network
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    /// Main net
    #[default]
    #[serde(rename = "mainnet")]
    Mainnet,
    /// Test net
    #[serde(rename = "testnet")]
    Testnet,
}

impl Network {
    /// Candidate Midgard base URLs for this network, in failover order
    pub fn midgard_base_urls(&self) -> &'static [&'static str] {
        match self {
            Network::Mainnet => &midgard::MAINNET_BASE_URLS,
            Network::Testnet => &midgard::TESTNET_BASE_URLS,
        }
    }
}

/// Network-wide mimir governance flags
///
/// A map of uppercase flag names to loosely-typed values (the endpoint
/// serves numbers, but booleans and strings occur). [`flag`](Self::flag)
/// reads a value with the truthiness coercion callers of the endpoint have
/// always relied on: zero, null and the empty string are off, everything
/// else is on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MimirDetails(HashMap<String, Value>);

impl MimirDetails {
    /// Read a flag as a boolean, missing keys are off
    pub fn flag(&self, key: &str) -> bool {
        self.0.get(key).map(truthy).unwrap_or(false)
    }

    /// Raw value of a flag, if present
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl From<HashMap<String, Value>> for MimirDetails {
    fn from(flags: HashMap<String, Value>) -> Self {
        Self(flags)
    }
}

impl FromIterator<(String, Value)> for MimirDetails {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Gas rate as served by the inbound-addresses endpoint
///
/// The field arrives as either a string or a number depending on Midgard
/// version; both decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GasRate {
    /// Stringified rate
    Text(String),
    /// Numeric rate
    Number(f64),
}

impl Default for GasRate {
    fn default() -> Self {
        GasRate::Text(String::new())
    }
}

/// One record of the inbound-addresses endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundAddress {
    /// Chain code the record applies to
    pub chain: String,
    /// Vault public key
    #[serde(default)]
    pub pub_key: String,
    /// Current deposit vault address
    #[serde(default)]
    pub address: String,
    /// Whether the record itself marks the chain halted
    #[serde(default)]
    pub halted: bool,
    /// Current gas rate on the chain
    #[serde(default)]
    pub gas_rate: GasRate,
    /// Routing contract address, for chains that use one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub router: Option<String>,
}

/// Per-chain network status snapshot
///
/// A transient computed record merging one inbound-address record with the
/// applicable mimir flags; it is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundDetail {
    /// Current deposit address, empty when no record matched the chain
    pub vault: String,
    /// Routing contract address, only when the matched record provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub router: Option<String>,
    /// Chain halted, by record flag or mimir (per-chain or global)
    pub halted_chain: bool,
    /// Trading halted, global or per-chain mimir flag
    pub halted_trading: bool,
    /// Liquidity provision paused, global or per-chain mimir flag
    #[serde(rename = "haltedLP")]
    pub halted_lp: bool,
}

/// Merge one chain's inbound record with the applicable mimir flags
///
/// A missing inbound record is not an error: the status degrades to an
/// empty vault, no router and record-halt false, merged with whatever
/// mimir flags apply.
pub fn merge_inbound_detail(
    chain: Chain,
    mimir: &MimirDetails,
    inbound_addresses: &[InboundAddress],
) -> InboundDetail {
    let record = inbound_addresses.iter().find(|r| r.chain == chain.as_str());

    InboundDetail {
        vault: record.map(|r| r.address.clone()).unwrap_or_default(),
        router: record.and_then(|r| r.router.clone()),
        halted_chain: record.map(|r| r.halted).unwrap_or(false)
            || mimir.flag(&format!("HALT{chain}CHAIN"))
            || mimir.flag("HALTCHAINGLOBAL"),
        halted_trading: mimir.flag("HALTTRADING") || mimir.flag(&format!("HALT{chain}TRADING")),
        halted_lp: mimir.flag("PAUSELP") || mimir.flag(&format!("PAUSELP{chain}")),
    }
}

/// Midgard client with ordered per-endpoint failover
///
/// Holds a transport and a fixed, ordered candidate URL list. Each lookup
/// walks the list in order and stops at the first candidate that both
/// responds and decodes; exhaustion yields
/// [`InboundError::ServiceUnavailable`]. No retry, no backoff, no timeout
/// of its own; timeout policy belongs to the transport.
///
/// # Examples
///
/// ```no_run
/// use thorutil::{Chain, MidgardClient, Network};
///
/// # async fn example() -> Result<(), thorutil::InboundError> {
/// let client = MidgardClient::new(Network::Mainnet);
/// let status = client.inbound_details(Chain::Bitcoin).await?;
/// if !status.halted_chain {
///     println!("deposit vault: {}", status.vault);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MidgardClient<T = HttpTransport> {
    transport: T,
    base_urls: Vec<Url>,
}

impl MidgardClient<HttpTransport> {
    /// Client over a default HTTP transport for the given network
    pub fn new(network: Network) -> Self {
        Self::with_transport(HttpTransport::default(), network)
    }
}

impl<T: Transport> MidgardClient<T> {
    /// Client over a custom transport for the given network
    pub fn with_transport(transport: T, network: Network) -> Self {
        let base_urls = network
            .midgard_base_urls()
            .iter()
            .filter_map(|u| Url::parse(u).ok())
            .collect();
        Self {
            transport,
            base_urls,
        }
    }

    /// Client over a custom transport and candidate list
    ///
    /// Candidates are tried strictly in the order given.
    pub fn with_base_urls(transport: T, base_urls: Vec<Url>) -> Self {
        Self {
            transport,
            base_urls,
        }
    }

    /// The underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Current mimir governance flags
    pub async fn mimir_details(&self) -> Result<MimirDetails, InboundError> {
        self.fetch(midgard::MIMIR_PATH, "mimir").await
    }

    /// All current inbound-address records
    pub async fn all_inbound_details(&self) -> Result<Vec<InboundAddress>, InboundError> {
        self.fetch(midgard::INBOUND_ADDRESSES_PATH, "inbound_addresses")
            .await
    }

    /// Aggregated status for one chain
    ///
    /// Both endpoint lookups run concurrently and both must succeed before
    /// the merge; there is no partial result.
    pub async fn inbound_details(&self, chain: Chain) -> Result<InboundDetail, InboundError> {
        let (mimir, addresses) = try_join(self.mimir_details(), self.all_inbound_details()).await?;
        Ok(merge_inbound_detail(chain, &mimir, &addresses))
    }

    /// Walk the candidate list for one endpoint, first success wins
    async fn fetch<D: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        endpoint: &str,
    ) -> Result<D, InboundError> {
        for base in &self.base_urls {
            let url = match base.join(path) {
                Ok(url) => url,
                Err(error) => {
                    warn!(base = %base, path, %error, "skipping malformed candidate URL");
                    continue;
                }
            };
            match self.transport.get_json(&url).await {
                Ok(value) => match serde_json::from_value::<D>(value) {
                    Ok(decoded) => {
                        debug!(url = %url, endpoint, "Midgard candidate responded");
                        return Ok(decoded);
                    }
                    Err(error) => {
                        warn!(url = %url, endpoint, %error, "Midgard response failed to decode, trying next candidate");
                    }
                },
                Err(error) => {
                    warn!(url = %url, endpoint, %error, "Midgard candidate failed, trying next");
                }
            }
        }
        Err(InboundError::service_unavailable(endpoint))
    }
}

/// Fetch the current mimir flags from the given network
pub async fn get_mimir_details(network: Network) -> Result<MimirDetails, InboundError> {
    MidgardClient::new(network).mimir_details().await
}

/// Fetch all current inbound-address records from the given network
pub async fn get_all_inbound_details(
    network: Network,
) -> Result<Vec<InboundAddress>, InboundError> {
    MidgardClient::new(network).all_inbound_details().await
}

/// Fetch the aggregated inbound status for one chain
pub async fn get_inbound_details(
    chain: Chain,
    network: Network,
) -> Result<InboundDetail, InboundError> {
    MidgardClient::new(network).inbound_details(chain).await
}
