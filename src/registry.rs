//! Static table of supported contract kinds and their function names
//!
//! Every kind carries a query set and a write set. The two never overlap,
//! so [`classify`] is a plain membership lookup.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::templates::TokenTemplate;

const BASE_QUERIES: &[&str] = &[
    "name",
    "symbol",
    "decimals",
    "totalsupply",
    "balanceof",
    "allowance",
];

const BASE_WRITES: &[&str] = &[
    "transfer",
    "approve",
    "transferfrom",
    "increaseallowance",
    "decreaseallowance",
];

const SUPPLY_WRITES: &[&str] = &["mint", "burn"];

const DETAILED_WRITES: &[&str] = &concat::<7>(BASE_WRITES, SUPPLY_WRITES);

const fn concat<const N: usize>(head: &[&'static str], tail: &[&'static str]) -> [&'static str; N] {
    assert!(head.len() + tail.len() == N);
    let mut out = [""; N];
    let mut i = 0;
    while i < head.len() {
        out[i] = head[i];
        i += 1;
    }
    let mut j = 0;
    while j < tail.len() {
        out[head.len() + j] = tail[j];
        j += 1;
    }
    out
}

/// Supported token templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractKind {
    DetailedTestToken,
    FastTestToken,
}

impl ContractKind {
    /// Every supported kind, in registry order
    pub const ALL: [ContractKind; 2] = [ContractKind::DetailedTestToken, ContractKind::FastTestToken];

    /// Identifier accepted on the command line
    pub fn id(self) -> &'static str {
        match self {
            ContractKind::DetailedTestToken => "detailed_test_token",
            ContractKind::FastTestToken => "fast_test_token",
        }
    }

    /// Name used inside execution reports
    pub fn label(self) -> &'static str {
        match self {
            ContractKind::DetailedTestToken => "DetailedTestToken",
            ContractKind::FastTestToken => "FastTestToken",
        }
    }

    /// Name used in deployment and load reports
    pub fn title(self) -> &'static str {
        match self {
            ContractKind::DetailedTestToken => "Detailed Test Token",
            ContractKind::FastTestToken => "Fast Test Token",
        }
    }

    /// Read-only function names
    pub fn queries(self) -> &'static [&'static str] {
        BASE_QUERIES
    }

    /// State-changing function names
    pub fn writes(self) -> &'static [&'static str] {
        match self {
            ContractKind::DetailedTestToken => DETAILED_WRITES,
            ContractKind::FastTestToken => BASE_WRITES,
        }
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ContractKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "detailed_test_token" => Ok(ContractKind::DetailedTestToken),
            "fast_test_token" => Ok(ContractKind::FastTestToken),
            _ => Err(Error::UnsupportedContract(s.to_string())),
        }
    }
}

/// Whether a function reads or mutates chain state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationCategory {
    Query,
    Write,
    Unknown,
}

/// Classifies `function` for `kind`.
///
/// Names are matched exactly against the lower-case tables; callers
/// normalize user input first.
pub fn classify(kind: ContractKind, function: &str) -> OperationCategory {
    if kind.queries().contains(&function) {
        OperationCategory::Query
    } else if kind.writes().contains(&function) {
        OperationCategory::Write
    } else {
        OperationCategory::Unknown
    }
}

/// Whether `kind` names a supported contract
pub fn is_known_kind(kind: &str) -> bool {
    kind.parse::<ContractKind>().is_ok()
}

/// Whether `function` is a query or write of `kind`
pub fn is_known_operation(kind: ContractKind, function: &str) -> bool {
    classify(kind, function) != OperationCategory::Unknown
}

/// Looks up `kind` and builds an empty template for it
pub fn resolve<I>(kind: &str) -> Result<TokenTemplate<I>> {
    let kind = kind.parse::<ContractKind>()?;
    Ok(TokenTemplate::new(kind))
}
