use alloy::primitives::{Address, TxHash};
use evm_token_client::{ContractKind, OperationCategory};
use serde::Serialize;

#[derive(Serialize)]
pub struct DeploymentOutput {
    pub contract: ContractKind,
    pub address: Address,
    pub tx_hash: TxHash,
    #[serde(skip)]
    pub report: String,
}

impl DeploymentOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", to_json(self));
        } else {
            println!("{}", self.report);
        }
    }
}

#[derive(Serialize)]
pub struct ExecutionOutput {
    pub contract: ContractKind,
    pub address: Address,
    pub function: String,
    pub category: OperationCategory,
    pub report: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<TxHash>,
}

impl ExecutionOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", to_json(self));
        } else {
            print!("{}", self.report);
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
}
