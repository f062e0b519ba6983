use clap::{Args, Parser};
use evm_token_client::codec::parse_address;
use evm_token_client::registry::{is_known_kind, is_known_operation, ContractKind};
use evm_token_client::types::{DEFAULT_GAS_LIMIT, DEFAULT_GAS_PRICE};
use evm_token_client::{Address, Error, GasSettings};

/// Flags shared by both binaries
#[derive(Args, Clone, Debug)]
pub struct ConnectionArgs {
    /// Hex-encoded private key used to sign transactions
    #[arg(short = 'p', long = "private", env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// RPC endpoint URL
    #[arg(short = 'r', long = "rpc", env = "ETH_RPC_URL")]
    pub rpc: Option<String>,

    /// Gas limit for the transaction
    #[arg(long = "gaslimit", visible_alias = "gl", default_value_t = DEFAULT_GAS_LIMIT)]
    pub gas_limit: u64,

    /// Legacy gas price in wei
    #[arg(long = "gasprice", visible_alias = "gp", default_value_t = DEFAULT_GAS_PRICE)]
    pub gas_price: u128,

    /// Contract template (detailed_test_token, fast_test_token)
    #[arg(short = 'c', long = "contract")]
    pub contract: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Inputs common to both binaries once validated
#[derive(Debug, Clone)]
pub struct Connection {
    pub private_key: String,
    pub rpc: String,
    pub kind: ContractKind,
    pub gas: GasSettings,
    pub json: bool,
}

fn required(values: &[Option<&String>]) -> Result<(), Error> {
    if values
        .iter()
        .any(|value| value.is_none_or(|v| v.trim().is_empty()))
    {
        return Err(Error::MissingArguments);
    }
    Ok(())
}

impl ConnectionArgs {
    fn connection(&self) -> Result<Connection, Error> {
        let contract = self.contract.as_deref().unwrap_or_default();
        if !is_known_kind(contract) {
            return Err(Error::UnsupportedContract(contract.to_string()));
        }
        let kind = contract.parse::<ContractKind>()?;
        Ok(Connection {
            private_key: self.private_key.clone().unwrap_or_default(),
            rpc: self.rpc.clone().unwrap_or_default(),
            kind,
            gas: GasSettings::new(self.gas_limit, self.gas_price),
            json: self.json,
        })
    }
}

#[derive(Parser, Clone, Debug)]
#[command(name = "deployer", version)]
#[command(about = "Deploy solidity contracts to any evm compatible blockchain!", long_about = None)]
pub struct DeployerArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Constructor argument (repeatable, in order)
    #[arg(short = 'a', long = "args", value_name = "ARG")]
    pub args: Vec<String>,
}

/// Validated deployer input
#[derive(Debug, Clone)]
pub struct DeployRequest {
    pub connection: Connection,
    pub args: Vec<String>,
}

impl DeployerArgs {
    /// Checks required flags, then the contract kind
    pub fn validate(&self) -> Result<DeployRequest, Error> {
        let c = &self.connection;
        required(&[c.private_key.as_ref(), c.rpc.as_ref(), c.contract.as_ref()])?;
        Ok(DeployRequest {
            connection: c.connection()?,
            args: self.args.clone(),
        })
    }
}

#[derive(Parser, Clone, Debug)]
#[command(name = "interactor", version)]
#[command(about = "Interact with solidity contracts with any chain!", long_about = None)]
pub struct InteractorArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Address of the deployed contract
    #[arg(short = 'a', long = "address")]
    pub address: Option<String>,

    /// Function to execute, case-insensitive
    #[arg(short = 'f', long = "function")]
    pub function: Option<String>,

    /// Function argument (repeatable, in order)
    #[arg(long = "args", visible_alias = "fa", value_name = "ARG")]
    pub args: Vec<String>,
}

/// Validated interactor input
#[derive(Debug, Clone)]
pub struct InteractRequest {
    pub connection: Connection,
    pub address: Address,
    pub function: String,
    pub args: Vec<String>,
}

impl InteractorArgs {
    /// Checks required flags, the contract kind, then the function name
    pub fn validate(&self) -> Result<InteractRequest, Error> {
        let c = &self.connection;
        required(&[
            c.private_key.as_ref(),
            c.rpc.as_ref(),
            c.contract.as_ref(),
            self.address.as_ref(),
            self.function.as_ref(),
        ])?;
        let connection = c.connection()?;

        let function = self.function.as_deref().unwrap_or_default().to_lowercase();
        if !is_known_operation(connection.kind, &function) {
            return Err(Error::UnsupportedFunction {
                function,
                contract: connection.kind,
            });
        }

        Ok(InteractRequest {
            address: parse_address(self.address.as_deref().unwrap_or_default())?,
            connection,
            function,
            args: self.args.clone(),
        })
    }
}
