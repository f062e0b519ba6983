use color_eyre::eyre::Result;
use evm_token_client::Session;
use tracing::info;

use crate::cli::DeployerArgs;
use crate::output::DeploymentOutput;

pub async fn run(args: DeployerArgs) -> Result<()> {
    let request = args.validate()?;
    let connection = request.connection;

    let mut session = Session::connect(
        &connection.private_key,
        &connection.rpc,
        connection.kind,
        connection.gas,
        None,
    )
    .await?;
    info!("Successfully completed account and blockchain connection process.");

    info!("Starting contract deployer process.");
    let deployment = session.deploy(&request.args).await?;
    info!("Successfully completed contract deployer process.");

    DeploymentOutput {
        contract: connection.kind,
        address: deployment.address,
        tx_hash: deployment.tx_hash,
        report: session.deployment_report(),
    }
    .print(connection.json);

    Ok(())
}
