use color_eyre::eyre::Result;
use evm_token_client::registry::{classify, OperationCategory};
use evm_token_client::{ContractTemplate, Session};
use tracing::info;

use crate::cli::InteractorArgs;
use crate::output::ExecutionOutput;

pub async fn run(args: InteractorArgs) -> Result<()> {
    let request = args.validate()?;
    let connection = request.connection;

    // loads the template at the address once code is confirmed there
    let mut session = Session::connect(
        &connection.private_key,
        &connection.rpc,
        connection.kind,
        connection.gas,
        Some(request.address),
    )
    .await?;
    info!("Successfully completed account and blockchain connection process.");

    info!(function = %request.function, "Starting contract executor process.");
    let report = session.execute(&request.function, &request.args).await?;
    info!("Successfully completed contract execution process.");

    let category = classify(connection.kind, &request.function);
    let tx_hash = match category {
        OperationCategory::Write => session.template().state().last_tx(),
        _ => None,
    };

    ExecutionOutput {
        contract: connection.kind,
        address: request.address,
        function: request.function,
        category,
        report,
        tx_hash,
    }
    .print(connection.json);

    Ok(())
}
