//! Routes a function name to the template's query or write path

use tracing::debug;

use crate::error::{Error, Result};
use crate::registry::{classify, OperationCategory};
use crate::templates::ContractTemplate;
use crate::types::TransactionContext;

/// Runs `function` on `template` and returns its execution report.
///
/// Queries ignore `tx`. Writes require it. Names the registry does not
/// know for the template's kind are rejected before the template is touched.
pub async fn execute<T>(
    template: &mut T,
    function: &str,
    args: &[String],
    tx: Option<&TransactionContext>,
) -> Result<String>
where
    T: ContractTemplate,
{
    let kind = template.kind();
    let function = function.to_lowercase();
    let category = classify(kind, &function);
    debug!(%kind, %function, ?category, args = args.len(), "routing function");

    match category {
        OperationCategory::Query => template.query(&function, args).await?,
        OperationCategory::Write => {
            let tx = tx.ok_or_else(|| Error::MissingTransactionContext(function.clone()))?;
            template.write(tx, &function, args).await?
        }
        OperationCategory::Unknown => {
            return Err(Error::UnsupportedFunction {
                function,
                contract: kind,
            })
        }
    }

    Ok(template.execution_report().to_string())
}
