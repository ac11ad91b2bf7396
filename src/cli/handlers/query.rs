use crate::graphql::{BookshelfSchema, build_schema};
use anyhow::Result;

use super::{CommandContext, parse_variables, resolve_document};

pub fn handle_query(
    ctx: CommandContext,
    documents: Vec<String>,
    variables: Option<String>,
    pretty: bool,
) -> Result<()> {
    let schema = build_schema(ctx.config.store.open_library()?);
    let vars = parse_variables(variables.as_deref())?;

    let queries = documents
        .iter()
        .map(|d| resolve_document(d))
        .collect::<Result<Vec<_>>>()?;
    run_documents(&schema, queries, &vars, pretty)
}

/// Executes each document in order against `schema`, printing one JSON
/// response per document.
pub(super) fn run_documents(
    schema: &BookshelfSchema,
    queries: Vec<String>,
    vars: &async_graphql::Variables,
    pretty: bool,
) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;

    for query in queries {
        let request = async_graphql::Request::new(query).variables(vars.clone());
        let response = runtime.block_on(schema.execute(request));
        if response.is_err() {
            tracing::debug!(errors = response.errors.len(), "Document returned errors");
        }

        let output = if pretty {
            serde_json::to_string_pretty(&response)?
        } else {
            serde_json::to_string(&response)?
        };
        println!("{}", output);
    }
    Ok(())
}
