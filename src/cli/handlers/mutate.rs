use crate::graphql::build_schema;
use anyhow::Result;

use super::query::run_documents;
use super::{CommandContext, parse_variables};

/// Runs a single mutation body, wrapped in `mutation { }`, against a fresh
/// catalogue and pretty-prints the response.
pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    let schema = build_schema(ctx.config.store.open_library()?);
    let vars = parse_variables(variables.as_deref())?;

    run_documents(&schema, vec![wrap_mutation(&mutation)], &vars, true)
}

fn wrap_mutation(body: &str) -> String {
    let body = body.trim();
    if starts_with_keyword(body, "mutation") {
        body.to_string()
    } else {
        format!("mutation {{ {} }}", body)
    }
}

/// True when `text` opens with `keyword` as a whole GraphQL name, so
/// `mutation {` and `mutation($id: Int)` match but `mutationLog` does not.
fn starts_with_keyword(text: &str, keyword: &str) -> bool {
    match text.strip_prefix(keyword) {
        Some(rest) => !rest
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_'),
        None => false,
    }
}
