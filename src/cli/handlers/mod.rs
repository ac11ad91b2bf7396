mod mutate;
mod query;
mod schema;
mod serve;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::{ServeOptions, handle_serve};

use crate::config::BookshelfConfig;
use anyhow::{Context, Result};
use std::path::Path;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BookshelfConfig,
}

impl CommandContext {
    pub fn new(config: BookshelfConfig) -> Self {
        Self { config }
    }

    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let config = BookshelfConfig::load(config_path, &cwd)?;
        Ok(Self::new(config))
    }
}

fn parse_variables(variables: Option<&str>) -> Result<async_graphql::Variables> {
    match variables {
        Some(v) => {
            let json: serde_json::Value =
                serde_json::from_str(v).context("Variables must be a JSON object")?;
            Ok(async_graphql::Variables::from_json(json))
        }
        None => Ok(async_graphql::Variables::default()),
    }
}

/// A document starting with '@' names a file to read it from.
fn resolve_document(document: &str) -> Result<String> {
    match document.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read GraphQL document from {}", path)),
        None => Ok(document.to_string()),
    }
}
