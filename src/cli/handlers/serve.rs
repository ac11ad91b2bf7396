use crate::graphql::build_schema;
use crate::server::{GRAPHQL_PATH, run_server};
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use super::CommandContext;

/// Command-line overrides for the `[server]` and `[store]` config sections.
#[derive(Debug, Default)]
pub struct ServeOptions {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub no_graphiql: bool,
    pub seed_file: Option<PathBuf>,
    pub empty: bool,
}

pub fn handle_serve(mut ctx: CommandContext, options: ServeOptions) -> Result<()> {
    apply_overrides(&mut ctx, options);

    let server = &ctx.config.server;
    let library = ctx.config.store.open_library()?;
    tracing::info!(
        authors = library.authors().len(),
        books = library.books().len(),
        "Catalogue loaded"
    );
    let schema = build_schema(library);

    let address = server.address();
    println!(
        "{} http://{}{}",
        "Starting GraphQL server on".green(),
        address,
        GRAPHQL_PATH
    );
    if server.graphiql {
        println!(
            "{} http://{}{}",
            "GraphiQL explorer:".green(),
            address,
            GRAPHQL_PATH
        );
    }

    let graphiql = server.graphiql;
    tokio::runtime::Runtime::new()?
        .block_on(async { run_server(schema, &address, graphiql).await })?;
    Ok(())
}

fn apply_overrides(ctx: &mut CommandContext, options: ServeOptions) {
    let config = &mut ctx.config;
    if let Some(host) = options.host {
        config.server.host = host;
    }
    if let Some(port) = options.port {
        config.server.port = port;
    }
    if options.no_graphiql {
        config.server.graphiql = false;
    }
    if options.seed_file.is_some() {
        config.store.seed_file = options.seed_file;
    }
    if options.empty {
        config.store.seed = false;
        config.store.seed_file = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BookshelfConfig;

    #[test]
    fn test_overrides_replace_config_values() {
        let mut ctx = CommandContext::new(BookshelfConfig::default());
        apply_overrides(
            &mut ctx,
            ServeOptions {
                host: Some("0.0.0.0".to_string()),
                port: Some(8080),
                no_graphiql: true,
                ..ServeOptions::default()
            },
        );
        assert_eq!(ctx.config.server.address(), "0.0.0.0:8080");
        assert!(!ctx.config.server.graphiql);
        assert!(ctx.config.store.seed);
    }

    #[test]
    fn test_no_overrides_keep_config() {
        let mut ctx = CommandContext::new(BookshelfConfig::default());
        apply_overrides(&mut ctx, ServeOptions::default());
        assert_eq!(ctx.config, BookshelfConfig::default());
    }

    #[test]
    fn test_empty_clears_seed() {
        let mut config = BookshelfConfig::default();
        config.store.seed_file = Some(PathBuf::from("seed.json"));
        let mut ctx = CommandContext::new(config);
        apply_overrides(
            &mut ctx,
            ServeOptions {
                empty: true,
                ..ServeOptions::default()
            },
        );
        assert!(!ctx.config.store.seed);
        assert!(ctx.config.store.seed_file.is_none());
        assert!(ctx.config.store.open_library().unwrap().books().is_empty());
    }
}
