use anyhow::Result;
use clap::Parser;

use bookshelf::cli::handlers::{
    CommandContext, ServeOptions, handle_mutate, handle_query, handle_schema, handle_serve,
};
use bookshelf::cli::{Cli, Commands};
use bookshelf::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.as_deref())?;

    let ctx = CommandContext::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_graphiql,
            seed_file,
            empty,
        } => handle_serve(
            ctx,
            ServeOptions {
                host,
                port,
                no_graphiql,
                seed_file,
                empty,
            },
        ),
        Commands::Query {
            documents,
            variables,
            pretty,
        } => handle_query(ctx, documents, variables, pretty),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables),
        Commands::Schema => handle_schema(ctx),
    }
}
