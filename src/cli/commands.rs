use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(
    author,
    version,
    about = "A GraphQL API over an in-memory catalogue of authors and books"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (defaults to ./bookshelf.yml when present)
    #[arg(long, global = true, env = "BOOKSHELF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL HTTP server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Disable the GraphiQL explorer on GET /graphql
        #[arg(long)]
        no_graphiql: bool,

        /// Load initial data from a JSON seed file
        #[arg(long)]
        seed_file: Option<PathBuf>,

        /// Start with an empty catalogue
        #[arg(long, conflicts_with = "seed_file")]
        empty: bool,
    },

    /// Execute GraphQL documents against a fresh catalogue.
    ///
    /// Documents run in order against the same store, so a mutation can be
    /// followed by a query that observes it. Prefix a document with '@' to
    /// read it from a file.
    Query {
        /// GraphQL documents
        #[arg(required = true)]
        documents: Vec<String>,

        /// Variables as JSON (applied to every document)
        #[arg(long)]
        variables: Option<String>,

        /// Pretty-print the JSON responses
        #[arg(long)]
        pretty: bool,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the schema in SDL form
    Schema,
}
