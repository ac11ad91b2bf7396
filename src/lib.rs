//! # Bookshelf - a small GraphQL API over authors and books
//!
//! Bookshelf keeps a catalogue of authors and their books in process memory
//! and exposes it through a GraphQL endpoint. Nothing is persisted; every
//! process starts from a seed (the built-in sample or a JSON file).
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on http://127.0.0.1:3000/graphql with the GraphiQL explorer
//! bookshelf serve
//!
//! # Run documents against a fresh catalogue without a server
//! bookshelf query 'mutation { addAuthor(name: "New Author") { id } }' '{ authors { id name } }'
//!
//! # Print the schema
//! bookshelf schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema and resolvers
//! - [`logging`]: Tracing subscriber setup
//! - [`model`]: Data models (Author, Book)
//! - [`server`]: HTTP endpoint
//! - [`store`]: In-memory record store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles the optional `bookshelf.yml` file.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BookshelfError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema for querying and mutating the catalogue.
pub mod graphql;

/// Data models for authors and books.
pub mod model;

/// Logging setup.
///
/// Installs the tracing subscriber for stderr and the optional log file.
pub mod logging;

/// HTTP endpoint.
///
/// Serves the schema on `/graphql` with axum, GraphiQL on GET.
pub mod server;

/// In-memory record store.
pub mod store;
