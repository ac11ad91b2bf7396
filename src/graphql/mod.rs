//! GraphQL schema and resolvers for the bookshelf.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL at http://127.0.0.1:3000/graphql)
//! bookshelf serve
//!
//! # Execute a document from the CLI against a fresh catalogue
//! bookshelf query '{ author(id: 2) { name books { name } } }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `book`, `books`, `author`, `authors`
//! - **Mutations**: `addBook`, `addAuthor`, `removeBook`, `removeAuthor`

mod schema;
mod types;

pub use schema::{BookshelfSchema, MutationRoot, QueryRoot, SharedLibrary, build_schema};
pub use types::*;
