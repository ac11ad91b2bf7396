use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Schema};
use tokio::sync::RwLock;

use crate::store::{Library, RemoveFilter};

use super::types::*;

pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Store handle shared by every resolver.
pub type SharedLibrary = Arc<RwLock<Library>>;

pub fn build_schema(library: Library) -> BookshelfSchema {
    let library: SharedLibrary = Arc::new(RwLock::new(library));

    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(library)
        .finish()
}

pub(super) fn library<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a SharedLibrary> {
    ctx.data::<SharedLibrary>()
}

pub struct QueryRoot;

/// Root Query
#[Object(name = "Query")]
impl QueryRoot {
    /// Get a single book
    async fn book(&self, ctx: &Context<'_>, id: Option<i32>) -> async_graphql::Result<Option<Book>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let library = library(ctx)?.read().await;
        tracing::debug!(id, "Looking up book");
        Ok(library.book(id).cloned().map(Book::from))
    }

    /// List of books
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let library = library(ctx)?.read().await;
        Ok(library.books().iter().cloned().map(Book::from).collect())
    }

    /// Get an author from id
    async fn author(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
    ) -> async_graphql::Result<Option<Author>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let library = library(ctx)?.read().await;
        tracing::debug!(id, "Looking up author");
        Ok(library.author(id).cloned().map(Author::from))
    }

    /// List of authors
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Author>> {
        let library = library(ctx)?.read().await;
        Ok(library.authors().iter().cloned().map(Author::from).collect())
    }
}

pub struct MutationRoot;

/// Root Mutation
#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add a book
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        author_id: i32,
    ) -> async_graphql::Result<Book> {
        let mut library = library(ctx)?.write().await;
        Ok(library.add_book(name, author_id)?.into())
    }

    /// Add a new author
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> async_graphql::Result<Author> {
        let mut library = library(ctx)?.write().await;
        Ok(library.add_author(name)?.into())
    }

    /// Remove books by id, or by name when no id is given.
    /// Calling it with neither removes every book.
    async fn remove_book(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
        name: Option<String>,
    ) -> async_graphql::Result<Vec<Book>> {
        let filter = RemoveFilter::from_args(id, name);
        let mut library = library(ctx)?.write().await;
        Ok(library
            .remove_books(&filter)
            .iter()
            .cloned()
            .map(Book::from)
            .collect())
    }

    /// Remove authors by id, or by name when no id is given.
    /// Calling it with neither removes every author.
    async fn remove_author(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
        name: Option<String>,
    ) -> async_graphql::Result<Vec<Author>> {
        let filter = RemoveFilter::from_args(id, name);
        let mut library = library(ctx)?.write().await;
        Ok(library
            .remove_authors(&filter)
            .iter()
            .cloned()
            .map(Author::from)
            .collect())
    }
}
