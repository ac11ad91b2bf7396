use crate::model;
use async_graphql::{Context, Object};

use super::schema::library;

#[derive(Clone)]
pub struct Author(model::Author);

/// About the author
#[Object]
impl Author {
    /// Author id
    async fn id(&self) -> i32 {
        self.0.id
    }

    /// Name of the author
    async fn name(&self) -> &str {
        &self.0.name
    }

    /// Books written by this author, in catalogue order
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let library = library(ctx)?.read().await;
        Ok(library
            .books_by_author(self.0.id)
            .into_iter()
            .map(|b| b.clone().into())
            .collect())
    }
}

impl From<model::Author> for Author {
    fn from(a: model::Author) -> Self {
        Self(a)
    }
}

#[derive(Clone)]
pub struct Book(model::Book);

/// A book written by a particular author
#[Object]
impl Book {
    /// Id of the book
    async fn id(&self) -> i32 {
        self.0.id
    }

    /// Name of the book
    async fn name(&self) -> &str {
        &self.0.name
    }

    /// Id of the author the book belongs to
    async fn author_id(&self) -> i32 {
        self.0.author_id
    }

    /// The author details, null when the author no longer exists
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Author>> {
        let library = library(ctx)?.read().await;
        Ok(library.author_of(&self.0).cloned().map(Author::from))
    }
}

impl From<model::Book> for Book {
    fn from(b: model::Book) -> Self {
        Self(b)
    }
}
