use super::seed::Seed;
use crate::{
    error::{BookshelfError, Result},
    model::{Author, Book},
};

/// Which records a remove operation drops.
///
/// An id takes precedence over a name. When neither is given every record
/// is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveFilter {
    ById(i32),
    ByName(String),
    Everything,
}

impl RemoveFilter {
    pub fn from_args(id: Option<i32>, name: Option<String>) -> Self {
        match (id, name) {
            (Some(id), _) => RemoveFilter::ById(id),
            (None, Some(name)) => RemoveFilter::ByName(name),
            (None, None) => RemoveFilter::Everything,
        }
    }

    fn keeps(&self, id: i32, name: &str) -> bool {
        match self {
            RemoveFilter::ById(target) => id != *target,
            RemoveFilter::ByName(target) => name != target,
            RemoveFilter::Everything => false,
        }
    }
}

/// In-memory record store for authors and books.
///
/// Ids come from per-collection counters that only move forward, so an id
/// freed by a removal is never handed out again. A counter is `None` once
/// `i32::MAX` has been handed out.
#[derive(Debug, Clone)]
pub struct Library {
    authors: Vec<Author>,
    books: Vec<Book>,
    next_author_id: Option<i32>,
    next_book_id: Option<i32>,
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

impl Library {
    pub fn new() -> Self {
        Self::from_parts(Vec::new(), Vec::new())
    }

    /// Library holding the sample catalogue (3 authors, 8 books).
    pub fn seeded() -> Self {
        let seed = Seed::sample();
        Self::from_parts(seed.authors, seed.books)
    }

    pub fn from_seed(seed: Seed) -> Result<Self> {
        seed.validate()?;
        Ok(Self::from_parts(seed.authors, seed.books))
    }

    fn from_parts(authors: Vec<Author>, books: Vec<Book>) -> Self {
        let next_author_id = authors.iter().map(|a| a.id).max().unwrap_or(0).checked_add(1);
        let next_book_id = books.iter().map(|b| b.id).max().unwrap_or(0).checked_add(1);
        Self {
            authors,
            books,
            next_author_id,
            next_book_id,
        }
    }

    pub fn book(&self, id: i32) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn author(&self, id: i32) -> Option<&Author> {
        self.authors.iter().find(|a| a.id == id)
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn books_by_author(&self, author_id: i32) -> Vec<&Book> {
        self.books.iter().filter(|b| b.is_by(author_id)).collect()
    }

    pub fn author_of(&self, book: &Book) -> Option<&Author> {
        self.author(book.author_id)
    }

    pub fn add_book(&mut self, name: String, author_id: i32) -> Result<Book> {
        let id = self
            .next_book_id
            .ok_or(BookshelfError::IdsExhausted("book"))?;
        self.next_book_id = id.checked_add(1);

        let book = Book::new(id, name, author_id);
        tracing::info!(id, name = %book.name, author_id, "Adding book");
        self.books.push(book.clone());
        Ok(book)
    }

    pub fn add_author(&mut self, name: String) -> Result<Author> {
        let id = self
            .next_author_id
            .ok_or(BookshelfError::IdsExhausted("author"))?;
        self.next_author_id = id.checked_add(1);

        let author = Author::new(id, name);
        tracing::info!(id, name = %author.name, "Adding author");
        self.authors.push(author.clone());
        Ok(author)
    }

    /// Drops the books matched by `filter` and returns what is left.
    pub fn remove_books(&mut self, filter: &RemoveFilter) -> &[Book] {
        if *filter == RemoveFilter::Everything {
            tracing::warn!("removeBook called without id or name, clearing all books");
        }

        let before = self.books.len();
        self.books.retain(|b| filter.keeps(b.id, &b.name));
        tracing::info!(
            ?filter,
            removed = before - self.books.len(),
            "Removed books"
        );
        &self.books
    }

    /// Drops the authors matched by `filter` and returns what is left.
    /// Their books stay behind with a dangling `author_id`.
    pub fn remove_authors(&mut self, filter: &RemoveFilter) -> &[Author] {
        if *filter == RemoveFilter::Everything {
            tracing::warn!("removeAuthor called without id or name, clearing all authors");
        }

        let before = self.authors.len();
        self.authors.retain(|a| filter.keeps(a.id, &a.name));
        tracing::info!(
            ?filter,
            removed = before - self.authors.len(),
            "Removed authors"
        );
        &self.authors
    }
}
