use crate::{
    error::{BookshelfError, Result},
    model::{Author, Book},
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Initial contents of a [`Library`](super::Library).
///
/// Seed files are JSON documents shaped like the GraphQL output:
///
/// ```json
/// {
///   "authors": [{ "id": 1, "name": "J. K. Rowling" }],
///   "books": [{ "id": 1, "name": "Harry Potter and the Chamber of Secrets", "authorId": 1 }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub authors: Vec<Author>,

    #[serde(default)]
    pub books: Vec<Book>,
}

impl Seed {
    /// The sample catalogue every fresh server starts with.
    pub fn sample() -> Self {
        Self {
            authors: vec![
                Author::new(1, "J. K. Rowling"),
                Author::new(2, "J. R. R. Tolkien"),
                Author::new(3, "Brent Weeks"),
            ],
            books: vec![
                Book::new(1, "Harry Potter and the Chamber of Secrets", 1),
                Book::new(2, "Harry Potter and the Prisoner of Azkaban", 1),
                Book::new(3, "Harry Potter and the Goblet of Fire", 1),
                Book::new(4, "The Fellowship of the Ring", 2),
                Book::new(5, "The Two Towers", 2),
                Book::new(6, "The Return of the King", 2),
                Book::new(7, "The Way of Shadows", 3),
                Book::new(8, "Beyond the Shadows", 3),
            ],
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let seed: Seed = serde_json::from_str(&content)?;
        seed.validate()?;
        tracing::debug!(
            path = %path.display(),
            authors = seed.authors.len(),
            books = seed.books.len(),
            "Loaded seed file"
        );
        Ok(seed)
    }

    /// Rejects duplicate ids and `i32::MAX`, which would leave the id
    /// counter nowhere to go. Books pointing at unknown authors are allowed.
    pub fn validate(&self) -> Result<()> {
        let ids = self.authors.iter().map(|a| a.id);
        if let Some(id) = ids.chain(self.books.iter().map(|b| b.id)).find(|&id| id == i32::MAX) {
            return Err(BookshelfError::Seed(format!(
                "id {} leaves no room for new records",
                id
            )));
        }

        let mut seen = HashSet::new();
        for author in &self.authors {
            if !seen.insert(author.id) {
                return Err(BookshelfError::Seed(format!(
                    "duplicate author id {}",
                    author.id
                )));
            }
        }

        let mut seen = HashSet::new();
        for book in &self.books {
            if !seen.insert(book.id) {
                return Err(BookshelfError::Seed(format!(
                    "duplicate book id {}",
                    book.id
                )));
            }
        }

        Ok(())
    }
}
