//! In-memory record store.
//!
//! The store is the only owner of author and book records. Nothing is
//! persisted: a process starts from a [`Seed`] and forgets everything on exit.
//!
//! - [`Library`]: the two record sequences and their operations
//! - [`RemoveFilter`]: selection rule for the remove operations
//! - [`Seed`]: initial contents, either the built-in sample or a JSON file

mod library;
mod seed;

pub use library::{Library, RemoveFilter};
pub use seed::Seed;
