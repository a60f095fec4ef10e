//! Shelf store
//!
//! The shelf is the user's accumulated selection of books. It only grows:
//! entries keep insertion order and are never removed during a session.

mod entry;

pub use entry::BookEntry;

/// Ordered, append-only collection of book entries
#[derive(Clone, Debug, Default)]
pub struct Shelf {
    entries: Vec<BookEntry>,
}

impl Shelf {
    /// Create an empty shelf
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry at the end
    pub fn append(&mut self, entry: BookEntry) {
        self.entries.push(entry);
    }

    /// Append entries in order
    pub fn extend<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = BookEntry>,
    {
        self.entries.extend(entries);
    }

    /// Read-only view of all entries in insertion order
    #[inline]
    pub fn entries(&self) -> &[BookEntry] {
        &self.entries
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &BookEntry> {
        self.entries.iter()
    }

    /// Get an entry by index
    #[inline]
    pub fn get(&self, index: usize) -> Option<&BookEntry> {
        self.entries.get(index)
    }

    /// Number of entries (N)
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the shelf has no entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
