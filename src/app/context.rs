use crate::ports::{DirectoryListing, ReaderFactory};

/// Application context holding dependencies for command execution.
pub struct AppContext<L: DirectoryListing, F: ReaderFactory> {
    listing: L,
    readers: F,
}

impl<L: DirectoryListing, F: ReaderFactory> AppContext<L, F> {
    /// Create a new application context.
    pub fn new(listing: L, readers: F) -> Self {
        Self { listing, readers }
    }

    /// Get a reference to the directory listing.
    pub fn listing(&self) -> &L {
        &self.listing
    }

    /// Get a reference to the reader factory.
    pub fn readers(&self) -> &F {
        &self.readers
    }
}
