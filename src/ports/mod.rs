mod directory_listing;
mod reader_factory;

pub use directory_listing::{DirectoryEntry, DirectoryListing};
pub use reader_factory::ReaderFactory;
