pub mod directory_filesystem;
pub mod tsv_reader;

pub use directory_filesystem::FilesystemDirectoryListing;
pub use tsv_reader::TsvReaderFactory;
