mod mock_directory_listing;
mod stub_reader_factory;

#[allow(unused_imports)]
pub use mock_directory_listing::MockDirectoryListing;
#[allow(unused_imports)]
pub use stub_reader_factory::StubReaderFactory;
