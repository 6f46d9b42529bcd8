pub mod error;
pub mod file_name;
pub mod load_config;
pub mod registry;
pub mod suffix;
pub mod tsv;
pub mod validation;

pub use error::{AppError, ReaderError};
pub use file_name::FileName;
pub use load_config::{FailurePolicy, LoadConfig, LoadSettings, ScanSettings};
pub use registry::Registry;
pub use suffix::SuffixFilter;
pub use tsv::TsvTable;
