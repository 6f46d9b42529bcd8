use std::fs;
use std::path::Path;

use crate::domain::{FileName, ReaderError, TsvTable};
use crate::ports::ReaderFactory;

/// Reader factory that parses each file as a tab-separated table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TsvReaderFactory;

impl TsvReaderFactory {
    pub fn new() -> Self {
        Self
    }
}

impl ReaderFactory for TsvReaderFactory {
    type Handle = TsvTable;

    fn open(&self, dir: &Path, name: &FileName) -> Result<TsvTable, ReaderError> {
        let path = dir.join(name.as_os_str());
        let content = fs::read_to_string(&path)?;
        TsvTable::parse(path, &content)
    }
}
