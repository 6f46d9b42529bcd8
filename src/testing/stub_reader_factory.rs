use std::cell::RefCell;
use std::path::Path;

use crate::domain::{FileName, ReaderError};
use crate::ports::ReaderFactory;

/// Reader factory whose handle is the opened path; chosen names fail.
#[derive(Default)]
#[allow(dead_code)]
pub struct StubReaderFactory {
    failing: Vec<String>,
    pub opened: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl StubReaderFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `open` fail with a malformed-content error for `name`.
    pub fn failing_on(mut self, name: &str) -> Self {
        self.failing.push(name.to_string());
        self
    }
}

impl ReaderFactory for StubReaderFactory {
    type Handle = String;

    fn open(&self, dir: &Path, name: &FileName) -> Result<String, ReaderError> {
        self.opened.borrow_mut().push(name.to_string());
        if self.failing.iter().any(|f| f == name.as_str()) {
            return Err(ReaderError::Malformed { line: 1, reason: "stub failure".to_string() });
        }
        Ok(dir.join(name.as_os_str()).display().to_string())
    }
}
