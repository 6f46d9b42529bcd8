//! Tab-separated table model and parser.

use std::path::{Path, PathBuf};

use super::ReaderError;

const DELIMITER: char = '\t';
const BYTE_ORDER_MARK: char = '\u{feff}';

/// A parsed tab-separated file: one header row followed by data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsvTable {
    path: PathBuf,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TsvTable {
    /// Parse `content` read from `path`.
    ///
    /// A leading byte order mark is dropped, empty lines are ignored and
    /// `\r\n` endings are accepted. The first non-empty line is the header;
    /// every later line must have the same number of columns.
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Result<Self, ReaderError> {
        let mut headers: Option<Vec<String>> = None;
        let mut rows = Vec::new();
        let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);

        for (index, raw) in content.lines().enumerate() {
            let line = raw.strip_suffix('\r').unwrap_or(raw);
            if line.is_empty() {
                continue;
            }
            let fields: Vec<String> = line.split(DELIMITER).map(str::to_string).collect();

            match &headers {
                None => headers = Some(fields),
                Some(header) if header.len() != fields.len() => {
                    return Err(ReaderError::Malformed {
                        line: index + 1,
                        reason: format!(
                            "expected {} columns, found {}",
                            header.len(),
                            fields.len()
                        ),
                    });
                }
                Some(_) => rows.push(fields),
            }
        }

        Ok(Self { path: path.into(), headers: headers.unwrap_or_default(), rows })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows, excluding the header.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of the column titled `name`, in row order.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.headers.iter().position(|h| h == name)?;
        Some(self.rows.iter().map(|row| row[index].as_str()).collect())
    }
}
