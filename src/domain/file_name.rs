use std::borrow::Borrow;
use std::cmp::Ordering;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::AppError;
use super::validation::validate_entry_name;

/// Name of a single entry directly inside a scanned directory.
///
/// Carries the entry's raw OS name, used to open it, and a string key used
/// for registry lookups and display. The key equals the raw name when that is
/// valid UTF-8; otherwise each invalid byte is written as `\xHH`.
///
/// Guarantees:
/// - Non-empty
/// - Not "." or ".."
/// - No path separators, so joining it onto a directory never escapes it
#[derive(Debug, Clone)]
pub struct FileName {
    key: String,
    raw: OsString,
}

impl FileName {
    /// Validate and create a name from UTF-8 text.
    pub fn new(name: &str) -> Result<Self, AppError> {
        Self::from_os_str(OsStr::new(name))
    }

    /// Validate and create a name from a raw directory entry name.
    pub fn from_os_str(raw: &OsStr) -> Result<Self, AppError> {
        let key = escape_invalid_utf8(raw);
        if !validate_entry_name(&raw.to_string_lossy()) {
            return Err(AppError::InvalidFileName(key));
        }
        Ok(Self { key, raw: raw.to_os_string() })
    }

    /// Registry key for this name.
    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// Name as the filesystem knows it.
    pub fn as_os_str(&self) -> &OsStr {
        &self.raw
    }

    /// Whether the raw name is valid UTF-8, i.e. the key is the name itself.
    pub fn is_utf8(&self) -> bool {
        self.raw.to_str().is_some()
    }
}

fn escape_invalid_utf8(raw: &OsStr) -> String {
    let mut key = String::new();
    for chunk in raw.as_encoded_bytes().utf8_chunks() {
        key.push_str(chunk.valid());
        for byte in chunk.invalid() {
            key.push_str(&format!("\\x{:02X}", byte));
        }
    }
    key
}

impl PartialEq for FileName {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FileName {}

impl Hash for FileName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for FileName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FileName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl std::ops::Deref for FileName {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.key
    }
}

impl AsRef<str> for FileName {
    fn as_ref(&self) -> &str {
        &self.key
    }
}

impl Borrow<str> for FileName {
    fn borrow(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}

impl From<FileName> for String {
    fn from(val: FileName) -> Self {
        val.key
    }
}
