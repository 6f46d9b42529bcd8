use std::path::is_separator;

/// Validates a directory entry name.
///
/// Checks:
/// - Non-empty
/// - No path separators or NUL bytes
/// - Not "." or ".."
pub fn validate_entry_name(name: &str) -> bool {
    if name.is_empty() || name == "." || name == ".." {
        return false;
    }
    !name.chars().any(|c| is_separator(c) || c == '/' || c == '\0')
}

/// Validates a suffix used to filter directory entries.
///
/// Checks:
/// - Non-empty
/// - No path separators or NUL bytes
pub fn validate_suffix(suffix: &str) -> bool {
    !suffix.is_empty() && !suffix.chars().any(|c| is_separator(c) || c == '/' || c == '\0')
}

#[macro_export]
macro_rules! impl_validated_name {
    ($name:ident, $validator:path, $err_variant:path) => {
        impl $name {
            /// Validate and create a new instance.
            pub fn new(value: &str) -> Result<Self, $crate::domain::AppError> {
                if $validator(value) {
                    Ok(Self(value.to_string()))
                } else {
                    Err($err_variant(value.to_string()))
                }
            }

            /// Return the inner string value.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
