use std::fmt;

use thiserror::Error;

/// Extension of the file that holds one subject's cards.
pub const SUBJECT_FILE_EXTENSION: &str = "json";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SubjectError {
    #[error("subject name must not be empty")]
    EmptyName,

    #[error("subject name must not contain path separators: {name}")]
    InvalidName { name: String },
}

/// Storage key of a subject: the file stem under the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubjectKey(String);

impl SubjectKey {
    /// Derive the key from a name typed by the user: lowercased, spaces become
    /// underscores.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::EmptyName` for blank input and
    /// `SubjectError::InvalidName` when the name would escape the data directory.
    pub fn from_display_name(name: &str) -> Result<Self, SubjectError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(SubjectError::EmptyName);
        }
        if trimmed.contains(['/', '\\']) || trimmed == "." || trimmed == ".." {
            return Err(SubjectError::InvalidName {
                name: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_lowercase().replace(' ', "_")))
    }

    /// Rebuild a key from its file stem, as carried in a route. The stem is kept
    /// verbatim.
    ///
    /// # Errors
    ///
    /// Same rules as `from_display_name` for blank or path-like stems.
    pub fn from_stem(stem: &str) -> Result<Self, SubjectError> {
        if stem.trim().is_empty() {
            return Err(SubjectError::EmptyName);
        }
        if stem.contains(['/', '\\']) || stem == "." || stem == ".." {
            return Err(SubjectError::InvalidName {
                name: stem.to_owned(),
            });
        }
        Ok(Self(stem.to_owned()))
    }

    /// Recover the key from a file name such as `biology.json`.
    ///
    /// Returns `None` for files with another extension or an empty stem.
    #[must_use]
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let stem = file_name.strip_suffix(SUBJECT_FILE_EXTENSION)?.strip_suffix('.')?;
        if stem.is_empty() {
            return None;
        }
        Some(Self(stem.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.{SUBJECT_FILE_EXTENSION}", self.0)
    }

    /// The key with its first character uppercased and the rest lowercased.
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for SubjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A subject available for study, as listed by the card store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    display_name: String,
    key: SubjectKey,
}

impl Subject {
    #[must_use]
    pub fn new(key: SubjectKey) -> Self {
        Self {
            display_name: key.display_name(),
            key,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn key(&self) -> &SubjectKey {
        &self.key
    }
}
