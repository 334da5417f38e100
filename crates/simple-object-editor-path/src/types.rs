//! Type definitions for dotted-path addressing.

use std::fmt;

/// A single step in a [`Path`].
///
/// Object members are addressed by string key, list elements by numeric
/// index. The distinction is kept first-class: list operations (element
/// removal in particular) only accept a numeric final step.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    /// An object member key.
    Key(String),
    /// A list element index.
    Index(usize),
}

/// An ordered sequence of steps addressing one slot in a document.
pub type Path = Vec<PathStep>;

impl PathStep {
    /// Returns the key if this step addresses an object member.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            PathStep::Key(key) => Some(key),
            PathStep::Index(_) => None,
        }
    }

    /// Returns the index if this step addresses a list element.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathStep::Key(_) => None,
            PathStep::Index(idx) => Some(*idx),
        }
    }

    /// Returns true if this step is a numeric list index.
    pub fn is_index(&self) -> bool {
        matches!(self, PathStep::Index(_))
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::Key(key) => f.write_str(key),
            PathStep::Index(idx) => write!(f, "{idx}"),
        }
    }
}

impl From<&str> for PathStep {
    fn from(key: &str) -> Self {
        PathStep::Key(key.to_string())
    }
}

impl From<String> for PathStep {
    fn from(key: String) -> Self {
        PathStep::Key(key)
    }
}

impl From<usize> for PathStep {
    fn from(idx: usize) -> Self {
        PathStep::Index(idx)
    }
}
