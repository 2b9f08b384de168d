//! JSON path representation for attributing errors to positions in a document.
//!
//! This module provides [`JsonPath`] and [`PathSegment`]. Paths are immutable:
//! every extension returns a new path and leaves the receiver untouched, so a
//! parent path can be shared by all of its children during recursive validation.

use std::fmt::{self, Display};

use serde::{Serialize, Serializer};

/// A segment of a JSON path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object property (e.g., `user`, `email`)
    Prop(String),
    /// An array element (e.g., `[0]`, `[42]`)
    Elem(usize),
}

/// A path to a value in a JSON document.
///
/// `JsonPath` renders as `a.b[2].c`; the root path renders as an empty string.
///
/// # Example
///
/// ```rust
/// use jsonvalid::JsonPath;
///
/// let path = JsonPath::root().prop("a").elem(2).prop("b");
///
/// assert_eq!(path.to_string(), "a[2].b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct JsonPath {
    segments: Vec<PathSegment>,
}

impl JsonPath {
    /// Creates an empty path representing the document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path pointing at property `name` of this path.
    pub fn prop(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Prop(name.into()));
        Self { segments }
    }

    /// Returns a new path pointing at element `index` of this path.
    pub fn elem(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Elem(index));
        Self { segments }
    }

    /// Returns true if this is the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the parent path, or None for the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.segments.split_last()?;
        Some(Self {
            segments: init.to_vec(),
        })
    }

    /// Returns the last segment, or None for the root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

impl Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Prop(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", name)?;
                }
                PathSegment::Elem(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}

impl Serialize for JsonPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
