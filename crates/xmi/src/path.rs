//! Coding paths: where in the value graph an encoder is working.
//!
//! Paths only feed diagnostics (log spans and panic messages); they never
//! influence the encoded text.

use std::fmt;

/// One step of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A record field name
    Key(String),
    /// A sequence position
    Index(usize),
}

/// Ordered segments accumulated while descending into nested values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<PathSegment>);

impl Path {
    /// The empty path of a top-level value.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Returns a new path extended by a field name.
    pub fn join_key(&self, key: &str) -> Path {
        self.join(PathSegment::Key(key.to_string()))
    }

    /// Returns a new path extended by a sequence index.
    pub fn join_index(&self, index: usize) -> Path {
        self.join(PathSegment::Index(index))
    }

    fn join(&self, segment: PathSegment) -> Path {
        let mut segments = Vec::with_capacity(self.0.len() + 1);
        segments.extend_from_slice(&self.0);
        segments.push(segment);
        Path(segments)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.0 {
            match segment {
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
