//! Path keys addressing nodes by child indices from the root.
//!
//! The textual form joins the root key and each child index with `_`:
//! child `i` of node `K` is `K_i`.

use smallvec::SmallVec;

use crate::errors::TreeError;

/// Separator between path segments.
pub const SEPARATOR: char = '_';

/// Sequence of child indices leading from the root to a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodePath(SmallVec<[u32; 8]>);

impl NodePath {
    /// The root path.
    pub fn root() -> Self {
        Self(SmallVec::new())
    }

    /// Path of the `index`-th child of this node.
    pub fn child(&self, index: u32) -> Self {
        let mut segments = self.0.clone();
        segments.push(index);
        Self(segments)
    }

    /// Path of the parent, `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.0.split_last()?;
        Some(Self(SmallVec::from_slice(rest)))
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of edges from the root.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn segments(&self) -> &[u32] {
        &self.0
    }

    /// Render the key with the given root name.
    pub fn key(&self, root_key: &str) -> String {
        let mut key = String::from(root_key);
        for segment in &self.0 {
            key.push(SEPARATOR);
            key.push_str(&segment.to_string());
        }
        key
    }

    /// Parse a textual key relative to the given root name.
    pub fn parse(key: &str, root_key: &str) -> Result<Self, TreeError> {
        let invalid = || TreeError::InvalidKey { key: key.to_string() };

        let rest = key.strip_prefix(root_key).ok_or_else(invalid)?;
        if rest.is_empty() {
            return Ok(Self::root());
        }

        let rest = rest.strip_prefix(SEPARATOR).ok_or_else(invalid)?;
        let mut segments = SmallVec::new();
        for part in rest.split(SEPARATOR) {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            segments.push(part.parse::<u32>().map_err(|_| invalid())?);
        }
        Ok(Self(segments))
    }
}

impl From<&[u32]> for NodePath {
    fn from(segments: &[u32]) -> Self {
        Self(SmallVec::from_slice(segments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_roundtrip() {
        let path = NodePath::root().child(0).child(1);
        assert_eq!(path.key("root"), "root_0_1");
        assert_eq!(NodePath::parse("root_0_1", "root").unwrap(), path);
        assert_eq!(path.parent(), Some(NodePath::root().child(0)));
        assert_eq!(path.depth(), 2);
    }

    #[test]
    fn test_parse_root() {
        let path = NodePath::parse("pc", "pc").unwrap();
        assert!(path.is_root());
        assert_eq!(path.parent(), None);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(NodePath::parse("other_0", "root").is_err());
        assert!(NodePath::parse("root_", "root").is_err());
        assert!(NodePath::parse("root_a", "root").is_err());
        assert!(NodePath::parse("root0", "root").is_err());
        assert!(NodePath::parse("root_1__2", "root").is_err());
    }

    #[test]
    fn test_root_key_with_separator() {
        let path = NodePath::parse("solver_0_3", "solver_0").unwrap();
        assert_eq!(path.segments(), &[3]);
    }
}
