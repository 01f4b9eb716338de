use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// =============================================================================
// Manifest Types
// =============================================================================

/// Seed manifest describing the initial tree.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Manifest {
    /// Directories to create (relative paths). Parents of files are
    /// created implicitly, so this only needs to list empty directories.
    #[serde(default)]
    pub directories: Vec<String>,
    /// File entries, inserted in order.
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

/// File entry from the manifest.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FileEntry {
    /// File path (relative to root)
    pub path: String,
    /// Initial content
    #[serde(default)]
    pub content: String,
}

// =============================================================================
// Node
// =============================================================================

/// An entry in the virtual filesystem.
///
/// A directory exclusively owns its children; entries keep insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Directory { entries: IndexMap<String, Node> },
    File { content: String },
}

impl Node {
    /// Create an empty directory.
    pub fn directory() -> Self {
        Node::Directory {
            entries: IndexMap::new(),
        }
    }

    /// Create a file with the given content.
    pub fn file(content: impl Into<String>) -> Self {
        Node::File {
            content: content.into(),
        }
    }

    /// Check if this entry is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    /// Directory entries (directories only).
    pub fn entries(&self) -> Option<&IndexMap<String, Node>> {
        match self {
            Node::Directory { entries } => Some(entries),
            Node::File { .. } => None,
        }
    }

    /// File content (files only).
    pub fn content(&self) -> Option<&str> {
        match self {
            Node::File { content } => Some(content),
            Node::Directory { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_accessors() {
        let file = Node::file("hello");
        assert!(!file.is_directory());
        assert_eq!(file.content(), Some("hello"));
        assert!(file.entries().is_none());

        let dir = Node::directory();
        assert!(dir.is_directory());
        assert!(dir.content().is_none());
        assert_eq!(dir.entries().map(|e| e.len()), Some(0));
    }

    #[test]
    fn test_manifest_deserialize() {
        let manifest: Manifest = serde_json::from_str(
            r#"{"directories": ["empty"], "files": [{"path": "a/b.txt", "content": "x"}]}"#,
        )
        .unwrap();
        assert_eq!(manifest.directories, vec!["empty".to_string()]);
        assert_eq!(manifest.files.len(), 1);
        assert_eq!(manifest.files[0].path, "a/b.txt");
        assert_eq!(manifest.files[0].content, "x");
    }

    #[test]
    fn test_manifest_defaults() {
        let manifest: Manifest =
            serde_json::from_str(r#"{"files": [{"path": "empty.txt"}]}"#).unwrap();
        assert!(manifest.directories.is_empty());
        assert_eq!(manifest.files[0].content, "");
    }
}
