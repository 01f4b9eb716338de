use indexmap::IndexMap;

use crate::config::FIXTURE_MANIFEST;
use crate::core::path;
use crate::error::FsError;
use crate::models::{FileEntry, Manifest, Node};
use crate::utils::console;

/// In-memory virtual filesystem.
///
/// All operations take absolute paths as produced by [`path::resolve`].
/// Empty segments are ignored, so `"/a//b/"` and `"/a/b"` name the same node.
///
/// # Ownership
///
/// A directory exclusively owns its children. `move_node` transfers a subtree,
/// `copy_file` clones file content, `remove` drops a whole subtree.
#[derive(Clone, Debug)]
pub struct VirtualFs {
    /// Root directory; never removed or replaced.
    root: Node,
}

impl VirtualFs {
    /// Create an empty filesystem (root directory only).
    pub fn empty() -> Self {
        Self {
            root: Node::directory(),
        }
    }

    /// Create the filesystem from the compiled-in seed manifest.
    ///
    /// Falls back to an empty filesystem if the manifest cannot be parsed.
    pub fn seeded() -> Self {
        match serde_json::from_str::<Manifest>(FIXTURE_MANIFEST) {
            Ok(manifest) => Self::from_manifest(&manifest),
            Err(err) => {
                console::warn(&format!("Seed manifest is invalid: {}", err));
                Self::empty()
            }
        }
    }

    /// Create filesystem from a manifest.
    ///
    /// Files are inserted in manifest order, creating parent directories on the
    /// way. Listed directories are created afterwards so empty ones exist too.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let mut fs = Self::empty();

        for file in &manifest.files {
            if let Err(err) = fs.seed_file(file) {
                console::warn(&format!("Manifest conflict: '{}': {}", file.path, err));
            }
        }

        for dir in &manifest.directories {
            if let Err(err) = fs.ensure_directories(&path::segments(dir)) {
                console::warn(&format!("Manifest conflict: '{}': {}", dir, err));
            }
        }

        fs
    }

    fn seed_file(&mut self, file: &FileEntry) -> Result<(), FsError> {
        let absolute = format!("/{}", file.path);
        let (parents, _) = path::split_leaf(&absolute).ok_or(FsError::IsADirectory)?;
        self.ensure_directories(&parents)?;
        self.write_file(&absolute, &file.content)
    }

    /// Create every missing directory along `segments`.
    fn ensure_directories(&mut self, segments: &[&str]) -> Result<(), FsError> {
        let mut current = &mut self.root;
        for segment in segments {
            current = match current {
                Node::Directory { entries } => entries
                    .entry(segment.to_string())
                    .or_insert_with(Node::directory),
                Node::File { .. } => return Err(FsError::NoSuchDirectory),
            };
        }

        if current.is_directory() {
            Ok(())
        } else {
            Err(FsError::NoSuchDirectory)
        }
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Get the node at an absolute path.
    ///
    /// - `"/"` and `"~"` return the root directory
    /// - Fails with [`FsError::NotFound`] when a segment is missing or a
    ///   non-terminal segment is a file
    pub fn lookup(&self, path: &str) -> Result<&Node, FsError> {
        if path::is_root(path) {
            return Ok(&self.root);
        }

        let mut current = &self.root;
        for segment in path::segments(path) {
            current = match current {
                Node::Directory { entries } => entries.get(segment).ok_or(FsError::NotFound)?,
                Node::File { .. } => return Err(FsError::NotFound),
            };
        }

        Ok(current)
    }

    /// Check if a path is a directory.
    pub fn is_directory(&self, path: &str) -> bool {
        matches!(self.lookup(path), Ok(Node::Directory { .. }))
    }

    /// Mutable entries of the directory at `segments`.
    fn entries_mut(&mut self, segments: &[&str]) -> Result<&mut IndexMap<String, Node>, FsError> {
        let mut current = &mut self.root;
        for segment in segments {
            current = match current {
                Node::Directory { entries } => {
                    entries.get_mut(*segment).ok_or(FsError::NoSuchDirectory)?
                }
                Node::File { .. } => return Err(FsError::NoSuchDirectory),
            };
        }

        match current {
            Node::Directory { entries } => Ok(entries),
            Node::File { .. } => Err(FsError::NoSuchDirectory),
        }
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Create an empty file.
    pub fn create_file(&mut self, path: &str) -> Result<(), FsError> {
        self.create(path, Node::file(""))
    }

    /// Create an empty directory.
    pub fn create_directory(&mut self, path: &str) -> Result<(), FsError> {
        self.create(path, Node::directory())
    }

    fn create(&mut self, path: &str, node: Node) -> Result<(), FsError> {
        // The root always exists.
        let (parents, leaf) = path::split_leaf(path).ok_or(FsError::AlreadyExists)?;
        let entries = self.entries_mut(&parents)?;
        if entries.contains_key(leaf) {
            return Err(FsError::AlreadyExists);
        }
        entries.insert(leaf.to_string(), node);
        Ok(())
    }

    /// Remove a file or a directory with its whole subtree.
    pub fn remove(&mut self, path: &str) -> Result<(), FsError> {
        let (parents, leaf) = path::split_leaf(path).ok_or(FsError::NotFound)?;
        let entries = self.entries_mut(&parents).map_err(|_| FsError::NotFound)?;
        entries
            .shift_remove(leaf)
            .map(|_| ())
            .ok_or(FsError::NotFound)
    }

    /// Move a node to a new path, replacing whatever is already there.
    ///
    /// The destination parent is validated before the source is detached, so a
    /// failed move leaves the tree untouched.
    pub fn move_node(&mut self, src: &str, dst: &str) -> Result<(), FsError> {
        let (src_parents, src_leaf) = path::split_leaf(src).ok_or(FsError::NotFound)?;
        self.lookup(src)?;

        let (dst_parents, dst_leaf) = path::split_leaf(dst).ok_or(FsError::AlreadyExists)?;
        let src_segments = path::segments(src);
        if path::segments(dst) == src_segments {
            return Ok(());
        }
        if dst_parents.starts_with(&src_segments) {
            return Err(FsError::IntoItself);
        }
        self.entries_mut(&dst_parents)?;

        let node = self
            .entries_mut(&src_parents)
            .map_err(|_| FsError::NotFound)?
            .shift_remove(src_leaf)
            .ok_or(FsError::NotFound)?;

        let entries = self.entries_mut(&dst_parents)?;
        entries.insert(dst_leaf.to_string(), node);
        Ok(())
    }

    /// Copy a file to a new path.
    ///
    /// Directories cannot be copied. The copy owns its own content.
    /// An existing file at the destination is replaced; an existing directory
    /// is not.
    pub fn copy_file(&mut self, src: &str, dst: &str) -> Result<(), FsError> {
        let node = match self.lookup(src)? {
            file @ Node::File { .. } => file.clone(),
            Node::Directory { .. } => return Err(FsError::IsADirectory),
        };

        let (dst_parents, dst_leaf) = path::split_leaf(dst).ok_or(FsError::AlreadyExists)?;
        let entries = self.entries_mut(&dst_parents)?;
        if entries.get(dst_leaf).is_some_and(Node::is_directory) {
            return Err(FsError::AlreadyExists);
        }
        entries.insert(dst_leaf.to_string(), node);
        Ok(())
    }

    /// Create or overwrite a file with the given content.
    pub fn write_file(&mut self, path: &str, content: &str) -> Result<(), FsError> {
        let (parents, leaf) = path::split_leaf(path).ok_or(FsError::IsADirectory)?;
        let entries = self.entries_mut(&parents)?;
        match entries.get_mut(leaf) {
            Some(Node::File { content: existing }) => {
                *existing = content.to_string();
                Ok(())
            }
            Some(Node::Directory { .. }) => Err(FsError::IsADirectory),
            None => {
                entries.insert(leaf.to_string(), Node::file(content));
                Ok(())
            }
        }
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::seeded()
    }
}
