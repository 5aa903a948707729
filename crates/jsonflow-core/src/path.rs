//! Canonical path grammar: `$`, `.key` for object members, `[n]` for array elements.
//!
//! Object keys are appended verbatim. A key containing `.` or `[` yields a path
//! that reads like a nested or indexed one.

/// Root marker; the id of every document's root node.
pub const ROOT: &str = "$";

/// Key used to reach a child from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildKey<'a> {
    Key(&'a str),
    Index(usize),
}

impl ChildKey<'_> {
    /// Path segment: `[n]` for indices, the key itself otherwise.
    pub fn segment(&self) -> String {
        match self {
            ChildKey::Key(key) => (*key).to_string(),
            ChildKey::Index(idx) => format!("[{idx}]"),
        }
    }

    /// Node name as shown on the node itself.
    pub fn name(&self) -> String {
        self.segment()
    }

    /// Edge label: the bare key or index.
    pub fn label(&self) -> String {
        match self {
            ChildKey::Key(key) => (*key).to_string(),
            ChildKey::Index(idx) => idx.to_string(),
        }
    }
}

/// Combine a parent path with a child segment.
pub fn join(parent: &str, segment: &str) -> String {
    let indexed = segment.starts_with('[');
    if parent == ROOT && indexed {
        format!("{ROOT}{segment}")
    } else if parent == ROOT {
        format!("{ROOT}.{segment}")
    } else if indexed {
        format!("{parent}{segment}")
    } else {
        format!("{parent}.{segment}")
    }
}

/// Path of a child reached from `parent` through `key`.
pub fn child_path(parent: &str, key: ChildKey<'_>) -> String {
    join(parent, &key.segment())
}
