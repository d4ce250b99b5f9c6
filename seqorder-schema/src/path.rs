//! Structural path tracking and normalization.
//!
//! Schema documents wrap named types and fields in purely structural nodes
//! (`complexType`, `sequence`, `choice`, ...). Those wrappers are kept on the
//! path stack so that closes pop correctly, but they never contribute to the
//! lookup key. The key is maintained incrementally on every push and pop.

/// Kind of a schema node, decided once from its local tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Complex type declaration (`complexType`).
    ComplexType,
    /// Ordered field grouping (`sequence`).
    Sequence,
    /// Field declaration (`element`).
    Field,
    /// Other structural wrapper elided from paths (`schema`, `choice`, ...).
    Marker,
    /// Any other node. Contributes its logical name to paths.
    Other,
}

impl NodeKind {
    /// Classifies a local tag name.
    #[must_use]
    pub fn classify(tag: &str) -> Self {
        match tag {
            "complexType" => Self::ComplexType,
            "sequence" => Self::Sequence,
            "element" => Self::Field,
            "schema" | "enumeration" | "annotation" | "choice" | "restriction"
            | "documentation" => Self::Marker,
            _ => Self::Other,
        }
    }

    /// Returns `true` if an unnamed node of this kind is elided from path keys.
    #[inline]
    #[must_use]
    pub const fn is_structural(self) -> bool {
        !matches!(self, Self::Other)
    }
}

#[derive(Debug, Clone)]
struct Frame {
    name: String,
    elided: bool,
    /// Key length before this frame was pushed.
    key_len: usize,
}

/// Stack of open nodes with its normalized key.
#[derive(Debug, Clone, Default)]
pub struct StructuralPath {
    frames: Vec<Frame>,
    key: String,
}

impl StructuralPath {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a node. Elided nodes are tracked but leave the key unchanged.
    pub fn push(&mut self, name: impl Into<String>, elided: bool) {
        let name = name.into();
        let key_len = self.key.len();
        if !elided {
            if !self.key.is_empty() {
                self.key.push('.');
            }
            self.key.push_str(&name);
        }
        self.frames.push(Frame {
            name,
            elided,
            key_len,
        });
    }

    /// Pops the innermost node and returns its logical name.
    pub fn pop(&mut self) -> Option<String> {
        let frame = self.frames.pop()?;
        self.key.truncate(frame.key_len);
        Some(frame.name)
    }

    /// Returns the normalized key of the current location.
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the number of open nodes, elided ones included.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if no node is open.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Returns the logical names of all open nodes, outermost first.
    #[must_use]
    pub fn open_names(&self) -> Vec<String> {
        self.frames.iter().map(|f| f.name.clone()).collect()
    }

    /// Returns the number of open nodes that contribute to the key.
    #[must_use]
    pub fn named_depth(&self) -> usize {
        self.frames.iter().filter(|f| !f.elided).count()
    }
}

/// Joins a parent key and a child name.
#[must_use]
pub fn child_key(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        let mut key = String::with_capacity(parent.len() + name.len() + 1);
        key.push_str(parent);
        key.push('.');
        key.push_str(name);
        key
    }
}

/// Strips a namespace prefix from a qualified name (`tns:Adres` -> `Adres`).
#[must_use]
pub fn strip_namespace(qname: &str) -> &str {
    qname.rsplit_once(':').map_or(qname, |(_, local)| local)
}
