//! Identifiers for host elements and grid columns.

use std::fmt;

/// A stable handle for a rendered element owned by the host document.
///
/// Drag sources and drop-target containers are referenced through these ids;
/// their geometry is queried from the [`Document`](crate::Document) on demand
/// so resized or hidden containers are always seen with their live bounds.
///
/// # Example
/// ```
/// use gridwork_dnd::ElementId;
///
/// let header = ElementId::new("header-row");
/// assert_eq!(header, ElementId::from("header-row"));
/// assert_ne!(header, ElementId::new("body-viewport"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(u64);

impl ElementId {
    /// Create an element id from a string key.
    ///
    /// Uses FNV-1a so the same key always maps to the same id.
    pub fn new(key: &str) -> Self {
        Self(Self::hash_str(key))
    }

    /// Create an element id from a raw value handed out by the host.
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    fn hash_str(s: &str) -> u64 {
        const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
        const FNV_PRIME: u64 = 0x100000001b3;

        let mut hash = FNV_OFFSET_BASIS;
        for byte in s.as_bytes() {
            hash ^= *byte as u64;
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        hash
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementId(0x{:016x})", self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Identifier of a grid column, as used by the column model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnId(String);

impl ColumnId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ColumnId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
