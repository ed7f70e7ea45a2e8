//! # Domain Value Objects
//!
//! Immutable value types for custody assignment.

use super::errors::{ColumnIndex, CustodyError};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// NODE ID (32 bytes)
// =============================================================================

/// Length of a node ID in bytes.
pub const NODE_ID_LEN: usize = 32;

/// 256-bit network participant identifier.
///
/// Opaque bit pattern, compared and hashed as raw bytes. Rendered as 64
/// lowercase hex characters without a prefix.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NodeId([u8; NODE_ID_LEN]);

impl NodeId {
    /// The all-zero node ID.
    pub const ZERO: Self = Self([0u8; NODE_ID_LEN]);

    /// Create a node ID from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; NODE_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; NODE_ID_LEN] {
        &self.0
    }

    /// Leading 8 bytes as a big-endian integer.
    #[must_use]
    pub fn leading_u64(&self) -> u64 {
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&self.0[..8]);
        u64::from_be_bytes(prefix)
    }

    /// Parse from 64 hex characters, with or without a `0x` prefix.
    pub fn from_hex(input: &str) -> Result<Self, CustodyError> {
        let digits = input.strip_prefix("0x").unwrap_or(input);
        if digits.len() != NODE_ID_LEN * 2 {
            return Err(CustodyError::MalformedIdentifier(format!(
                "wrong length, want {} hex chars, got {}",
                NODE_ID_LEN * 2,
                digits.len()
            )));
        }

        let mut bytes = [0u8; NODE_ID_LEN];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|e| CustodyError::MalformedIdentifier(e.to_string()))?;
        Ok(Self(bytes))
    }

    /// Lowercase hex without prefix.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId(0x{})", self.to_hex())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for NodeId {
    type Err = CustodyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; NODE_ID_LEN]> for NodeId {
    fn from(bytes: [u8; NODE_ID_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<NodeId> for [u8; NODE_ID_LEN] {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl AsRef<[u8]> for NodeId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// =============================================================================
// COLUMN SET
// =============================================================================

/// Ordered custody columns of a node.
///
/// Equality is element-wise and order-sensitive: two node IDs are
/// custody-equivalent iff their column sets compare equal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColumnSet(Vec<ColumnIndex>);

impl ColumnSet {
    /// Wrap columns in emission order.
    #[must_use]
    pub fn new(columns: Vec<ColumnIndex>) -> Self {
        Self(columns)
    }

    /// Columns in emission order.
    #[must_use]
    pub fn as_slice(&self) -> &[ColumnIndex] {
        &self.0
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no columns are custodied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, ColumnIndex> {
        self.0.iter()
    }

    /// Take the inner vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<ColumnIndex> {
        self.0
    }
}

impl fmt::Display for ColumnSet {
    /// Space separated, bracketed: `[26 58 90 122]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, column) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{column}")?;
        }
        write!(f, "]")
    }
}

impl From<Vec<ColumnIndex>> for ColumnSet {
    fn from(columns: Vec<ColumnIndex>) -> Self {
        Self(columns)
    }
}

impl<'a> IntoIterator for &'a ColumnSet {
    type Item = &'a ColumnIndex;
    type IntoIter = std::slice::Iter<'a, ColumnIndex>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
