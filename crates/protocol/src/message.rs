//! Message - Ordered multi-part container
//!
//! The `Message` struct is the unit that flows through a stage. Each part is
//! a `bytes::Bytes` buffer, so a copy shares buffers by reference count but
//! never by mutable reference: writing a part replaces its buffer instead of
//! touching the shared bytes.

use bytes::Bytes;

use crate::{ProtocolError, Result};

/// One binary segment of a message
///
/// Parts are read with `get` and replaced wholesale with `set`. The
/// underlying buffer is immutable, so two parts that share a buffer can never
/// observe each other's writes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Part {
    data: Bytes,
}

impl Part {
    /// Create a part from anything convertible into `Bytes`
    #[inline]
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }

    /// Create a part by copying a byte slice
    #[inline]
    pub fn from_slice(data: &[u8]) -> Self {
        Self {
            data: Bytes::copy_from_slice(data),
        }
    }

    /// Get the part contents
    #[inline]
    pub fn get(&self) -> &[u8] {
        &self.data
    }

    /// Replace the part contents
    #[inline]
    pub fn set(&mut self, data: impl Into<Bytes>) {
        self.data = data.into();
    }

    /// Get the underlying buffer
    #[inline]
    pub fn bytes(&self) -> &Bytes {
        &self.data
    }

    /// Length of the part in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the part holds no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<&[u8]> for Part {
    fn from(data: &[u8]) -> Self {
        Self::from_slice(data)
    }
}

impl From<&str> for Part {
    fn from(data: &str) -> Self {
        Self::from_slice(data.as_bytes())
    }
}

impl From<Vec<u8>> for Part {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

/// Ordered collection of parts addressed by zero-based index
///
/// # Copy Semantics
///
/// `copy()` (and `Clone`) produce a message with the same parts by value.
/// The part vector is duplicated and each buffer's reference count is
/// bumped, so the cost is proportional to the number of parts. Replacing a
/// part in either message leaves the other untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    parts: Vec<Part>,
}

impl Message {
    /// Create an empty message
    #[inline]
    pub const fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Create a message from a list of parts
    #[inline]
    pub fn from_parts(parts: Vec<Part>) -> Self {
        Self { parts }
    }

    /// Create a message by copying each slice into its own part
    pub fn from_slices<T: AsRef<[u8]>>(slices: &[T]) -> Self {
        slices
            .iter()
            .map(|s| Part::from_slice(s.as_ref()))
            .collect()
    }

    /// Produce an independently mutable copy of this message
    #[inline]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Number of parts
    #[inline]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Check if the message holds no parts
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Get a part by index
    ///
    /// Returns `None` if index is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Part> {
        self.parts.get(index)
    }

    /// Get a mutable part by index
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Part> {
        self.parts.get_mut(index)
    }

    /// Get a part by a signed index taken from configuration
    ///
    /// Negative indices and indices `>= len()` are out of range.
    pub fn try_get(&self, index: i64) -> Result<&Part> {
        let len = self.parts.len();
        usize::try_from(index)
            .ok()
            .and_then(|i| self.parts.get(i))
            .ok_or(ProtocolError::out_of_range(index, len))
    }

    /// Replace a part by a signed index taken from configuration
    pub fn try_set(&mut self, index: i64, data: impl Into<Bytes>) -> Result<()> {
        let len = self.parts.len();
        let part = usize::try_from(index)
            .ok()
            .and_then(|i| self.parts.get_mut(i))
            .ok_or(ProtocolError::out_of_range(index, len))?;
        part.set(data);
        Ok(())
    }

    /// Append a part
    #[inline]
    pub fn push(&mut self, part: impl Into<Part>) {
        self.parts.push(part.into());
    }

    /// Iterate over all parts
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    /// Consume the message, returning its parts
    #[inline]
    pub fn into_parts(self) -> Vec<Part> {
        self.parts
    }

    /// Total bytes across all parts
    pub fn total_bytes(&self) -> usize {
        self.parts.iter().map(Part::len).sum()
    }
}

impl FromIterator<Part> for Message {
    fn from_iter<I: IntoIterator<Item = Part>>(iter: I) -> Self {
        Self {
            parts: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Message {
    type Item = &'a Part;
    type IntoIter = std::slice::Iter<'a, Part>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}
