// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Strongly typed disk positions.
//!
//! A `DiskIndex` names a position inside a `DiskState`. Keeping positions in
//! their own type stops counts (`light_count`, `total_count`) from being used
//! where a position is expected and vice versa, while compiling down to a
//! plain `usize`.

/// A position in a row of disks, counted from the left starting at zero.
///
/// # Examples
///
/// ```rust
/// use disks_model::index::DiskIndex;
///
/// let index = DiskIndex::new(3);
/// assert_eq!(index.get(), 3);
/// assert_eq!(index.right().get(), 4);
/// assert_eq!(format!("{}", index), "DiskIndex(3)");
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DiskIndex(usize);

impl DiskIndex {
    /// Creates a new `DiskIndex` from a raw position.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying position.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.0
    }

    /// Returns the position directly to the right of this one.
    #[inline(always)]
    pub const fn right(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns the position directly to the left of this one, or `None`
    /// if this is the leftmost position.
    #[inline(always)]
    pub const fn left(&self) -> Option<Self> {
        match self.0.checked_sub(1) {
            Some(index) => Some(Self(index)),
            None => None,
        }
    }
}

impl std::fmt::Debug for DiskIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiskIndex({})", self.0)
    }
}

impl std::fmt::Display for DiskIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiskIndex({})", self.0)
    }
}

impl From<usize> for DiskIndex {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl From<DiskIndex> for usize {
    fn from(index: DiskIndex) -> Self {
        index.0
    }
}
