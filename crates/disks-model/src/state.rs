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

//! The row of disks.
//!
//! `DiskState` holds an even number of disks, half light and half dark, and
//! offers the only mutation the problem allows: swapping two neighbors.
//! Rows always start out in the alternating pattern `L D L D ...`; every
//! later configuration is reached through `swap_adjacent`, so the number of
//! light and dark disks never changes after construction.
//!
//! Disks are stored one bit each in a `FixedBitSet` where a set bit marks a
//! dark disk. Contract violations (an empty row, an out-of-bounds index, a
//! swap without a right neighbor) are programmer errors and panic with a
//! message naming the offending call. Hosts that build rows from untrusted
//! input can go through `DiskState::try_alternating` instead.

use crate::{color::DiskColor, index::DiskIndex};
use fixedbitset::FixedBitSet;

/// The error type for fallible row construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiskStateError {
    /// A row needs at least one light and one dark disk.
    NoDisks,
    /// `2 * light_count` does not fit into `usize`.
    CapacityOverflow { light_count: usize },
}

impl std::fmt::Display for DiskStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoDisks => write!(f, "A row of disks needs at least one light disk"),
            Self::CapacityOverflow { light_count } => write!(
                f,
                "A row with {} light disks exceeds the addressable size",
                light_count
            ),
        }
    }
}

impl std::error::Error for DiskStateError {}

/// A row of light and dark disks with equal counts of each.
///
/// # Examples
///
/// ```rust
/// use disks_model::{color::DiskColor, index::DiskIndex, state::DiskState};
///
/// let mut state = DiskState::alternating(2);
/// assert_eq!(state.to_text(), "L D L D");
/// assert!(state.is_alternating());
///
/// state.swap_adjacent(DiskIndex::new(1));
/// assert_eq!(state.get(DiskIndex::new(1)), DiskColor::Light);
/// assert!(state.is_sorted());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct DiskState {
    /// `dark[i]` is set iff the disk at position `i` is dark.
    dark: FixedBitSet,
}

impl DiskState {
    /// Builds a row of `2 * light_count` disks alternating light and dark,
    /// starting with a light disk at index 0.
    ///
    /// # Panics
    ///
    /// Panics if `light_count` is zero.
    pub fn alternating(light_count: usize) -> Self {
        match Self::try_alternating(light_count) {
            Ok(state) => state,
            Err(DiskStateError::NoDisks) => panic!(
                "called `DiskState::alternating` with zero light disks: a row needs at least one dark disk"
            ),
            Err(e) => panic!(
                "called `DiskState::alternating` with an invalid size: {}",
                e
            ),
        }
    }

    /// Fallible counterpart of [`DiskState::alternating`].
    ///
    /// Returns `DiskStateError::NoDisks` when `light_count` is zero.
    pub fn try_alternating(light_count: usize) -> Result<Self, DiskStateError> {
        if light_count == 0 {
            return Err(DiskStateError::NoDisks);
        }
        let total = light_count
            .checked_mul(2)
            .ok_or(DiskStateError::CapacityOverflow { light_count })?;

        let mut dark = FixedBitSet::with_capacity(total);
        for index in (1..total).step_by(2) {
            dark.insert(index);
        }

        debug_assert_eq!(dark.count_ones(..), light_count);
        Ok(Self { dark })
    }

    /// Returns the total number of disks in the row.
    #[inline]
    pub fn total_count(&self) -> usize {
        self.dark.len()
    }

    /// Returns the number of dark disks, which is always half the row.
    #[inline]
    pub fn dark_count(&self) -> usize {
        self.total_count() / 2
    }

    /// Returns the number of light disks, which is always half the row.
    #[inline]
    pub fn light_count(&self) -> usize {
        self.dark_count()
    }

    /// Returns `true` if `index` addresses a disk in this row.
    #[inline]
    pub fn is_index(&self, index: DiskIndex) -> bool {
        index.get() < self.total_count()
    }

    /// Returns the color of the disk at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn get(&self, index: DiskIndex) -> DiskColor {
        assert!(
            self.is_index(index),
            "called `DiskState::get` with index out of bounds: the len is {} but the index is {}",
            self.total_count(),
            index.get()
        );

        self.color_at(index.get())
    }

    /// Swaps the disk at `left_index` with its right neighbor.
    ///
    /// # Panics
    ///
    /// Panics if `left_index` or `left_index + 1` is out of bounds.
    #[inline]
    pub fn swap_adjacent(&mut self, left_index: DiskIndex) {
        let left = left_index.get();
        assert!(
            left < self.total_count() && left + 1 < self.total_count(),
            "called `DiskState::swap_adjacent` with index out of bounds: the len is {} but the index pair is ({}, {})",
            self.total_count(),
            left,
            left.saturating_add(1)
        );

        let left_dark = self.dark.contains(left);
        let right_dark = self.dark.contains(left + 1);
        self.dark.set(left, right_dark);
        self.dark.set(left + 1, left_dark);
    }

    /// Returns `true` if the disk at index 0 is light and no two neighbors
    /// share a color.
    pub fn is_alternating(&self) -> bool {
        if self.color_at(0).is_dark() {
            return false;
        }

        (0..self.total_count() - 1).all(|i| self.color_at(i) != self.color_at(i + 1))
    }

    /// Returns `true` if every light disk sits to the left of every dark disk.
    ///
    /// Because the counts are fixed, it is enough that the first
    /// `light_count()` positions are all light.
    #[inline]
    pub fn is_sorted(&self) -> bool {
        self.dark.count_ones(..self.light_count()) == 0
    }

    /// Counts the pairs `(i, j)` with `i < j` where `i` is dark and `j` is
    /// light. Every adjacent swap of a dark disk with the light disk to its
    /// right removes exactly one such pair, so this is the number of swaps
    /// any adjacent-swap sort needs to reach the sorted row.
    pub fn count_dark_before_light(&self) -> u64 {
        let mut dark_seen = 0u64;
        let mut inversions = 0u64;
        for color in self.iter() {
            match color {
                DiskColor::Dark => dark_seen += 1,
                DiskColor::Light => inversions += dark_seen,
            }
        }
        inversions
    }

    /// Returns an iterator over the disk colors from left to right.
    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = DiskColor> + ExactSizeIterator + '_ {
        (0..self.total_count()).map(move |i| self.color_at(i))
    }

    /// Renders the row as `L`/`D` codes separated by single spaces.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.total_count() * 2);
        for (i, color) in self.iter().enumerate() {
            if i > 0 {
                text.push(' ');
            }
            text.push(color.code());
        }
        text
    }

    #[inline(always)]
    fn color_at(&self, index: usize) -> DiskColor {
        if self.dark.contains(index) {
            DiskColor::Dark
        } else {
            DiskColor::Light
        }
    }
}

impl std::fmt::Debug for DiskState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiskState[{}]", self.to_text())
    }
}

impl std::fmt::Display for DiskState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn di(i: usize) -> DiskIndex {
        DiskIndex::new(i)
    }

    #[test]
    fn test_alternating_construction() {
        for k in 1..=64 {
            let state = DiskState::alternating(k);
            assert_eq!(state.total_count(), 2 * k);
            assert_eq!(state.light_count(), k);
            assert_eq!(state.dark_count(), k);
            assert!(state.is_alternating());
            assert_eq!(state.get(di(0)), DiskColor::Light);

            let light = state.iter().filter(|c| c.is_light()).count();
            assert_eq!(light, k);
        }
    }

    #[test]
    #[should_panic(expected = "called `DiskState::alternating` with zero light disks")]
    fn test_alternating_panics_on_zero() {
        let _ = DiskState::alternating(0);
    }

    #[test]
    #[should_panic(expected = "called `DiskState::alternating` with an invalid size")]
    fn test_alternating_panics_on_overflow() {
        let _ = DiskState::alternating(usize::MAX);
    }

    #[test]
    fn test_try_alternating() {
        assert_eq!(DiskState::try_alternating(0), Err(DiskStateError::NoDisks));
        assert_eq!(
            DiskState::try_alternating(usize::MAX),
            Err(DiskStateError::CapacityOverflow {
                light_count: usize::MAX
            })
        );
        assert_eq!(
            DiskState::try_alternating(3).unwrap(),
            DiskState::alternating(3)
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", DiskStateError::NoDisks),
            "A row of disks needs at least one light disk"
        );
    }

    #[test]
    fn test_is_index() {
        let state = DiskState::alternating(2);
        assert!(state.is_index(di(0)));
        assert!(state.is_index(di(3)));
        assert!(!state.is_index(di(4)));
    }

    #[test]
    fn test_get_pattern() {
        let state = DiskState::alternating(3);
        let colors: Vec<DiskColor> = (0..6).map(|i| state.get(di(i))).collect();
        assert_eq!(
            colors,
            vec![
                DiskColor::Light,
                DiskColor::Dark,
                DiskColor::Light,
                DiskColor::Dark,
                DiskColor::Light,
                DiskColor::Dark
            ]
        );
    }

    #[test]
    #[should_panic(expected = "called `DiskState::get` with index out of bounds")]
    fn test_get_out_of_bounds() {
        let state = DiskState::alternating(2);
        let _ = state.get(di(4));
    }

    #[test]
    fn test_swap_adjacent() {
        let mut state = DiskState::alternating(2);
        state.swap_adjacent(di(0));
        assert_eq!(state.to_text(), "D L L D");

        state.swap_adjacent(di(2));
        assert_eq!(state.to_text(), "D L D L");

        // Swapping equal colors is a no-op on the content.
        let mut same = DiskState::alternating(2);
        same.swap_adjacent(di(1));
        same.swap_adjacent(di(2));
        assert_eq!(same.to_text(), "L L D D");
        same.swap_adjacent(di(0));
        assert_eq!(same.to_text(), "L L D D");
    }

    #[test]
    #[should_panic(expected = "called `DiskState::swap_adjacent` with index out of bounds")]
    fn test_swap_without_right_neighbor() {
        let mut state = DiskState::alternating(2);
        let last = state.total_count() - 1;
        state.swap_adjacent(di(last));
    }

    #[test]
    fn test_swap_on_last_valid_pair() {
        let mut state = DiskState::alternating(2);
        let last_pair = state.total_count() - 2;
        state.swap_adjacent(di(last_pair));
        assert_eq!(state.to_text(), "L D D L");
    }

    #[test]
    fn test_is_alternating() {
        let mut state = DiskState::alternating(3);
        assert!(state.is_alternating());

        state.swap_adjacent(di(1));
        assert!(!state.is_alternating());

        // Dark first, even though neighbors still differ.
        let mut shifted = DiskState::alternating(1);
        shifted.swap_adjacent(di(0));
        assert_eq!(shifted.to_text(), "D L");
        assert!(!shifted.is_alternating());
    }

    #[test]
    fn test_is_sorted() {
        assert!(DiskState::alternating(1).is_sorted());
        assert!(!DiskState::alternating(2).is_sorted());

        let mut state = DiskState::alternating(2);
        state.swap_adjacent(di(1));
        assert_eq!(state.to_text(), "L L D D");
        assert!(state.is_sorted());
    }

    #[test]
    fn test_count_dark_before_light() {
        for k in 1..=32u64 {
            let state = DiskState::alternating(k as usize);
            assert_eq!(state.count_dark_before_light(), k * (k - 1) / 2);
        }
    }

    #[test]
    fn test_to_text_and_display() {
        let state = DiskState::alternating(4);
        assert_eq!(state.to_text(), "L D L D L D L D");
        assert_eq!(format!("{}", state), "L D L D L D L D");
        assert_eq!(format!("{:?}", state), "DiskState[L D L D L D L D]");
        assert_eq!(DiskState::alternating(1).to_text(), "L D");
    }

    #[test]
    fn test_equality() {
        let a = DiskState::alternating(3);
        let mut b = DiskState::alternating(3);
        assert_eq!(a, b);

        b.swap_adjacent(di(1));
        assert_ne!(a, b);
        b.swap_adjacent(di(1));
        assert_eq!(a, b);

        assert_ne!(DiskState::alternating(2), DiskState::alternating(3));
    }

    #[test]
    fn test_iter_is_double_ended() {
        let state = DiskState::alternating(2);
        let reversed: String = state.iter().rev().map(|c| c.code()).collect();
        assert_eq!(reversed, "DLDL");
        assert_eq!(state.iter().len(), 4);
    }

    #[test]
    fn test_random_swaps_conserve_counts() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..50 {
            let k = rng.random_range(1..=40);
            let mut state = DiskState::alternating(k);
            let mut inversions = state.count_dark_before_light() as i64;

            for _ in 0..200 {
                let left = rng.random_range(0..state.total_count() - 1);
                let before = (state.get(di(left)), state.get(di(left + 1)));
                state.swap_adjacent(di(left));

                let expected = match before {
                    (DiskColor::Dark, DiskColor::Light) => inversions - 1,
                    (DiskColor::Light, DiskColor::Dark) => inversions + 1,
                    _ => inversions,
                };
                inversions = state.count_dark_before_light() as i64;
                assert_eq!(inversions, expected);

                let dark = state.iter().filter(|c| c.is_dark()).count();
                assert_eq!(dark, k);
                assert_eq!(state.total_count(), 2 * k);
            }
        }
    }
}
