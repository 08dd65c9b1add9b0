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

//! Sequential (left-to-right) sorting.
//!
//! Each pass walks the row from the left, swapping every dark disk that has a
//! light disk directly to its right. A dark disk therefore travels right
//! until it meets another dark disk, and the row is checked for sortedness
//! before every pass. On the alternating row with `k` light disks this takes
//! `k - 1` passes and `k(k - 1) / 2` swaps, the same swap count as any other
//! adjacent-swap strategy since every swap removes exactly one dark-before-light
//! pair.

use crate::{
    monitor::sort_monitor::{ScanDirection, SortMonitor},
    result::SortedDisks,
    sorter::{assert_alternating, swap_if_inverted, DiskSorter},
    stats::SortStatistics,
};
use disks_model::{index::DiskIndex, state::DiskState};
use std::time::Instant;

/// Sorts by repeating left-to-right passes until the row is sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SequentialSorter;

impl SequentialSorter {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl DiskSorter for SequentialSorter {
    fn name(&self) -> &str {
        "SequentialSorter"
    }

    fn sort_with_monitor<M>(&self, before: &DiskState, monitor: &mut M) -> SortedDisks
    where
        M: SortMonitor + ?Sized,
    {
        assert_alternating("SequentialSorter", before);

        let start_time = Instant::now();
        let mut stats = SortStatistics::default();
        let mut after = before.clone();
        // Exclusive bound on left indices: the last pair starts at N - 2.
        let pair_end = after.total_count() - 1;

        monitor.on_start(&after, &stats);

        while !after.is_sorted() {
            for left in 0..pair_end {
                swap_if_inverted(&mut after, DiskIndex::new(left), &mut stats, monitor);
            }
            stats.on_scan();
            monitor.on_scan(&after, ScanDirection::LeftToRight, &stats);

            stats.on_pass();
            monitor.on_pass(&after, &stats);
        }

        debug_assert_eq!(after.light_count(), before.light_count());

        stats.set_total_time(start_time.elapsed());
        monitor.on_end(&after, &stats);
        SortedDisks::with_statistics(after, stats)
    }
}

/// Sorts a copy of `before` with [`SequentialSorter`].
///
/// # Panics
///
/// Panics if `before` is not alternating.
///
/// # Examples
///
/// ```rust
/// use disks_model::state::DiskState;
/// use disks_sort::sequential::sort_sequential;
///
/// let sorted = sort_sequential(&DiskState::alternating(4));
/// assert_eq!(sorted.after().to_text(), "L L L L D D D D");
/// assert_eq!(sorted.swap_count(), 6);
/// ```
#[inline]
pub fn sort_sequential(before: &DiskState) -> SortedDisks {
    SequentialSorter.sort(before)
}
