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

//! Lawnmower (bidirectional) sorting.
//!
//! A lawnmower pass scans the row left to right, exactly like a sequential
//! pass, and then comes back right to left over indices `N - 2` down to `1`
//! with the same swap test. The way back carries light disks several steps
//! to the left in one sweep, so the row is sorted after `floor(k / 2)` passes
//! instead of `k - 1`. The number of swaps does not change: each swap still
//! removes exactly one dark-before-light pair.

use crate::{
    monitor::sort_monitor::{ScanDirection, SortMonitor},
    result::SortedDisks,
    sorter::{assert_alternating, swap_if_inverted, DiskSorter},
    stats::SortStatistics,
};
use disks_model::{index::DiskIndex, state::DiskState};
use std::time::Instant;

/// Sorts by alternating left-to-right and right-to-left scans until the row
/// is sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LawnmowerSorter;

impl LawnmowerSorter {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl DiskSorter for LawnmowerSorter {
    fn name(&self) -> &str {
        "LawnmowerSorter"
    }

    fn sort_with_monitor<M>(&self, before: &DiskState, monitor: &mut M) -> SortedDisks
    where
        M: SortMonitor + ?Sized,
    {
        assert_alternating("LawnmowerSorter", before);

        let start_time = Instant::now();
        let mut stats = SortStatistics::default();
        let mut after = before.clone();
        let last_pair = after.total_count() - 2;

        monitor.on_start(&after, &stats);

        while !after.is_sorted() {
            for left in 0..=last_pair {
                swap_if_inverted(&mut after, DiskIndex::new(left), &mut stats, monitor);
            }
            stats.on_scan();
            monitor.on_scan(&after, ScanDirection::LeftToRight, &stats);

            // Index 0 is skipped on the way back.
            for left in (1..=last_pair).rev() {
                swap_if_inverted(&mut after, DiskIndex::new(left), &mut stats, monitor);
            }
            stats.on_scan();
            monitor.on_scan(&after, ScanDirection::RightToLeft, &stats);

            stats.on_pass();
            monitor.on_pass(&after, &stats);
        }

        debug_assert_eq!(after.light_count(), before.light_count());

        stats.set_total_time(start_time.elapsed());
        monitor.on_end(&after, &stats);
        SortedDisks::with_statistics(after, stats)
    }
}

/// Sorts a copy of `before` with [`LawnmowerSorter`].
///
/// # Panics
///
/// Panics if `before` is not alternating.
///
/// # Examples
///
/// ```rust
/// use disks_model::state::DiskState;
/// use disks_sort::lawnmower::sort_lawnmower;
///
/// let sorted = sort_lawnmower(&DiskState::alternating(4));
/// assert_eq!(sorted.after().to_text(), "L L L L D D D D");
/// assert_eq!(sorted.swap_count(), 6);
/// assert_eq!(sorted.statistics().passes, 2);
/// ```
#[inline]
pub fn sort_lawnmower(before: &DiskState) -> SortedDisks {
    LawnmowerSorter.sort(before)
}
