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

//! The common interface of the disk sorters.
//!
//! Both sorters share the same contract: the input must be alternating, the
//! caller's row is never touched, and the returned `SortedDisks` holds a
//! sorted copy together with the statistics of the run. They also share the
//! elementary step: look at one neighbor pair and swap it if a dark disk sits
//! directly left of a light disk. No other pair is ever swapped.

use crate::{
    monitor::{no_op::NoOperationMonitor, sort_monitor::SortMonitor},
    result::SortedDisks,
    stats::SortStatistics,
};
use disks_model::{index::DiskIndex, state::DiskState};

/// A strategy that sorts an alternating row using adjacent swaps.
pub trait DiskSorter {
    /// Returns the name of the sorter.
    fn name(&self) -> &str;

    /// Sorts a copy of `before`, reporting progress to `monitor`.
    ///
    /// # Panics
    ///
    /// Panics if `before` is not alternating.
    fn sort_with_monitor<M>(&self, before: &DiskState, monitor: &mut M) -> SortedDisks
    where
        M: SortMonitor + ?Sized;

    /// Sorts a copy of `before`.
    ///
    /// # Panics
    ///
    /// Panics if `before` is not alternating.
    #[inline]
    fn sort(&self, before: &DiskState) -> SortedDisks {
        self.sort_with_monitor(before, &mut NoOperationMonitor::new())
    }
}

/// Compares the pair starting at `left` and swaps it if it is dark-light.
#[inline(always)]
pub(crate) fn swap_if_inverted<M>(
    state: &mut DiskState,
    left: DiskIndex,
    statistics: &mut SortStatistics,
    monitor: &mut M,
) where
    M: SortMonitor + ?Sized,
{
    statistics.on_comparison();
    if state.get(left).is_dark() && state.get(left.right()).is_light() {
        state.swap_adjacent(left);
        statistics.on_swap();
        monitor.on_swap(state, left, statistics);
    }
}

/// Asserts the shared precondition of every sorter.
#[inline]
pub(crate) fn assert_alternating(sorter: &str, before: &DiskState) {
    assert!(
        before.is_alternating(),
        "called `{}::sort` with a disk state that is not alternating: {}",
        sorter,
        before
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_if_inverted_only_swaps_dark_light() {
        let mut state = DiskState::alternating(2);
        let mut stats = SortStatistics::default();
        let mut monitor = NoOperationMonitor::new();

        // L D: left alone.
        swap_if_inverted(&mut state, DiskIndex::new(0), &mut stats, &mut monitor);
        assert_eq!(state.to_text(), "L D L D");

        // D L: swapped.
        swap_if_inverted(&mut state, DiskIndex::new(1), &mut stats, &mut monitor);
        assert_eq!(state.to_text(), "L L D D");

        // L L and D D: left alone.
        swap_if_inverted(&mut state, DiskIndex::new(0), &mut stats, &mut monitor);
        swap_if_inverted(&mut state, DiskIndex::new(2), &mut stats, &mut monitor);
        assert_eq!(state.to_text(), "L L D D");

        assert_eq!(stats.comparisons, 4);
        assert_eq!(stats.swaps, 1);
    }

    #[test]
    #[should_panic(
        expected = "called `ExampleSorter::sort` with a disk state that is not alternating: L L D D"
    )]
    fn test_assert_alternating_panics() {
        let mut state = DiskState::alternating(2);
        state.swap_adjacent(DiskIndex::new(1));
        assert_alternating("ExampleSorter", &state);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::monitor::sort_monitor::{ScanDirection, SortMonitor};
    use crate::stats::SortStatistics;
    use disks_model::{index::DiskIndex, state::DiskState};

    /// Counts events and keeps the row seen after each pass.
    #[derive(Debug, Default)]
    pub(crate) struct CountingMonitor {
        pub starts: u64,
        pub swaps: u64,
        pub scans: Vec<ScanDirection>,
        pub passes: Vec<String>,
        pub ends: u64,
        pub last_swap: Option<DiskIndex>,
    }

    impl SortMonitor for CountingMonitor {
        fn on_start(&mut self, _state: &DiskState, _statistics: &SortStatistics) {
            self.starts += 1;
        }

        fn on_swap(&mut self, _state: &DiskState, left: DiskIndex, statistics: &SortStatistics) {
            self.swaps += 1;
            assert_eq!(self.swaps, statistics.swaps);
            self.last_swap = Some(left);
        }

        fn on_scan(
            &mut self,
            _state: &DiskState,
            direction: ScanDirection,
            _statistics: &SortStatistics,
        ) {
            self.scans.push(direction);
        }

        fn on_pass(&mut self, state: &DiskState, _statistics: &SortStatistics) {
            self.passes.push(state.to_text());
        }

        fn on_end(&mut self, state: &DiskState, _statistics: &SortStatistics) {
            assert!(state.is_sorted());
            self.ends += 1;
        }

        fn name(&self) -> &str {
            "CountingMonitor"
        }
    }
}
