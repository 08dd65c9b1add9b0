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

//! Monitoring combinator for sort runs.
//!
//! `CompositeSortMonitor` forwards every event to its children in insertion
//! order, so logging and custom observers can be combined without the sorter
//! knowing about either.

use crate::monitor::sort_monitor::{ScanDirection, SortMonitor};
use crate::stats::SortStatistics;
use disks_model::{index::DiskIndex, state::DiskState};

/// A sort monitor that forwards events to all of its child monitors.
pub struct CompositeSortMonitor<'a> {
    monitors: Vec<Box<dyn SortMonitor + 'a>>,
}

impl<'a> Default for CompositeSortMonitor<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CompositeSortMonitor<'a> {
    /// Creates a new empty `CompositeSortMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeSortMonitor` with room for `capacity` monitors.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SortMonitor + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn SortMonitor + 'a>) {
        self.monitors.push(monitor);
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl std::fmt::Debug for CompositeSortMonitor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeSortMonitor")
            .field("monitors", &self.monitors)
            .finish()
    }
}

impl SortMonitor for CompositeSortMonitor<'_> {
    fn on_start(&mut self, state: &DiskState, statistics: &SortStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_start(state, statistics);
        }
    }

    fn on_swap(&mut self, state: &DiskState, left: DiskIndex, statistics: &SortStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_swap(state, left, statistics);
        }
    }

    fn on_scan(
        &mut self,
        state: &DiskState,
        direction: ScanDirection,
        statistics: &SortStatistics,
    ) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_scan(state, direction, statistics);
        }
    }

    fn on_pass(&mut self, state: &DiskState, statistics: &SortStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_pass(state, statistics);
        }
    }

    fn on_end(&mut self, state: &DiskState, statistics: &SortStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_end(state, statistics);
        }
    }

    fn name(&self) -> &str {
        "CompositeSortMonitor"
    }
}
