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

use crate::stats::SortStatistics;
use disks_model::{index::DiskIndex, state::DiskState};

/// Direction of a single scan over the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanDirection {
    LeftToRight,
    RightToLeft,
}

impl std::fmt::Display for ScanDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanDirection::LeftToRight => write!(f, "left-to-right"),
            ScanDirection::RightToLeft => write!(f, "right-to-left"),
        }
    }
}

/// Trait for observing a sort run.
///
/// Monitors only watch. A sort always runs until the row is sorted, so
/// there is no way for a monitor to end it early.
pub trait SortMonitor {
    /// Called once with the working copy before the first pass.
    fn on_start(&mut self, state: &DiskState, statistics: &SortStatistics);

    /// Called after every swap. `left` is the position the dark disk left.
    fn on_swap(&mut self, _state: &DiskState, _left: DiskIndex, _statistics: &SortStatistics) {}

    /// Called after each directional scan.
    fn on_scan(
        &mut self,
        _state: &DiskState,
        _direction: ScanDirection,
        _statistics: &SortStatistics,
    ) {
    }

    /// Called after each completed pass.
    fn on_pass(&mut self, state: &DiskState, statistics: &SortStatistics);

    /// Called once with the sorted row.
    fn on_end(&mut self, state: &DiskState, statistics: &SortStatistics);

    /// Returns the name of the monitor.
    fn name(&self) -> &str;
}

impl std::fmt::Debug for dyn SortMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SortMonitor({})", self.name())
    }
}

impl std::fmt::Display for dyn SortMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SortMonitor({})", self.name())
    }
}
