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

//! Sort outcome reporting.
//!
//! `SortedDisks` is the single transport object a sorter hands back: the
//! final row, owned and independent of the caller's input, together with the
//! statistics of the run. The swap count is read from those statistics, so
//! it always equals the number of swaps the sorter actually applied. Only
//! the sorters in this crate construct outcomes.
//!
//! Two outcomes are equal when they hold the same row and the same swap
//! count. Timing and scan counters are ignored, so repeated sorts of the same
//! input compare equal.

use crate::stats::SortStatistics;
use disks_model::state::DiskState;

/// The final row of a sort together with the work needed to reach it.
#[derive(Debug, Clone)]
pub struct SortedDisks {
    after: DiskState,
    statistics: SortStatistics,
}

impl SortedDisks {
    /// Creates an outcome from a final row and the statistics of the run
    /// that produced it.
    #[inline]
    pub(crate) fn with_statistics(after: DiskState, statistics: SortStatistics) -> Self {
        Self { after, statistics }
    }

    /// Returns the final row.
    #[inline]
    pub fn after(&self) -> &DiskState {
        &self.after
    }

    /// Returns the number of adjacent swaps performed.
    #[inline]
    pub fn swap_count(&self) -> u64 {
        self.statistics.swaps
    }

    /// Returns the statistics.
    #[inline]
    pub fn statistics(&self) -> &SortStatistics {
        &self.statistics
    }

    /// Consumes the outcome and returns the final row.
    #[inline]
    pub fn into_after(self) -> DiskState {
        self.after
    }
}

impl PartialEq for SortedDisks {
    fn eq(&self, other: &Self) -> bool {
        self.swap_count() == other.swap_count() && self.after == other.after
    }
}

impl Eq for SortedDisks {}

impl std::fmt::Display for SortedDisks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Sorted Disks")?;
        writeln!(f, "   After:      {}", self.after)?;
        writeln!(f, "   Swap Count: {}", self.swap_count())?;
        Ok(())
    }
}
