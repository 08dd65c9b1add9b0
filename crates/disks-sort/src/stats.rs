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

//! Statistics reporting for sort runs.
//!
//! `SortStatistics` counts what a sorter did: completed passes, directional
//! scans, neighbor comparisons and swaps, plus the wall time of the run. The
//! counters are updated from the innermost loop, so updates are inline and
//! saturate instead of trapping on overflow.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortStatistics {
    /// Number of completed passes. A lawnmower pass counts once even though
    /// it scans the row in both directions.
    pub passes: u64,

    /// Number of directional scans over the row.
    pub scans: u64,

    /// Number of neighbor pairs inspected.
    pub comparisons: u64,

    /// Number of adjacent swaps performed.
    pub swaps: u64,

    /// Total time taken by the sort.
    pub time_total: Duration,
}

impl Default for SortStatistics {
    fn default() -> Self {
        Self {
            passes: 0,
            scans: 0,
            comparisons: 0,
            swaps: 0,
            time_total: Duration::ZERO,
        }
    }
}

impl SortStatistics {
    #[inline]
    pub fn on_pass(&mut self) {
        self.passes = self.passes.saturating_add(1);
    }

    #[inline]
    pub fn on_scan(&mut self) {
        self.scans = self.scans.saturating_add(1);
    }

    #[inline]
    pub fn on_comparison(&mut self) {
        self.comparisons = self.comparisons.saturating_add(1);
    }

    #[inline]
    pub fn on_swap(&mut self) {
        self.swaps = self.swaps.saturating_add(1);
    }

    /// Sets the total time taken by the sort.
    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    /// Returns the share of comparisons that led to a swap, in `[0, 1]`.
    #[inline]
    pub fn swap_ratio(&self) -> f64 {
        if self.comparisons == 0 {
            return 0.0;
        }
        self.swaps as f64 / self.comparisons as f64
    }
}

impl std::fmt::Display for SortStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Disk Sort Statistics:")?;
        writeln!(f, "   Passes:       {}", self.passes)?;
        writeln!(f, "   Scans:        {}", self.scans)?;
        writeln!(f, "   Comparisons:  {}", self.comparisons)?;
        writeln!(f, "   Swaps:        {}", self.swaps)?;
        writeln!(f, "   Total Time:   {:?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zeroed() {
        let stats = SortStatistics::default();
        assert_eq!(stats.passes, 0);
        assert_eq!(stats.scans, 0);
        assert_eq!(stats.comparisons, 0);
        assert_eq!(stats.swaps, 0);
        assert_eq!(stats.time_total, Duration::ZERO);
        assert_eq!(stats.swap_ratio(), 0.0);
    }

    #[test]
    fn test_counters() {
        let mut stats = SortStatistics::default();
        stats.on_pass();
        stats.on_scan();
        stats.on_scan();
        for _ in 0..4 {
            stats.on_comparison();
        }
        stats.on_swap();

        assert_eq!(stats.passes, 1);
        assert_eq!(stats.scans, 2);
        assert_eq!(stats.comparisons, 4);
        assert_eq!(stats.swaps, 1);
        assert_eq!(stats.swap_ratio(), 0.25);
    }

    #[test]
    fn test_counters_saturate() {
        let mut stats = SortStatistics {
            swaps: u64::MAX,
            ..SortStatistics::default()
        };
        stats.on_swap();
        assert_eq!(stats.swaps, u64::MAX);
    }

    #[test]
    fn test_display() {
        let stats = SortStatistics {
            passes: 3,
            scans: 3,
            comparisons: 21,
            swaps: 6,
            time_total: Duration::ZERO,
        };
        let text = format!("{}", stats);
        assert!(text.starts_with("Disk Sort Statistics:\n"));
        assert!(text.contains("   Passes:       3\n"));
        assert!(text.contains("   Comparisons:  21\n"));
        assert!(text.contains("   Swaps:        6\n"));
    }
}
