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

//! Console progress output for sort runs.
//!
//! `LogMonitor` prints a fixed-width table to stdout: a header when the sort
//! starts, one line per completed pass, and a closing rule with the totals.
//! Rows can be long for large inputs, so printing the row text is optional.

use crate::monitor::sort_monitor::SortMonitor;
use crate::stats::SortStatistics;
use disks_model::state::DiskState;
use std::time::Instant;

const RULE_WIDTH: usize = 52;

#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
    show_rows: bool,
    swaps_at_last_pass: u64,
}

impl LogMonitor {
    pub fn new(show_rows: bool) -> Self {
        Self {
            start_time: Instant::now(),
            show_rows,
            swaps_at_last_pass: 0,
        }
    }

    /// Returns `true` if every line also prints the current row.
    #[inline]
    pub fn show_rows(&self) -> bool {
        self.show_rows
    }

    fn header(&self) -> String {
        let mut header = format!(
            "{:<9} | {:<7} | {:<11} | {:<13}",
            "Elapsed", "Pass", "Pass Swaps", "Total Swaps"
        );
        if self.show_rows {
            header.push_str(" | Row");
        }
        header
    }

    fn line(
        &self,
        elapsed: f32,
        pass: u64,
        pass_swaps: u64,
        total_swaps: u64,
        row: &str,
    ) -> String {
        let elapsed_field = format!("{:.3}s", elapsed);
        let mut line = format!(
            "{:<9} | {:<7} | {:<11} | {:<13}",
            elapsed_field, pass, pass_swaps, total_swaps
        );
        if self.show_rows {
            line.push_str(" | ");
            line.push_str(row);
        }
        line
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(true)
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogMonitor(show_rows: {})", self.show_rows)
    }
}

impl SortMonitor for LogMonitor {
    fn on_start(&mut self, state: &DiskState, _statistics: &SortStatistics) {
        self.start_time = Instant::now();
        self.swaps_at_last_pass = 0;

        println!("{}", self.header());
        println!("{}", "-".repeat(RULE_WIDTH));
        if self.show_rows {
            println!("{}", self.line(0.0, 0, 0, 0, &state.to_text()));
        }
    }

    fn on_pass(&mut self, state: &DiskState, statistics: &SortStatistics) {
        let elapsed = self.start_time.elapsed().as_secs_f32();
        let pass_swaps = statistics.swaps.saturating_sub(self.swaps_at_last_pass);
        let row = if self.show_rows {
            state.to_text()
        } else {
            String::new()
        };

        println!(
            "{}",
            self.line(
                elapsed,
                statistics.passes,
                pass_swaps,
                statistics.swaps,
                &row
            )
        );
        self.swaps_at_last_pass = statistics.swaps;
    }

    fn on_end(&mut self, _state: &DiskState, statistics: &SortStatistics) {
        println!("{}", "-".repeat(RULE_WIDTH));
        println!(
            "Sort finished after {} passes and {} swaps.",
            statistics.passes, statistics.swaps
        );
    }

    fn name(&self) -> &str {
        "LogMonitor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_with_and_without_rows() {
        assert_eq!(
            LogMonitor::new(false).header(),
            "Elapsed   | Pass    | Pass Swaps  | Total Swaps  "
        );
        assert!(LogMonitor::new(true).header().ends_with(" | Row"));
    }

    #[test]
    fn test_line_formatting() {
        let monitor = LogMonitor::new(true);
        assert_eq!(
            monitor.line(0.0, 2, 3, 5, "L L D D"),
            "0.000s    | 2       | 3           | 5             | L L D D"
        );

        let quiet = LogMonitor::new(false);
        assert_eq!(
            quiet.line(0.0, 2, 3, 5, ""),
            "0.000s    | 2       | 3           | 5            "
        );
    }

    #[test]
    fn test_tracks_swaps_per_pass() {
        let mut monitor = LogMonitor::new(false);
        let state = DiskState::alternating(4);
        let mut stats = SortStatistics::default();

        monitor.on_start(&state, &stats);
        stats.passes = 1;
        stats.swaps = 3;
        monitor.on_pass(&state, &stats);
        assert_eq!(monitor.swaps_at_last_pass, 3);

        stats.passes = 2;
        stats.swaps = 5;
        monitor.on_pass(&state, &stats);
        assert_eq!(monitor.swaps_at_last_pass, 5);
        monitor.on_end(&state, &stats);
    }

    #[test]
    fn test_name_and_display() {
        let monitor = LogMonitor::default();
        assert_eq!(monitor.name(), "LogMonitor");
        assert!(monitor.show_rows());
        assert_eq!(format!("{}", monitor), "LogMonitor(show_rows: true)");
    }
}
