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

//! # Disks Sort
//!
//! Adjacent-swap sorters for the alternating disks problem. Given a row of
//! `2k` alternating disks, each sorter moves all light disks to the left of
//! all dark disks and reports how many swaps it needed.
//!
//! ## Modules
//!
//! - `sorter`: The `DiskSorter` trait shared by both strategies.
//! - `sequential`: Repeated left-to-right passes (`sort_sequential`).
//! - `lawnmower`: Left-to-right followed by right-to-left scans per pass
//!   (`sort_lawnmower`).
//! - `strategy`: `SortStrategy`, selecting a sorter by value or name.
//! - `result`: `SortedDisks`, the final row plus swap count and statistics.
//! - `stats`: `SortStatistics`, counters collected during a run.
//! - `monitor`: Observers for progress logging and custom instrumentation.
//!
//! ## Usage
//!
//! ```rust
//! use disks_model::state::DiskState;
//! use disks_sort::{lawnmower::sort_lawnmower, sequential::sort_sequential};
//!
//! let before = DiskState::alternating(4);
//! let sequential = sort_sequential(&before);
//! let lawnmower = sort_lawnmower(&before);
//!
//! assert_eq!(sequential.after(), lawnmower.after());
//! assert_eq!(sequential.swap_count(), lawnmower.swap_count());
//! assert!(lawnmower.statistics().passes <= sequential.statistics().passes);
//! ```

pub mod lawnmower;
pub mod monitor;
pub mod result;
pub mod sequential;
pub mod sorter;
pub mod stats;
pub mod strategy;
