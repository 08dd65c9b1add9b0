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

//! Selecting a sorter by name.
//!
//! `SortStrategy` lets hosts (command-line drivers, the C bindings) pick a
//! sorter at runtime from a string or an enum value without touching the
//! sorter types directly.

use crate::{
    lawnmower::LawnmowerSorter, monitor::sort_monitor::SortMonitor, result::SortedDisks,
    sequential::SequentialSorter, sorter::DiskSorter,
};
use disks_model::state::DiskState;
use std::str::FromStr;

/// The available sorting strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortStrategy {
    /// Repeated left-to-right passes.
    #[default]
    Sequential,
    /// Alternating left-to-right and right-to-left scans.
    Lawnmower,
}

impl SortStrategy {
    /// All strategies, in declaration order.
    pub const ALL: [SortStrategy; 2] = [SortStrategy::Sequential, SortStrategy::Lawnmower];

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Lawnmower => "lawnmower",
        }
    }

    /// Sorts a copy of `before` with this strategy.
    ///
    /// # Panics
    ///
    /// Panics if `before` is not alternating.
    #[inline]
    pub fn sort(&self, before: &DiskState) -> SortedDisks {
        match self {
            Self::Sequential => SequentialSorter.sort(before),
            Self::Lawnmower => LawnmowerSorter.sort(before),
        }
    }

    /// Sorts a copy of `before` with this strategy, reporting to `monitor`.
    ///
    /// # Panics
    ///
    /// Panics if `before` is not alternating.
    #[inline]
    pub fn sort_with_monitor<M>(&self, before: &DiskState, monitor: &mut M) -> SortedDisks
    where
        M: SortMonitor + ?Sized,
    {
        match self {
            Self::Sequential => SequentialSorter.sort_with_monitor(before, monitor),
            Self::Lawnmower => LawnmowerSorter.sort_with_monitor(before, monitor),
        }
    }
}

impl std::fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSortStrategyError {
    /// The string that failed to parse.
    pub input: String,
}

impl std::fmt::Display for ParseSortStrategyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown sort strategy '{}', expected 'sequential' or 'lawnmower'",
            self.input
        )
    }
}

impl std::error::Error for ParseSortStrategyError {}

impl FromStr for SortStrategy {
    type Err = ParseSortStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" | "left-to-right" | "ltr" => Ok(Self::Sequential),
            "lawnmower" => Ok(Self::Lawnmower),
            _ => Err(ParseSortStrategyError {
                input: s.to_string(),
            }),
        }
    }
}
