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

use crate::state::DisksFfiState;
use disks_sort::{result::SortedDisks, strategy::SortStrategy};
use libc::c_char;
use std::ffi::CString;

/// FFI-compatible enum for the sorting strategy.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisksFfiStrategy {
    Sequential = 0,
    Lawnmower = 1,
}

impl From<DisksFfiStrategy> for SortStrategy {
    #[inline]
    fn from(strategy: DisksFfiStrategy) -> Self {
        match strategy {
            DisksFfiStrategy::Sequential => SortStrategy::Sequential,
            DisksFfiStrategy::Lawnmower => SortStrategy::Lawnmower,
        }
    }
}

/// FFI-compatible representation of a sort outcome.
/// Owns the C string naming the strategy, which stays valid until the
/// outcome is freed.
#[derive(Debug, Clone)]
pub struct DisksFfiOutcome {
    inner: SortedDisks,
    strategy_cstr: CString,
}

impl DisksFfiOutcome {
    /// Constructs a `DisksFfiOutcome` from a `SortedDisks`.
    ///
    /// # Panics
    ///
    /// This function will panic if the C string cannot be created, which
    /// cannot happen for the fixed strategy names.
    #[inline]
    pub fn new(inner: SortedDisks, strategy: SortStrategy) -> Self {
        let strategy_cstr = CString::new(strategy.as_str())
            .expect("`CString::new` should create valid C string");
        Self {
            inner,
            strategy_cstr,
        }
    }

    #[inline]
    pub fn inner(&self) -> &SortedDisks {
        &self.inner
    }
}

/// Sorts a copy of the row behind `state_ptr` with the given strategy.
/// The row itself is left unchanged. The returned outcome must be released
/// with `disks_outcome_free`.
///
/// # Panics
///
/// This function will panic if `state_ptr` is null or the row is not
/// alternating (see `DiskSorter::sort`).
///
/// # Safety
///
/// The caller must ensure that `state_ptr` is a valid pointer to a `DisksFfiState`.
#[no_mangle]
pub unsafe extern "C" fn disks_sort(
    state_ptr: *const DisksFfiState,
    strategy: DisksFfiStrategy,
) -> *mut DisksFfiOutcome {
    assert!(
        !state_ptr.is_null(),
        "called `disks_sort` with `state_ptr` as null pointer"
    );
    let strategy = SortStrategy::from(strategy);
    let sorted = strategy.sort((&*state_ptr).inner());
    let outcome = DisksFfiOutcome::new(sorted, strategy);
    Box::into_raw(Box::new(outcome))
}

/// Frees a `DisksFfiOutcome`.
///
/// # Safety
///
/// The caller must ensure that `ptr` is a valid pointer to a `DisksFfiOutcome`
/// allocated by `disks_sort`, or null.
#[no_mangle]
pub unsafe extern "C" fn disks_outcome_free(ptr: *mut DisksFfiOutcome) {
    if ptr.is_null() {
        return;
    }
    drop(Box::from_raw(ptr));
}

/// Returns the number of swaps the sort performed.
///
/// # Panics
///
/// This function will panic if `ptr` is null.
///
/// # Safety
///
/// The caller must ensure that `ptr` is a valid pointer to a `DisksFfiOutcome`.
#[no_mangle]
pub unsafe extern "C" fn disks_outcome_swap_count(ptr: *const DisksFfiOutcome) -> u64 {
    assert!(
        !ptr.is_null(),
        "called `disks_outcome_swap_count` with `ptr` as null pointer"
    );
    (&*ptr).inner.swap_count()
}

/// Returns the number of passes the sort performed.
///
/// # Panics
///
/// This function will panic if `ptr` is null.
///
/// # Safety
///
/// The caller must ensure that `ptr` is a valid pointer to a `DisksFfiOutcome`.
#[no_mangle]
pub unsafe extern "C" fn disks_outcome_passes(ptr: *const DisksFfiOutcome) -> u64 {
    assert!(
        !ptr.is_null(),
        "called `disks_outcome_passes` with `ptr` as null pointer"
    );
    (&*ptr).inner.statistics().passes
}

/// Returns the number of neighbor comparisons the sort performed.
///
/// # Panics
///
/// This function will panic if `ptr` is null.
///
/// # Safety
///
/// The caller must ensure that `ptr` is a valid pointer to a `DisksFfiOutcome`.
#[no_mangle]
pub unsafe extern "C" fn disks_outcome_comparisons(ptr: *const DisksFfiOutcome) -> u64 {
    assert!(
        !ptr.is_null(),
        "called `disks_outcome_comparisons` with `ptr` as null pointer"
    );
    (&*ptr).inner.statistics().comparisons
}

/// Returns a borrowed pointer to the sorted row. The pointer is valid until
/// the outcome is freed and must not be passed to `disks_state_free`.
///
/// # Panics
///
/// This function will panic if `ptr` is null.
///
/// # Safety
///
/// The caller must ensure that `ptr` is a valid pointer to a `DisksFfiOutcome`.
#[no_mangle]
pub unsafe extern "C" fn disks_outcome_after(ptr: *const DisksFfiOutcome) -> *const DisksFfiState {
    assert!(
        !ptr.is_null(),
        "called `disks_outcome_after` with `ptr` as null pointer"
    );
    DisksFfiState::from_ref((&*ptr).inner.after()) as *const DisksFfiState
}

/// Returns the name of the strategy that produced the outcome. The string is
/// owned by the outcome.
///
/// # Panics
///
/// This function will panic if `ptr` is null.
///
/// # Safety
///
/// The caller must ensure that `ptr` is a valid pointer to a `DisksFfiOutcome`.
#[no_mangle]
pub unsafe extern "C" fn disks_outcome_strategy_name(ptr: *const DisksFfiOutcome) -> *const c_char {
    assert!(
        !ptr.is_null(),
        "called `disks_outcome_strategy_name` with `ptr` as null pointer"
    );
    (&*ptr).strategy_cstr.as_ptr()
}
