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

use disks_model::{color::DiskColor, index::DiskIndex, state::DiskState};
use libc::c_char;
use std::ffi::CString;

/// FFI-compatible wrapper around `DiskState`.
#[repr(transparent)]
#[derive(Debug, Clone)]
pub struct DisksFfiState {
    inner: DiskState,
}

impl DisksFfiState {
    #[inline]
    pub fn inner(&self) -> &DiskState {
        &self.inner
    }

    /// Reinterprets a borrowed `DiskState` as its FFI wrapper.
    #[inline]
    pub(crate) fn from_ref(state: &DiskState) -> &Self {
        // SAFETY: `DisksFfiState` is `repr(transparent)` over `DiskState`.
        unsafe { &*(state as *const DiskState as *const DisksFfiState) }
    }
}

impl From<DiskState> for DisksFfiState {
    fn from(inner: DiskState) -> Self {
        DisksFfiState { inner }
    }
}

/// FFI-compatible disk color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisksFfiColor {
    Light = 0,
    Dark = 1,
}

impl From<DiskColor> for DisksFfiColor {
    #[inline]
    fn from(color: DiskColor) -> Self {
        match color {
            DiskColor::Light => DisksFfiColor::Light,
            DiskColor::Dark => DisksFfiColor::Dark,
        }
    }
}

/// Creates a new alternating row with `light_count` light and `light_count`
/// dark disks.
///
/// Returns a null pointer if `light_count` is zero or the row would be too
/// large to address.
#[no_mangle]
pub extern "C" fn disks_state_new(light_count: usize) -> *mut DisksFfiState {
    match DiskState::try_alternating(light_count) {
        Ok(inner) => Box::into_raw(Box::new(DisksFfiState { inner })),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Frees a `DisksFfiState`.
///
/// # Safety
///
/// The caller must ensure that `ptr` is a valid pointer to a `DisksFfiState`
/// allocated by `disks_state_new`, or null.
#[no_mangle]
pub unsafe extern "C" fn disks_state_free(ptr: *mut DisksFfiState) {
    if ptr.is_null() {
        return;
    }
    drop(Box::from_raw(ptr));
}

/// Returns the total number of disks.
///
/// # Panics
///
/// This function will panic if `ptr` is null.
///
/// # Safety
///
/// The caller must ensure that `ptr` is a valid pointer to a `DisksFfiState`.
#[no_mangle]
pub unsafe extern "C" fn disks_state_total_count(ptr: *const DisksFfiState) -> usize {
    assert!(
        !ptr.is_null(),
        "called `disks_state_total_count` with `ptr` as null pointer"
    );
    (&*ptr).inner.total_count()
}

/// Returns the number of light disks.
///
/// # Panics
///
/// This function will panic if `ptr` is null.
///
/// # Safety
///
/// The caller must ensure that `ptr` is a valid pointer to a `DisksFfiState`.
#[no_mangle]
pub unsafe extern "C" fn disks_state_light_count(ptr: *const DisksFfiState) -> usize {
    assert!(
        !ptr.is_null(),
        "called `disks_state_light_count` with `ptr` as null pointer"
    );
    (&*ptr).inner.light_count()
}

/// Returns the number of dark disks.
///
/// # Panics
///
/// This function will panic if `ptr` is null.
///
/// # Safety
///
/// The caller must ensure that `ptr` is a valid pointer to a `DisksFfiState`.
#[no_mangle]
pub unsafe extern "C" fn disks_state_dark_count(ptr: *const DisksFfiState) -> usize {
    assert!(
        !ptr.is_null(),
        "called `disks_state_dark_count` with `ptr` as null pointer"
    );
    (&*ptr).inner.dark_count()
}

/// Returns the color of the disk at `index`.
///
/// # Panics
///
/// This function will panic if `ptr` is null or if `index` is out of bounds
/// (see `DiskState::get`).
///
/// # Safety
///
/// The caller must ensure that `ptr` is a valid pointer to a `DisksFfiState`.
#[no_mangle]
pub unsafe extern "C" fn disks_state_get(ptr: *const DisksFfiState, index: usize) -> DisksFfiColor {
    assert!(
        !ptr.is_null(),
        "called `disks_state_get` with `ptr` as null pointer"
    );
    (&*ptr).inner.get(DiskIndex::new(index)).into()
}

/// Swaps the disk at `left_index` with its right neighbor.
///
/// # Panics
///
/// This function will panic if `ptr` is null or if `left_index` has no
/// right neighbor (see `DiskState::swap_adjacent`).
///
/// # Safety
///
/// The caller must ensure that `ptr` is a valid pointer to a `DisksFfiState`.
#[no_mangle]
pub unsafe extern "C" fn disks_state_swap_adjacent(ptr: *mut DisksFfiState, left_index: usize) {
    assert!(
        !ptr.is_null(),
        "called `disks_state_swap_adjacent` with `ptr` as null pointer"
    );
    (&mut *ptr).inner.swap_adjacent(DiskIndex::new(left_index));
}

/// Returns `true` if the row is in alternating format.
///
/// # Panics
///
/// This function will panic if `ptr` is null.
///
/// # Safety
///
/// The caller must ensure that `ptr` is a valid pointer to a `DisksFfiState`.
#[no_mangle]
pub unsafe extern "C" fn disks_state_is_alternating(ptr: *const DisksFfiState) -> bool {
    assert!(
        !ptr.is_null(),
        "called `disks_state_is_alternating` with `ptr` as null pointer"
    );
    (&*ptr).inner.is_alternating()
}

/// Returns `true` if all light disks are left of all dark disks.
///
/// # Panics
///
/// This function will panic if `ptr` is null.
///
/// # Safety
///
/// The caller must ensure that `ptr` is a valid pointer to a `DisksFfiState`.
#[no_mangle]
pub unsafe extern "C" fn disks_state_is_sorted(ptr: *const DisksFfiState) -> bool {
    assert!(
        !ptr.is_null(),
        "called `disks_state_is_sorted` with `ptr` as null pointer"
    );
    (&*ptr).inner.is_sorted()
}

/// Renders the row as a newly allocated, NUL-terminated string such as
/// `"L D L D"`. The string must be released with `disks_string_free`.
///
/// # Panics
///
/// This function will panic if `ptr` is null.
///
/// # Safety
///
/// The caller must ensure that `ptr` is a valid pointer to a `DisksFfiState`.
#[no_mangle]
pub unsafe extern "C" fn disks_state_to_string(ptr: *const DisksFfiState) -> *mut c_char {
    assert!(
        !ptr.is_null(),
        "called `disks_state_to_string` with `ptr` as null pointer"
    );
    // The text only contains 'L', 'D' and spaces.
    let text = CString::new((&*ptr).inner.to_text())
        .expect("`CString::new` should create valid C string");
    text.into_raw()
}

/// Frees a string returned by `disks_state_to_string`.
///
/// # Safety
///
/// The caller must ensure that `ptr` was returned by `disks_state_to_string`
/// and has not been freed yet, or is null.
#[no_mangle]
pub unsafe extern "C" fn disks_string_free(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }
    drop(CString::from_raw(ptr));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn test_new_and_free() {
        unsafe {
            let ptr = disks_state_new(3);
            assert!(!ptr.is_null());
            assert_eq!(disks_state_total_count(ptr), 6);
            assert_eq!(disks_state_light_count(ptr), 3);
            assert_eq!(disks_state_dark_count(ptr), 3);
            disks_state_free(ptr);
        }
    }

    #[test]
    fn test_new_with_zero_returns_null() {
        assert!(disks_state_new(0).is_null());
        unsafe {
            // Freeing null is a no-op.
            disks_state_free(std::ptr::null_mut());
        }
    }

    #[test]
    fn test_get_swap_and_predicates() {
        unsafe {
            let ptr = disks_state_new(2);
            assert_eq!(disks_state_get(ptr, 0), DisksFfiColor::Light);
            assert_eq!(disks_state_get(ptr, 1), DisksFfiColor::Dark);
            assert!(disks_state_is_alternating(ptr));
            assert!(!disks_state_is_sorted(ptr));

            disks_state_swap_adjacent(ptr, 1);
            assert_eq!(disks_state_get(ptr, 1), DisksFfiColor::Light);
            assert!(!disks_state_is_alternating(ptr));
            assert!(disks_state_is_sorted(ptr));

            disks_state_free(ptr);
        }
    }

    #[test]
    fn test_swap_last_pair_matches_core() {
        unsafe {
            let ptr = disks_state_new(3);
            let last_left = disks_state_total_count(ptr) - 2;
            disks_state_swap_adjacent(ptr, last_left);

            let mut expected = DiskState::alternating(3);
            expected.swap_adjacent(DiskIndex::new(last_left));

            assert_eq!((&*ptr).inner(), &expected);
            assert_eq!(disks_state_get(ptr, 5), DisksFfiColor::Light);
            assert_eq!(disks_state_get(ptr, 4), DisksFfiColor::Dark);

            disks_state_free(ptr);
        }
    }

    #[test]
    fn test_to_string() {
        unsafe {
            let ptr = disks_state_new(2);
            let text = disks_state_to_string(ptr);
            assert_eq!(CStr::from_ptr(text).to_str().unwrap(), "L D L D");
            disks_string_free(text);
            disks_state_free(ptr);
        }
    }
}
