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

//! # Disks FFI
//!
//! **C-compatible bindings for the alternating disks sorters.**
//!
//! This crate exposes the disk row and both sorting strategies to C, C++,
//! Python and other hosts through a stable ABI built on **opaque handles**.
//!
//! ## Core Design Principles
//!
//! 1.  **Opaque Handles**: `DisksFfiState` and `DisksFfiOutcome` are only ever
//!     seen as raw pointers. Hosts read them through accessor functions.
//! 2.  **Explicit Lifecycle**: Every `_new` (or `disks_sort`) call must be
//!     paired with the matching `_free` call. Strings returned by
//!     `disks_state_to_string` are released with `disks_string_free`.
//! 3.  **Fail-Fast Safety**: `NULL` pointers, out-of-bounds indices and
//!     non-alternating input to `disks_sort` abort the process instead of
//!     causing undefined behavior. The only recoverable failure is
//!     `disks_state_new(0)`, which returns `NULL`.

pub mod sort;
pub mod state;
