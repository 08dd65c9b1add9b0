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

//! # Disks Model
//!
//! **The domain model for the alternating disks problem.**
//!
//! A row holds `2k` disks, `k` light and `k` dark, initially alternating
//! `L D L D ...`. The goal of the sorters built on top of this crate is to
//! move every light disk to the left of every dark disk using only swaps of
//! neighboring disks.
//!
//! ## Modules
//!
//! * **`color`**: The two disk colors and their single-letter codes.
//! * **`index`**: `DiskIndex`, a typed position inside a row.
//! * **`state`**: `DiskState`, the row itself, with bounds-checked access,
//!   adjacent swaps, and the alternating/sorted predicates.
//!
//! ## Design Philosophy
//!
//! 1.  **Fixed Shape**: The length of a row never changes after construction,
//!     and the only mutation is an adjacent swap, so the light/dark counts are
//!     an invariant rather than something to re-check.
//! 2.  **Fail-Fast**: Constructors and accessors assert their contracts and
//!     panic with a message naming the call.

pub mod color;
pub mod index;
pub mod state;
