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

/// The color of a single disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiskColor {
    Light,
    Dark,
}

impl DiskColor {
    /// Returns the single-letter code used when rendering a row of disks.
    #[inline]
    pub const fn code(&self) -> char {
        match self {
            DiskColor::Light => 'L',
            DiskColor::Dark => 'D',
        }
    }

    /// Returns the opposite color.
    #[inline]
    pub const fn flipped(&self) -> Self {
        match self {
            DiskColor::Light => DiskColor::Dark,
            DiskColor::Dark => DiskColor::Light,
        }
    }

    #[inline]
    pub const fn is_light(&self) -> bool {
        matches!(self, DiskColor::Light)
    }

    #[inline]
    pub const fn is_dark(&self) -> bool {
        matches!(self, DiskColor::Dark)
    }
}

impl std::fmt::Display for DiskColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_display() {
        assert_eq!(DiskColor::Light.code(), 'L');
        assert_eq!(DiskColor::Dark.code(), 'D');
        assert_eq!(format!("{}", DiskColor::Light), "L");
        assert_eq!(format!("{}", DiskColor::Dark), "D");
    }

    #[test]
    fn test_flipped_and_predicates() {
        assert_eq!(DiskColor::Light.flipped(), DiskColor::Dark);
        assert_eq!(DiskColor::Dark.flipped(), DiskColor::Light);
        assert!(DiskColor::Light.is_light());
        assert!(!DiskColor::Light.is_dark());
        assert!(DiskColor::Dark.is_dark());
        assert!(!DiskColor::Dark.is_light());
    }
}
