// Copyright (c) 2025 Coinjar Contributors.
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

/// A strongly-typed, 1-based test-case identifier.
///
/// Labels are positive integers, unique within a batch. The batch report
/// writer additionally requires them to be dense (`1..=n`).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct CaseLabel(u32);

impl CaseLabel {
    /// Creates a new `CaseLabel`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is zero; labels are 1-based.
    #[inline]
    pub fn new(value: u32) -> Self {
        assert!(value != 0, "called `CaseLabel::new` with zero: labels are 1-based");
        Self(value)
    }

    /// Returns the underlying label value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CaseLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_roundtrip_and_ordering() {
        let a = CaseLabel::new(1);
        let b = CaseLabel::new(2);
        assert_eq!(a.get(), 1);
        assert!(a < b);
        assert_eq!(format!("{}", b), "2");
    }

    #[test]
    #[should_panic(expected = "labels are 1-based")]
    fn test_zero_label_panics() {
        let _ = CaseLabel::new(0);
    }
}
