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

//! The decision unit of the search tree: one coin, one pile.

/// The pile a coin is assigned to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Pile {
    /// The left pile.
    Left,
    /// The right pile.
    Right,
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "Left"),
            Self::Right => write!(f, "Right"),
        }
    }
}

/// A pending branching choice: assign the coin at `item_index` to `pile`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Decision {
    // u32 keeps the entry at 8 bytes; jars are tens of coins.
    item_index: u32,
    pile: Pile,
}

impl Decision {
    /// Creates a new `Decision`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `item_index` does not fit in 32 bits.
    #[inline]
    pub fn new(item_index: usize, pile: Pile) -> Self {
        debug_assert!(
            u32::try_from(item_index).is_ok(),
            "called `Decision::new` with item index {} exceeding u32",
            item_index
        );
        Self {
            item_index: item_index as u32,
            pile,
        }
    }

    /// Returns the zero-based index of the coin this decision assigns.
    #[inline]
    pub fn item_index(self) -> usize {
        self.item_index as usize
    }

    /// Returns the pile this decision assigns the coin to.
    #[inline]
    pub fn pile(self) -> Pile {
        self.pile
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Decision(item: {}, pile: {})", self.item_index, self.pile)
    }
}
