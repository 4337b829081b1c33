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

use crate::decision::Decision;

/// A frame-structured LIFO stack of pending decisions for search.
///
/// `SearchStack` stores all enqueued `Decision`s linearly and uses a
/// `frames` index stack to mark tree-level boundaries. Popping a frame
/// truncates the `entries` slice back to the recorded start index.
///
/// Each level of the partition search enqueues at most two decisions
/// (left pile, right pile), so capacity is `2 * num_coins` entries and
/// `num_coins + 1` frames.
#[derive(Clone, Debug)]
pub struct SearchStack {
    /// The linear stack of pending decisions.
    entries: Vec<Decision>,
    /// A stack of indices pointing into `entries`.
    /// `frames[i]` stores the index in `entries` where depth `i` began.
    frames: Vec<usize>,
}

impl Default for SearchStack {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStack {
    /// Creates a new, empty `SearchStack`.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Creates a preallocated `SearchStack` for jars of the given size.
    #[inline]
    pub fn preallocated(num_coins: usize) -> Self {
        Self {
            entries: Vec::with_capacity(num_coins.saturating_mul(2)),
            frames: Vec::with_capacity(num_coins.saturating_add(1)),
        }
    }

    /// Ensures the stack has capacity for jars of the given size.
    #[inline]
    pub fn ensure_capacity(&mut self, num_coins: usize) {
        let entry_capacity = num_coins.saturating_mul(2);
        let frame_capacity = num_coins.saturating_add(1);

        if self.entries.capacity() < entry_capacity {
            self.entries
                .reserve(entry_capacity - self.entries.capacity());
        }
        if self.frames.capacity() < frame_capacity {
            self.frames.reserve(frame_capacity - self.frames.capacity());
        }
    }

    /// Returns the number of pending decisions in the stack.
    #[inline]
    pub fn num_entries(&self) -> usize {
        self.entries.len()
    }

    /// Returns the current search depth (number of frames).
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if there are no frames tracked (search exhausted).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Pushes a new frame onto the stack, marking the start of a new
    /// tree level.
    #[inline]
    pub fn push_frame(&mut self) {
        self.frames.push(self.entries.len());
    }

    /// Pops the current frame, truncating `entries` back to the start
    /// index recorded for this depth.
    #[inline]
    pub fn pop_frame(&mut self) -> Option<()> {
        let start = self.frames.pop()?;
        if self.entries.len() > start {
            self.entries.truncate(start);
        }
        Some(())
    }

    /// Pushes a single decision entry onto the stack.
    #[inline]
    pub fn push(&mut self, decision: Decision) {
        self.entries.push(decision);
    }

    /// Pops the next decision (LIFO) from the stack.
    #[inline]
    pub fn pop(&mut self) -> Option<Decision> {
        self.entries.pop()
    }

    /// Returns the current frame's start index in `entries`, if any.
    #[inline]
    pub fn current_level_start(&self) -> Option<usize> {
        self.frames.last().copied()
    }

    /// Returns `true` if the current level has no remaining decisions.
    #[inline]
    pub fn is_current_level_empty(&self) -> bool {
        match self.current_level_start() {
            Some(start) => self.entries.len() == start,
            None => true,
        }
    }

    /// Clears all entries and frames, keeping allocated capacity.
    #[inline]
    pub fn reset(&mut self) {
        self.entries.clear();
        self.frames.clear();
    }
}

impl std::fmt::Display for SearchStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchStack(entries: {}, frames: {})",
            self.entries.len(),
            self.frames.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::Pile;

    #[test]
    fn test_frames_bound_their_entries() {
        let mut stack = SearchStack::new();
        stack.push_frame();
        stack.push(Decision::new(0, Pile::Right));
        stack.push(Decision::new(0, Pile::Left));
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.num_entries(), 2);
        assert!(!stack.is_current_level_empty());

        // LIFO: the left decision pops first.
        let first = stack.pop().unwrap();
        assert_eq!(first.pile(), Pile::Left);

        stack.push_frame();
        stack.push(Decision::new(1, Pile::Right));
        stack.push(Decision::new(1, Pile::Left));
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.num_entries(), 3);

        // Popping the deeper frame drops its entries but not the parent's.
        stack.pop_frame().unwrap();
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.num_entries(), 1);
        assert_eq!(stack.pop().unwrap().pile(), Pile::Right);
        assert!(stack.is_current_level_empty());
    }

    #[test]
    fn test_reset_clears_but_keeps_capacity() {
        let mut stack = SearchStack::preallocated(8);
        stack.push_frame();
        stack.push(Decision::new(0, Pile::Left));
        stack.reset();
        assert!(stack.is_empty());
        assert_eq!(stack.num_entries(), 0);
        assert!(stack.is_current_level_empty());
    }

    #[test]
    fn test_pop_frame_on_empty_returns_none() {
        let mut stack = SearchStack::new();
        assert!(stack.pop_frame().is_none());
        assert!(stack.pop().is_none());
    }
}
