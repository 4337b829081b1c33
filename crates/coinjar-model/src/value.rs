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

//! # Coin Value Trait
//!
//! Unified numeric bounds for the partition engine and harness. `CoinValue`
//! collects the integer capabilities the search requires into a single
//! alias, keeping generic signatures short and arithmetic semantics
//! predictable across the workspace.
//!
//! Coin values in an instance are always positive, but sums and differences
//! are computed with the same type, so the alias requires a signed primitive
//! integer. The default concrete type used by the CLI is `i64`.

use num_traits::{FromPrimitive, PrimInt, Signed};
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

/// A trait alias for numeric types that can be used as coin values.
///
/// These are usually the signed integer types `i16`, `i32`, `i64` and
/// `isize`. `i128` works but is slower on many platforms and is never
/// needed for jars of tens of coins.
pub trait CoinValue:
    PrimInt
    + Signed
    + FromPrimitive
    + FromStr
    + Hash
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
}

impl<T> CoinValue for T where
    T: PrimInt
        + Signed
        + FromPrimitive
        + FromStr
        + Hash
        + Debug
        + Display
        + Send
        + Sync
        + 'static
{
}
