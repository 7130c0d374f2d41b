//! Fixed-size N×N occupancy mask packed into one unsigned integer.
//!
//! A 10×10 grid fits in a `u128`, so every layer of a [`Board`](crate::Board)
//! (ship cells, hits, misses) is a single word and the layers can be combined
//! with plain bitwise operators.

use core::ops::{BitAnd, BitOr};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// `N*N` does not fit in the backing integer.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column outside `[0, N)`.
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(f, "{n}x{n} grid does not fit in {capacity} bits")
            }
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "cell ({row}, {col}) is outside the grid")
            }
        }
    }
}

/// An N×N set of cells stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of cells on the grid.
    pub const CELLS: usize = N * N;

    /// Empty mask. Size is not checked; use [`BitBoard::try_new`] for that.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Empty mask, or `SizeTooLarge` if `N*N` exceeds the width of `T`.
    pub fn try_new() -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::CELLS > capacity {
            Err(BitBoardError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(Self::new())
        }
    }

    #[inline]
    fn index(row: usize, col: usize) -> Result<usize, BitBoardError> {
        if row < N && col < N {
            Ok(row * N + col)
        } else {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        }
    }

    /// Whether (row, col) is in the set.
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        let idx = Self::index(row, col)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Adds (row, col) to the set.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let idx = Self::index(row, col)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Number of cells in the set.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// `true` when the two masks share no cell.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        (self.bits & other.bits).is_zero()
    }

    /// Builds a mask from `(row, col)` pairs, failing on the first
    /// out-of-range pair.
    pub fn from_cells<I>(cells: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut mask = Self::new();
        for (r, c) in cells {
            mask.set(r, c)?;
        }
        Ok(mask)
    }

    /// Cells in the set, in row-major order.
    pub fn iter_set_bits(&self) -> SetBits<T, N> {
        SetBits {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..N {
            for c in 0..N {
                let set = ((self.bits >> (r * N + c)) & T::one()) != T::zero();
                f.write_str(if set { "# " } else { ". " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the cells of a [`BitBoard`].
#[derive(Clone, Copy)]
pub struct SetBits<T, const N: usize> {
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for SetBits<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / N, idx % N));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}
