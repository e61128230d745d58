//! A fixed-size occupancy set over an `N×N` grid, packed into an unsigned
//! integer `T` using const generics.
//!
//! The type is `no_std` friendly and never allocates. Cells are addressed as
//! `(x, y)` with `x` the column and `y` the row; bit `y * N + x` holds the
//! cell. Ship maps, shot maps, the hunter's candidate pool and the placement
//! pool are all bitboards.

use core::ops::{BitAnd, BitOr, Not, Sub};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};
use rand::Rng;

use crate::config::BOARD_SIZE;
use crate::coord::Coord;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested board size N*N exceeds capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Column or row index is out of bounds [0..N).
    IndexOutOfBounds { x: usize, y: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(f, "SizeTooLarge: N*N={} exceeds T::BITS={}", n * n, capacity)
            }
            BitBoardError::IndexOutOfBounds { x, y } => {
                write!(f, "IndexOutOfBounds: x={}, y={}", x, y)
            }
        }
    }
}

/// A fixed-size N×N bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
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
    const BOARD_BITS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    /// Empty board.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Board with every cell set.
    #[inline]
    pub fn full() -> Self {
        BitBoard { bits: Self::mask() }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if N*N > T::BITS.
    pub fn try_new() -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::BOARD_BITS > capacity {
            Err(BitBoardError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(Self::new())
        }
    }

    /// Number of set cells.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Bit at (x, y), failing on out-of-range indices.
    pub fn get(&self, x: usize, y: usize) -> Result<bool, BitBoardError> {
        Self::check_bounds(x, y)?;
        Ok(self.bit(y * N + x))
    }

    /// Bit at (x, y); anything off the board reads as unset.
    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < N && y < N && self.bit(y * N + x)
    }

    pub fn set(&mut self, x: usize, y: usize) -> Result<(), BitBoardError> {
        Self::check_bounds(x, y)?;
        self.bits = self.bits | (T::one() << (y * N + x));
        Ok(())
    }

    pub fn clear(&mut self, x: usize, y: usize) -> Result<(), BitBoardError> {
        Self::check_bounds(x, y)?;
        self.bits = self.bits & !(T::one() << (y * N + x));
        Ok(())
    }

    /// Position of the `k`-th set cell in row-major order.
    pub fn nth_set(&self, k: usize) -> Option<(usize, usize)> {
        self.iter().nth(k)
    }

    /// Creates a bitboard from the raw integer, masking out bits past N*N.
    #[inline]
    pub fn from_raw(raw: T) -> Self {
        BitBoard {
            bits: raw & Self::mask(),
        }
    }

    /// Iterator over set cells as `(x, y)`, row by row.
    #[inline]
    pub fn iter(&self) -> SetBits<T, N> {
        SetBits {
            bits: self.bits,
            idx: 0,
        }
    }

    #[inline]
    fn bit(&self, idx: usize) -> bool {
        ((self.bits >> idx) & T::one()) != T::zero()
    }

    #[inline]
    fn check_bounds(x: usize, y: usize) -> Result<(), BitBoardError> {
        if x >= N || y >= N {
            Err(BitBoardError::IndexOutOfBounds { x, y })
        } else {
            Ok(())
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}x{}> ({} set):", N, N, self.len())?;
        fmt::Display::fmt(self, f)
    }
}

impl<T, const N: usize> fmt::Display for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..N {
            for x in 0..N {
                let cell = if self.bit(y * N + x) { '■' } else { '□' };
                write!(f, "{} ", cell)?;
            }
            if y + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the set cells of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
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
                return Some((idx % N, idx / N));
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
        BitBoard::from_raw(self.bits & rhs.bits)
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.bits | rhs.bits)
    }
}

/// Set difference: cells in `self` that are not in `rhs`.
impl<T, const N: usize> Sub for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.bits & !rhs.bits)
    }
}

/// Complement within board bounds.
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::from_raw(!self.bits)
    }
}

/// The game grid: one bit per cell of the 10×10 board.
pub type Grid = BitBoard<u128, { BOARD_SIZE as usize }>;

impl Grid {
    /// Whether `coord` is in the set.
    #[inline]
    pub fn has(&self, coord: Coord) -> bool {
        self.contains(coord.x() as usize, coord.y() as usize)
    }

    /// Add `coord`. A `Coord` is always on the board, so this cannot fail.
    #[inline]
    pub fn mark(&mut self, coord: Coord) {
        self.bits |= 1u128 << coord.index();
    }

    /// Remove `coord`; removing an absent cell is a no-op.
    #[inline]
    pub fn unmark(&mut self, coord: Coord) {
        self.bits &= !(1u128 << coord.index());
    }

    /// Set cells as coordinates, row by row.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.iter().filter_map(|(x, y)| Coord::new(x as u8, y as u8))
    }

    /// Uniformly random member of the set, or `None` when empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Coord> {
        let n = self.len();
        if n == 0 {
            return None;
        }
        let (x, y) = self.nth_set(rng.random_range(0..n))?;
        Coord::new(x as u8, y as u8)
    }
}

impl FromIterator<Coord> for Grid {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut grid = Grid::new();
        for c in iter {
            grid.mark(c);
        }
        grid
    }
}
