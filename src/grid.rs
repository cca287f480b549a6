//! The grid value type and its pure move transformations.
//!
//! Every transformation constructs a fresh grid; the pre-move grid a caller
//! holds is never observably mutated. The only non-determinism in the whole
//! engine is [`Grid::place_random_tile`], which takes its randomness from an
//! injected [`Rng`] so tests can substitute a seeded source.

use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};
use rand::Rng;

use crate::common::Direction;
use crate::config::{FOUR_TILE_CHANCE, GRID_SIZE};

/// Grid instantiation used by the stock 4×4 game.
pub type Grid4 = Grid<u32, GRID_SIZE>;

/// An N×N grid of tiles. Zero marks an empty cell; every non-zero cell
/// holds a power of 2 that is at least 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    cells: [[T; N]; N],
}

impl<T, const N: usize> Grid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Create an all-empty grid.
    pub fn new() -> Self {
        Grid {
            cells: [[T::zero(); N]; N],
        }
    }

    /// Build a grid from raw cell values.
    pub fn from_cells(cells: [[T; N]; N]) -> Self {
        Grid { cells }
    }

    /// Raw cell values, row-major.
    pub fn cells(&self) -> &[[T; N]; N] {
        &self.cells
    }

    /// Value at (`row`, `col`), or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|v| v.is_zero())
            .count()
    }

    /// `true` when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Sum of all cell values. Merges conserve this; only tile placement
    /// increases it.
    pub fn tile_sum(&self) -> T {
        self.cells
            .iter()
            .flatten()
            .fold(T::zero(), |acc, &v| acc + v)
    }

    /// Largest tile on the grid (zero for an empty grid).
    pub fn highest_tile(&self) -> T {
        self.cells
            .iter()
            .flatten()
            .fold(T::zero(), |acc, &v| if v > acc { v } else { acc })
    }

    /// Place a 2 (probability 0.9) or a 4 (probability 0.1) on an empty
    /// cell chosen uniformly at random. A full grid is returned unchanged;
    /// this is a defined no-op, not an error.
    pub fn place_random_tile<R: Rng>(&self, rng: &mut R) -> Self {
        let empty = self.empty_count();
        if empty == 0 {
            return *self;
        }
        let target = rng.random_range(0..empty);
        let two = T::one() + T::one();
        let value = if rng.random_bool(FOUR_TILE_CHANCE) {
            two + two
        } else {
            two
        };

        let mut next = *self;
        let mut seen = 0;
        for r in 0..N {
            for c in 0..N {
                if self.cells[r][c].is_zero() {
                    if seen == target {
                        next.cells[r][c] = value;
                        return next;
                    }
                    seen += 1;
                }
            }
        }
        next
    }

    /// Rotate the grid one quarter-turn counter-clockwise.
    pub fn rotate_quarter(&self) -> Self {
        let mut next = Self::new();
        for r in 0..N {
            for c in 0..N {
                next.cells[N - 1 - c][r] = self.cells[r][c];
            }
        }
        next
    }

    /// Rotate the grid by `quarter_turns` counter-clockwise quarter-turns.
    /// The inverse of `rotate(k)` is `rotate((4 - k) % 4)`.
    pub fn rotate(&self, quarter_turns: usize) -> Self {
        let mut next = *self;
        for _ in 0..quarter_turns % 4 {
            next = next.rotate_quarter();
        }
        next
    }

    /// Slide all non-zero values in each row toward the left end,
    /// preserving relative order and filling trailing cells with zero.
    pub fn compress(&self) -> Self {
        let mut next = Self::new();
        for r in 0..N {
            let mut pos = 0;
            for c in 0..N {
                if !self.cells[r][c].is_zero() {
                    next.cells[r][pos] = self.cells[r][c];
                    pos += 1;
                }
            }
        }
        next
    }

    /// Merge equal horizontally-adjacent pairs, left to right, in a single
    /// pass. The left cell doubles, the right cell zeroes, and the doubled
    /// value accrues to the returned `gained` total. A cell takes part in
    /// at most one merge per pass; the scan skips past a consumed pair.
    pub fn merge(&self) -> (Self, T) {
        let mut next = *self;
        let mut gained = T::zero();
        for r in 0..N {
            let mut c = 0;
            while c + 1 < N {
                let v = next.cells[r][c];
                if !v.is_zero() && v == next.cells[r][c + 1] {
                    let doubled = v + v;
                    next.cells[r][c] = doubled;
                    next.cells[r][c + 1] = T::zero();
                    gained = gained + doubled;
                    c += 2;
                } else {
                    c += 1;
                }
            }
        }
        (next, gained)
    }

    /// Resolve a directional move: rotate so `direction` becomes a leftward
    /// pass, compress, merge, re-compress, rotate back. Returns the new
    /// grid and the score gained by merges. The result equals `self` when
    /// the move would change nothing.
    pub fn shift(&self, direction: Direction) -> (Self, T) {
        let turns = direction.quarter_turns();
        let (merged, gained) = self.rotate(turns).compress().merge();
        (merged.compress().rotate((4 - turns) % 4), gained)
    }

    /// `true` while any move could still change the grid: some cell is
    /// empty, or some row or column holds an equal adjacent pair.
    pub fn has_moves_available(&self) -> bool {
        for r in 0..N {
            for c in 0..N {
                let v = self.cells[r][c];
                if v.is_zero() {
                    return true;
                }
                if c + 1 < N && v == self.cells[r][c + 1] {
                    return true;
                }
                if r + 1 < N && v == self.cells[r + 1][c] {
                    return true;
                }
            }
        }
        false
    }
}

impl<T, const N: usize> Default for Grid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Display for Grid<T, N>
where
    T: PrimInt + Unsigned + Zero + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for (i, v) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                if v.is_zero() {
                    write!(f, ".")?;
                } else {
                    write!(f, "{}", v)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
