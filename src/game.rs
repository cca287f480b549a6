//! Game state holder: grid, score, and the game-over flag.

use num_traits::{PrimInt, Unsigned, Zero};
use rand::Rng;

use crate::common::{Direction, GameStatus, MoveOutcome};
use crate::config::{GRID_SIZE, STARTING_TILES};
use crate::grid::Grid;

/// Engine instantiation used by the stock 4×4 game.
pub type Game4 = GameEngine<u32, GRID_SIZE>;

/// Serializable snapshot of a game, for the presentation layer to read or
/// hand back within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "std",
    serde(bound(
        serialize = "[[T; N]; N]: serde::Serialize, T: serde::Serialize",
        deserialize = "[[T; N]; N]: serde::Deserialize<'de>, T: serde::Deserialize<'de>"
    ))
)]
pub struct GameSnapshot<T, const N: usize> {
    pub cells: [[T; N]; N],
    pub score: T,
    pub game_over: bool,
}

/// Core engine holding the current grid, the running score, and whether
/// the game has reached its terminal state.
///
/// The engine is mutated only through [`GameEngine::apply_move`]; once the
/// game-over flag is set, every further move is rejected until a new engine
/// is constructed.
pub struct GameEngine<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    grid: Grid<T, N>,
    score: T,
    game_over: bool,
}

impl<T, const N: usize> GameEngine<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Start a new game: an empty grid seeded with two random tiles,
    /// score zero, not over. Never fails.
    pub fn with_rng<R: Rng>(rng: &mut R) -> Self {
        let mut grid = Grid::new();
        for _ in 0..STARTING_TILES {
            grid = grid.place_random_tile(rng);
        }
        Self {
            grid,
            score: T::zero(),
            game_over: false,
        }
    }

    /// Start a new game using the thread-local RNG.
    #[cfg(feature = "std")]
    pub fn new() -> Self {
        Self::with_rng(&mut rand::rng())
    }

    /// Current grid contents.
    pub fn grid(&self) -> &Grid<T, N> {
        &self.grid
    }

    /// Running score. Monotonically non-decreasing within a game.
    pub fn score(&self) -> T {
        self.score
    }

    /// `true` once no move in any direction could change the grid.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.game_over {
            GameStatus::GameOver
        } else {
            GameStatus::Playing
        }
    }

    /// Resolve a move in `direction`.
    ///
    /// A move that would leave the grid unchanged is rejected outright: no
    /// score is added, no tile spawns, and no game-over check runs. When
    /// the grid does change, the merge gains are added to the score, one
    /// random tile is placed, and the result is checked for remaining
    /// moves; if none are left the game-over flag is set.
    pub fn apply_move<R: Rng>(&mut self, direction: Direction, rng: &mut R) -> MoveOutcome<T> {
        if self.game_over {
            return MoveOutcome::Rejected;
        }
        let (shifted, gained) = self.grid.shift(direction);
        if shifted == self.grid {
            return MoveOutcome::Rejected;
        }
        self.score = self.score + gained;
        self.grid = shifted.place_random_tile(rng);
        if !self.grid.has_moves_available() {
            self.game_over = true;
        }
        MoveOutcome::Moved { gained }
    }

    /// Generate a snapshot of the current state.
    pub fn snapshot(&self) -> GameSnapshot<T, N> {
        GameSnapshot {
            cells: *self.grid.cells(),
            score: self.score,
            game_over: self.game_over,
        }
    }

    /// Restore an engine from a previously captured snapshot.
    pub fn from_snapshot(snapshot: GameSnapshot<T, N>) -> Self {
        Self {
            grid: Grid::from_cells(snapshot.cells),
            score: snapshot.score,
            game_over: snapshot.game_over,
        }
    }
}

impl<T, const N: usize> From<&GameEngine<T, N>> for GameSnapshot<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn from(engine: &GameEngine<T, N>) -> Self {
        engine.snapshot()
    }
}
