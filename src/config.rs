/// Side length of the square grid.
pub const GRID_SIZE: usize = 4;
/// Number of tiles seeded onto a fresh grid.
pub const STARTING_TILES: usize = 2;
/// Probability that a spawned tile is a 4 rather than a 2.
pub const FOUR_TILE_CHANCE: f64 = 0.1;
