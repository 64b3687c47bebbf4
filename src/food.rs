use rand::Rng;

use crate::grid::{Cell, GridSize};
use crate::snake::Snake;

/// Rejection-sampling attempts before falling back to a full-board scan.
const RELOCATE_SAMPLE_ATTEMPTS: u32 = 32;

/// The single food item active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    /// Creates food at a fixed position.
    #[must_use]
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    /// Spawns food on a random cell not occupied by the snake.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, grid: GridSize, snake: &Snake) -> Self {
        Self {
            position: free_cell(rng, grid, snake),
        }
    }

    /// Moves the food to a random free cell, never onto the snake's body.
    pub fn relocate<R: Rng + ?Sized>(&mut self, rng: &mut R, grid: GridSize, snake: &Snake) {
        self.position = free_cell(rng, grid, snake);
    }

    /// Returns true when the given head cell sits on the food.
    #[must_use]
    pub fn is_eaten_by(self, head: Cell) -> bool {
        head == self.position
    }
}

/// Picks a uniformly random cell outside the snake's body.
///
/// Samples blindly first; on a crowded board where the attempts run out, the
/// free cells are enumerated and drawn from directly so the call always
/// terminates.
#[must_use]
pub fn free_cell<R: Rng + ?Sized>(rng: &mut R, grid: GridSize, snake: &Snake) -> Cell {
    for _ in 0..RELOCATE_SAMPLE_ATTEMPTS {
        let candidate = Cell {
            x: rng.gen_range(0..i32::from(grid.width)),
            y: rng.gen_range(0..i32::from(grid.height)),
        };
        if !snake.occupies(candidate) {
            return candidate;
        }
    }

    let mut candidates = Vec::with_capacity(grid.total_cells().saturating_sub(snake.len()));
    for y in 0..i32::from(grid.height) {
        for x in 0..i32::from(grid.width) {
            let cell = Cell { x, y };
            if !snake.occupies(cell) {
                candidates.push(cell);
            }
        }
    }

    assert!(
        !candidates.is_empty(),
        "free_cell: no free cells on the board ({}×{})",
        grid.width,
        grid.height,
    );

    candidates[rng.gen_range(0..candidates.len())]
}
