use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::food::Food;
use crate::grid::GridSize;
use crate::input::{Direction, GameInput};
use crate::snake::{Snake, TickOutcome};

/// Complete mutable game state for one session.
///
/// Owns the grid, the snake, the food, and the RNG driving food placement and
/// post-collision direction rolls. Nothing here performs I/O; the binary's
/// loop drives `tick` and hands the state to the renderer.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub tick_count: u64,
    grid: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a state seeded from the OS entropy source.
    #[must_use]
    pub fn new(grid: GridSize) -> Self {
        Self::new_with_seed(grid, rand::random())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(grid: GridSize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let snake = Snake::new(grid.center(), Direction::Right);
        let food = Food::spawn(&mut rng, grid, &snake);

        Self {
            snake,
            food,
            tick_count: 0,
            grid,
            rng,
        }
    }

    /// Advances the simulation by one gameplay tick.
    ///
    /// Moves the snake once, then checks the head against the food; eating
    /// raises the growth target and relocates the food off the body. A
    /// self-collision has already reset the snake in place by the time
    /// `advance` returns, so the session simply keeps running.
    pub fn tick(&mut self) -> TickOutcome {
        self.tick_count += 1;

        let outcome = self.snake.advance(self.grid, &mut self.rng);

        if self.food.is_eaten_by(self.snake.head()) {
            self.snake.grow();
            self.food.relocate(&mut self.rng, self.grid, &self.snake);
        }

        outcome
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => self.snake.set_pending_direction(direction),
            GameInput::Quit => {}
        }
    }

    /// Returns the board dimensions.
    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }
}
