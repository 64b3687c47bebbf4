use torus_snake::food::Food;
use torus_snake::game::GameState;
use torus_snake::grid::{Cell, GridSize};
use torus_snake::input::{Direction, GameInput};
use torus_snake::snake::{Snake, TickOutcome};

fn grid_32x24() -> GridSize {
    GridSize {
        width: 32,
        height: 24,
    }
}

#[test]
fn stepwise_feeding_turning_and_wrapping() {
    let mut state = GameState::new_with_seed(grid_32x24(), 42);
    state.food = Food::at(Cell { x: 17, y: 12 });

    // Fresh snake: one segment at the center, heading right.
    assert_eq!(state.snake.head(), Cell { x: 16, y: 12 });
    assert_eq!(state.snake.len(), 1);

    // First tick reaches the food; the trimmed tail cell is reported and the
    // growth target rises, so the body catches up on the following tick.
    assert_eq!(state.tick(), TickOutcome::Continued);
    assert_eq!(state.snake.head(), Cell { x: 17, y: 12 });
    assert_eq!(state.snake.len(), 1);
    assert_eq!(state.snake.last_removed(), Some(Cell { x: 16, y: 12 }));
    assert_eq!(state.snake.target_length(), 2);
    assert!(!state.snake.occupies(state.food.position));

    state.food = Food::at(Cell { x: 0, y: 0 });
    assert_eq!(state.tick(), TickOutcome::Continued);
    assert_eq!(state.snake.len(), 2);
    assert_eq!(state.snake.last_removed(), None);

    // A reversal request is ignored; a turn is honored on the next tick.
    state.apply_input(GameInput::Direction(Direction::Left));
    state.apply_input(GameInput::Direction(Direction::Up));
    assert_eq!(state.tick(), TickOutcome::Continued);
    assert_eq!(state.snake.head(), Cell { x: 18, y: 11 });

    // Ride up to the top edge: the head wraps to the bottom row.
    for _ in 0..11 {
        assert_eq!(state.tick(), TickOutcome::Continued);
    }
    assert_eq!(state.snake.head(), Cell { x: 18, y: 0 });
    assert_eq!(state.tick(), TickOutcome::Continued);
    assert_eq!(state.snake.head(), Cell { x: 18, y: 23 });
    assert_eq!(state.tick_count, 15);
}

#[test]
fn wrapping_into_the_body_restarts_in_place() {
    let mut state = GameState::new_with_seed(grid_32x24(), 7);
    state.snake = Snake::from_segments(
        vec![Cell { x: 0, y: 12 }, Cell { x: 31, y: 12 }],
        Direction::Left,
    );
    state.food = Food::at(Cell { x: 5, y: 5 });

    // The head wraps across the left edge onto its own second segment.
    assert_eq!(state.tick(), TickOutcome::Collided);
    assert_eq!(state.snake.len(), 1);
    assert_eq!(state.snake.target_length(), 1);
    assert_eq!(state.snake.head(), Cell { x: 16, y: 12 });

    // No terminal game-over state: the session keeps ticking and the tick
    // counter runs straight through the reset.
    assert_eq!(state.tick(), TickOutcome::Continued);
    assert_eq!(state.snake.len(), 1);
    assert_eq!(state.tick_count, 2);
}
