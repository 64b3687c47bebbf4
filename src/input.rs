use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use rand::Rng;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit step for this direction in cell coordinates.
    ///
    /// The y axis grows downward, matching terminal rows.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Samples one of the four directions uniformly.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.gen_range(0..4) {
            0 => Self::Up,
            1 => Self::Down,
            2 => Self::Left,
            _ => Self::Right,
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Quit,
}

/// Polls and translates pending terminal key events.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the next pending input event without blocking.
    ///
    /// Call repeatedly until `None` to drain everything queued since the last
    /// frame; each call inspects at most one terminal event.
    pub fn poll_input(&mut self) -> io::Result<Option<GameInput>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }

        let Event::Key(key) = event::read()? else {
            return Ok(None);
        };
        if key.kind == KeyEventKind::Release {
            return Ok(None);
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(GameInput::Quit));
        }

        Ok(match key.code {
            KeyCode::Up | KeyCode::Char('w') => Some(GameInput::Direction(Direction::Up)),
            KeyCode::Down | KeyCode::Char('s') => Some(GameInput::Direction(Direction::Down)),
            KeyCode::Left | KeyCode::Char('a') => Some(GameInput::Direction(Direction::Left)),
            KeyCode::Right | KeyCode::Char('d') => Some(GameInput::Direction(Direction::Right)),
            KeyCode::Char('q') | KeyCode::Esc => Some(GameInput::Quit),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::Direction;

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn delta_is_a_unit_step() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let (dx, dy) = direction.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn random_direction_covers_all_four() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; 4];

        for _ in 0..64 {
            let index = match Direction::random(&mut rng) {
                Direction::Up => 0,
                Direction::Down => 1,
                Direction::Left => 2,
                Direction::Right => 3,
            };
            seen[index] = true;
        }

        assert!(seen.iter().all(|hit| *hit));
    }
}
