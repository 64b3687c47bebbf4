use std::collections::VecDeque;

use rand::Rng;

use crate::grid::{Cell, GridSize};
use crate::input::Direction;

/// Result of one movement tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The snake moved into a free cell.
    Continued,
    /// The snake ran into its own body and was reset in place.
    Collided,
}

/// Mutable snake state: body segments, direction buffering, growth target.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    pending_direction: Option<Direction>,
    target_length: usize,
    last_removed: Option<Cell>,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided direction.
    #[must_use]
    pub fn new(start: Cell, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self {
            body,
            direction,
            pending_direction: None,
            target_length: 1,
            last_removed: None,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// The target length matches the segment count, so the snake holds its
    /// shape until it grows.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, direction: Direction) -> Self {
        let target_length = segments.len().max(1);
        Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: None,
            target_length,
            last_removed: None,
        }
    }

    /// Buffers a direction change for the next tick.
    ///
    /// A reversal of the current direction is silently ignored so the snake
    /// can never fold back onto its own neck. Later calls within the same
    /// tick overwrite earlier ones (last input wins).
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }
        self.pending_direction = Some(direction);
    }

    /// Applies one movement tick.
    ///
    /// Adopts any buffered direction, steps the head one cell with toroidal
    /// wraparound, and checks the new head against the rest of the body.
    /// Hitting a non-adjacent segment resets the snake in place and reports
    /// [`TickOutcome::Collided`]; otherwise the tail is trimmed back to the
    /// target length, recording the trimmed cell for the renderer to erase.
    pub fn advance<R: Rng + ?Sized>(&mut self, grid: GridSize, rng: &mut R) -> TickOutcome {
        debug_assert!(grid.width > 0 && grid.height > 0);

        if let Some(pending) = self.pending_direction.take() {
            self.direction = pending;
        }

        let new_head = grid.next_cell(self.head(), self.direction);
        self.body.push_front(new_head);

        // Index 0 is the new head and index 1 the cell it just left; a match
        // anywhere deeper means the head landed on the body proper.
        if self.body.iter().skip(2).any(|segment| *segment == new_head) {
            self.reset(grid, rng);
            return TickOutcome::Collided;
        }

        if self.body.len() > self.target_length {
            self.last_removed = self.body.pop_back();
        } else {
            self.last_removed = None;
        }

        TickOutcome::Continued
    }

    /// Raises the target length by one; the body catches up on later ticks.
    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    /// Returns the snake to its birth state: one segment at the grid center
    /// and a freshly randomized direction.
    pub fn reset<R: Rng + ?Sized>(&mut self, grid: GridSize, rng: &mut R) {
        self.target_length = 1;
        self.body.clear();
        self.body.push_front(grid.center());
        self.direction = Direction::random(rng);
        self.pending_direction = None;
        self.last_removed = None;
    }

    /// Returns the current head cell.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns the cell trimmed from the tail on the last tick, if any.
    #[must_use]
    pub fn last_removed(&self) -> Option<Cell> {
        self.last_removed
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the length the body converges to between meals.
    #[must_use]
    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
