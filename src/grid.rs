use crate::input::Direction;

/// Logical board dimensions in cells, passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells on the board.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns the center cell, used as the snake's birth position.
    #[must_use]
    pub fn center(self) -> Cell {
        Cell {
            x: i32::from(self.width / 2),
            y: i32::from(self.height / 2),
        }
    }

    /// Returns the cell one step from `cell` in `direction`, wrapping at the
    /// board edges (toroidal topology). Total: defined for every input.
    #[must_use]
    pub fn next_cell(self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell {
            x: cell.x + dx,
            y: cell.y + dy,
        }
        .wrapped(self)
    }
}

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Returns true when the cell lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns this cell wrapped into bounds on both axes independently.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(bounds.width)),
            y: wrap_axis(self.y, i32::from(bounds.height)),
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    let wrapped = value % upper_bound;
    if wrapped < 0 {
        wrapped + upper_bound
    } else {
        wrapped
    }
}
