use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{
    COLOR_BORDER, COLOR_FOOD, COLOR_SNAKE_BODY, COLOR_SNAKE_HEAD, COLOR_SNAKE_TAIL, GLYPH_FOOD,
    GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT, GLYPH_SNAKE_HEAD_RIGHT,
    GLYPH_SNAKE_HEAD_UP, GLYPH_SNAKE_TAIL,
};
use crate::game::GameState;
use crate::grid::{Cell, GridSize};
use crate::input::Direction;

/// Renders the full game frame from immutable state.
///
/// The whole frame is repainted every draw, so the trailing cell recorded by
/// the snake needs no explicit erase here.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let play_area = centered_play_area(frame.area(), state.grid());

    let block = Block::bordered().border_style(Style::new().fg(COLOR_BORDER));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, state);
    render_snake(frame, inner, state);
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let Some((x, y)) = logical_to_terminal(inner, state.grid(), state.food.position) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(COLOR_FOOD));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let head = state.snake.head();
    let tail = state.snake.segments().last().copied();

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, state.grid(), *segment) else {
            continue;
        };

        if *segment == head {
            let glyph = head_glyph(state.snake.direction());
            buffer.set_string(
                x,
                y,
                glyph,
                Style::new().fg(COLOR_SNAKE_HEAD).add_modifier(Modifier::BOLD),
            );
            continue;
        }

        if Some(*segment) == tail {
            buffer.set_string(x, y, GLYPH_SNAKE_TAIL, Style::new().fg(COLOR_SNAKE_TAIL));
            continue;
        }

        buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(COLOR_SNAKE_BODY));
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

/// Centers the bordered board inside the terminal area, clamping when the
/// terminal is smaller than the board.
fn centered_play_area(area: Rect, grid: GridSize) -> Rect {
    let wanted_width = grid.width.saturating_add(2).min(area.width);
    let wanted_height = grid.height.saturating_add(2).min(area.height);

    Rect {
        x: area.x + (area.width - wanted_width) / 2,
        y: area.y + (area.height - wanted_height) / 2,
        width: wanted_width,
        height: wanted_height,
    }
}

fn logical_to_terminal(inner: Rect, grid: GridSize, cell: Cell) -> Option<(u16, u16)> {
    if !cell.is_within_bounds(grid) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::grid::{Cell, GridSize};

    use super::{centered_play_area, logical_to_terminal};

    #[test]
    fn play_area_is_centered_and_clamped() {
        let grid = GridSize {
            width: 32,
            height: 24,
        };

        let roomy = centered_play_area(Rect::new(0, 0, 80, 40), grid);
        assert_eq!(roomy.width, 34);
        assert_eq!(roomy.height, 26);
        assert_eq!(roomy.x, 23);
        assert_eq!(roomy.y, 7);

        let cramped = centered_play_area(Rect::new(0, 0, 20, 10), grid);
        assert_eq!(cramped.width, 20);
        assert_eq!(cramped.height, 10);
    }

    #[test]
    fn cells_outside_the_visible_area_are_skipped() {
        let grid = GridSize {
            width: 32,
            height: 24,
        };
        let inner = Rect::new(1, 1, 10, 5);

        assert_eq!(
            logical_to_terminal(inner, grid, Cell { x: 0, y: 0 }),
            Some((1, 1))
        );
        assert_eq!(logical_to_terminal(inner, grid, Cell { x: 20, y: 2 }), None);
        assert_eq!(logical_to_terminal(inner, grid, Cell { x: -1, y: 2 }), None);
    }
}
